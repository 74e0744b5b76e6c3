//! Noyau — évaluation (pipeline réel)
//!
//! fermeture des parenthèses -> réécriture des symboles -> jetons -> RPN -> Expr
//!        -> parcours -> normalisation (entier proche / 8 décimales)
//!
//! Aucun code n’est généré à partir du texte : seule la grammaire de rpn.rs est acceptée.

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{from_rpn, to_rpn};

/// Écart sous lequel un résultat est ramené à l’entier le plus proche (sin(180) = 0).
const SEUIL_ENTIER: f64 = 1e-10;

/// Arrondi des résultats non entiers.
const DECIMALES: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Expression après fermeture automatique des parenthèses (celle qu’on historise).
    pub expression: String,
    pub resultat: f64,
}

/// API publique : évalue l’expression de saisie.
pub fn eval_expression(expr_str: &str) -> Result<Evaluation, ErreurCalcul> {
    let expression = fermer_parentheses(expr_str);
    let resultat = evaluer_texte(&expression)?;
    Ok(Evaluation {
        expression,
        resultat,
    })
}

/// Ajoute les ")" manquantes en fin d’expression (jamais d’erreur ici).
pub fn fermer_parentheses(s: &str) -> String {
    let ouvrantes = s.chars().filter(|&c| c == '(').count();
    let fermantes = s.chars().filter(|&c| c == ')').count();

    let mut out = s.to_string();
    for _ in fermantes..ouvrantes {
        out.push(')');
    }
    out
}

/// Symboles d’affichage -> noms de la table (× ÷ √ π, e^( -> exp().
pub fn reecrire(s: &str) -> String {
    s.replace('×', "*")
        .replace('÷', "/")
        .replace('√', "sqrt")
        .replace('π', "PI")
        .replace("e^(", "exp(")
}

/// Réécrit, lit, évalue et normalise un texte complet.
pub fn evaluer_texte(s: &str) -> Result<f64, ErreurCalcul> {
    let texte = reecrire(s);
    if texte.trim().is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }

    let jetons = tokenize(&texte)?;
    let rpn = to_rpn(&jetons)?;
    tracing::trace!(jetons = %format_tokens(&jetons), rpn = %format_tokens(&rpn), "lecture");

    let expr = from_rpn(&rpn)?;
    normaliser(expr.evaluer())
}

/// - non fini / NaN => erreur
/// - à moins de 1e-10 d’un entier => cet entier
/// - sinon arrondi à 8 décimales, sur la valeur binaire exacte
///   (`v * 1e8` arrondirait une première fois : 0.123456785 donnerait ...79)
pub fn normaliser(v: f64) -> Result<f64, ErreurCalcul> {
    if !v.is_finite() {
        return Err(ErreurCalcul::ResultatNonFini(v));
    }

    let entier = v.round();
    let out = if (v - entier).abs() < SEUIL_ENTIER {
        entier
    } else {
        let texte = format!("{v:.prec$}", prec = DECIMALES);
        texte
            .parse::<f64>()
            .map_err(|_| ErreurCalcul::NombreInvalide(texte))?
    };

    // -0 n’a pas de sens à l’écran
    Ok(if out == 0.0 { 0.0 } else { out })
}
