// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant l’alternance valeur/opérateur
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name):
//    - si name ∈ {sin, cos, tan, log, sqrt, exp} => fonction unaire, "(" obligatoire juste après
//    - si name ∈ {PI, E} => constante (atome)
//    - sinon => erreur (pas de variables)
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS d’opérateur, il devient Tok::Neg (préfixe)
//    - '+' unaire est neutre
// - Précédences : + - (1) < * / (2) < neg (3) < ^ (4, associatif à droite)
//   donc -2^2 = -(2^2) et 2^-1 = 2^(-1).
//   Volontaire : "-4^2" (ex. résultat négatif repris puis x^y) vaut -16, il n’est pas rejeté
//   comme une puissance ambiguë.

use super::erreur::ErreurCalcul;
use super::expr::{Constante, Expr, Fonction};
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Une valeur ne peut pas suivre une autre valeur (pas de multiplication implicite ici :
/// la saisie l’a déjà rendue explicite).
fn attendre_valeur(prev_was_value: bool) -> Result<(), ErreurCalcul> {
    if prev_was_value {
        Err(ErreurCalcul::ExpressionInvalide)
    } else {
        Ok(())
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Num(90), Slash, Num(2), RPar]
///   rpn:    [Num(90), Num(2), Slash, Ident("sin")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    if tokens.is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }

    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    let mut prev_was_value = false;
    let mut iter = tokens.iter().peekable();

    while let Some(tok) = iter.next() {
        match tok {
            Tok::Num(_) => {
                attendre_valeur(prev_was_value)?;
                out.push(tok.clone());
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                attendre_valeur(prev_was_value)?;
                if Fonction::depuis_nom(name).is_some() {
                    if !matches!(iter.peek(), Some(Tok::LPar)) {
                        return Err(ErreurCalcul::FonctionSansArgument(name.clone()));
                    }
                    // fonction : reste sur la pile, sortira après sa parenthèse fermante
                    ops.push(tok.clone());
                    prev_was_value = false;
                } else if Constante::depuis_nom(name).is_some() {
                    out.push(tok.clone());
                    prev_was_value = true;
                } else {
                    return Err(ErreurCalcul::IdentifiantInconnu(name.clone()));
                }
            }

            Tok::LPar => {
                attendre_valeur(prev_was_value)?;
                ops.push(Tok::LPar);
                prev_was_value = false;
            }

            Tok::RPar => {
                // "()" ou "(2+)"
                if !prev_was_value {
                    return Err(ErreurCalcul::ExpressionInvalide);
                }

                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurCalcul::ParentheseOrpheline),
                    }
                }

                // si une fonction est au sommet, elle englobe le groupe qu’on vient de fermer
                if let Some(Tok::Ident(_)) = ops.last() {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                if matches!(tok, Tok::Minus) {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                if !prev_was_value {
                    return Err(ErreurCalcul::ExpressionInvalide);
                }

                // dépile tant que:
                // - on n'est pas bloqué par '(' (ou une fonction en attente de son groupe)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar | Tok::Ident(_)) {
                        break;
                    }

                    let doit_pop = if is_right_associative(tok) {
                        precedence(top) > precedence(tok)
                    } else {
                        precedence(top) >= precedence(tok)
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok.clone());
                prev_was_value = false;
            }

            Tok::Neg => return Err(ErreurCalcul::ExpressionInvalide),
        }
    }

    // opérateur pendant en fin d’expression : "2+"
    if !prev_was_value {
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::ParenthesesNonFermees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurCalcul> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(Expr::Nombre(*v)),

            Tok::Ident(name) => {
                if let Some(c) = Constante::depuis_nom(name) {
                    st.push(Expr::Constante(c));
                } else if let Some(f) = Fonction::depuis_nom(name) {
                    let x = st
                        .pop()
                        .ok_or_else(|| ErreurCalcul::FonctionSansArgument(name.clone()))?;
                    st.push(Expr::Appel(f, Box::new(x)));
                } else {
                    return Err(ErreurCalcul::IdentifiantInconnu(name.clone()));
                }
            }

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                st.push(Expr::Neg(Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = Box::new(st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?);
                let a = Box::new(st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?);

                st.push(match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    Tok::Slash => Expr::Div(a, b),
                    _ => Expr::Pow(a, b),
                });
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalcul::ExpressionInvalide),
        }
    }

    if st.len() != 1 {
        return Err(ErreurCalcul::ExpressionInvalide);
    }
    st.pop().ok_or(ErreurCalcul::ExpressionInvalide)
}
