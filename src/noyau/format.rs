// src/noyau/format.rs

/// Affichage : opérateurs internes -> glyphes (* -> ×, / -> ÷). Rien d’autre.
pub fn format_affichage(expression: &str) -> String {
    expression.replace('*', "×").replace('/', "÷")
}

/// Résultat normalisé -> texte réutilisable comme nouvelle saisie.
/// Décimal le plus court (jamais d’exposant), -0 rendu "0".
pub fn format_resultat(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
