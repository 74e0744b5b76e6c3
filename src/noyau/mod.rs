//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - entree.rs       : vocabulaire d’entrée (boutons + clavier)
//! - saisie.rs       : construction de l’expression touche par touche
//! - jetons.rs       : tokenisation
//! - rpn.rs          : shunting-yard + construction Expr
//! - expr.rs         : AST f64 + table fonctions/constantes
//! - eval.rs         : pipeline complet + normalisation
//! - format.rs       : affichage (× ÷) + texte des résultats
//! - historique.rs   : historique borné + stockage clé-valeur
//! - calculatrice.rs : état + transitions pures
//! - erreur.rs       : erreurs typées

pub mod calculatrice;
pub mod entree;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calculatrice::Calculatrice;
pub use entree::{depuis_bouton, depuis_touche, Entree};
pub use historique::{Historique, Lecture, Stockage, StockageMemoire};
