// src/noyau/erreur.rs
//
// Erreurs typées du noyau.
// - ErreurCalcul     : lecture / évaluation d’une expression (toujours récupérable)
// - ErreurHistorique : persistance de l’historique (JSON)

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalcul {
    #[error("Entrée vide")]
    ExpressionVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("identifiant inconnu: {0}")]
    IdentifiantInconnu(String),

    #[error("fonction sans argument: {0}")]
    FonctionSansArgument(String),

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseOrpheline,

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("résultat non fini ({0})")]
    ResultatNonFini(f64),
}

#[derive(Debug, Error)]
pub enum ErreurHistorique {
    #[error("historique illisible: {0}")]
    Lecture(#[source] serde_json::Error),

    #[error("historique non sérialisable: {0}")]
    Ecriture(#[source] serde_json::Error),
}
