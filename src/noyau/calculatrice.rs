//! État de la calculatrice + transitions pures.
//!
//! `appliquer(état, entrée) -> Transition { état suivant, entrée d’historique éventuelle }`
//!
//! Contrats :
//! - Aucune E/S ici : l’historique est rendu à l’appelant, qui le persiste.
//! - Erreur d’évaluation : saisie "0", reprise à neuf au prochain chiffre, marqueur Error.
//! - Toute entrée reçue pendant l’affichage Error commence par tout vider.

use super::entree::Entree;
use super::eval::eval_expression;
use super::format::{format_affichage, format_resultat};
use super::historique::EntreeHistorique;
use super::saisie::Saisie;

/// Marqueur affiché à la place de la saisie après un échec.
pub const MARQUEUR_ERREUR: &str = "Error";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Calculatrice {
    pub saisie: Saisie,
    /// Calcul précédent ("2+2 =") ; vide hors résultat.
    pub secondaire: String,
    pub erreur: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub etat: Calculatrice,
    pub historique: Option<EntreeHistorique>,
}

impl Transition {
    fn simple(etat: Calculatrice) -> Self {
        Self {
            etat,
            historique: None,
        }
    }
}

impl Calculatrice {
    /// Reprend le résultat d’une ligne d’historique comme point de départ.
    ///
    /// Seul le texte change : l’indicateur de reprise à neuf reste celui de la saisie
    /// courante (en pleine édition, un chiffre s’ajoute au résultat repris).
    pub fn reprendre(&self, entree: &EntreeHistorique) -> Self {
        Self {
            saisie: Saisie {
                expression: format_resultat(entree.resultat),
                reinit_en_attente: self.saisie.reinit_en_attente,
            },
            secondaire: self.secondaire.clone(),
            erreur: false,
        }
    }

    /// Texte principal (saisie formatée, ou marqueur d’erreur).
    pub fn affichage(&self) -> String {
        if self.erreur {
            MARQUEUR_ERREUR.to_string()
        } else {
            format_affichage(&self.saisie.expression)
        }
    }

    /// Texte secondaire (calcul précédent), avec les mêmes glyphes × ÷ que l’écran principal ;
    /// `secondaire` garde le texte brut.
    pub fn affichage_secondaire(&self) -> String {
        format_affichage(&self.secondaire)
    }

    pub fn appliquer(&self, entree: Entree) -> Transition {
        let depart = if self.erreur {
            Calculatrice::default()
        } else {
            self.clone()
        };

        let edition = |saisie: Saisie| {
            Transition::simple(Calculatrice {
                saisie,
                secondaire: String::new(),
                erreur: false,
            })
        };

        match entree {
            Entree::Chiffre(c) => edition(depart.saisie.chiffre(c)),
            Entree::Point => edition(depart.saisie.chiffre('.')),
            Entree::Operateur(op) => edition(depart.saisie.operateur(op)),
            Entree::Scientifique(s) => edition(depart.saisie.scientifique(s)),
            Entree::Effacer => edition(depart.saisie.effacer()),
            Entree::Vider => Transition::simple(Calculatrice::default()),
            Entree::Egal => depart.evaluer(),
        }
    }

    fn evaluer(&self) -> Transition {
        match eval_expression(&self.saisie.expression) {
            Ok(ev) => {
                tracing::debug!(expression = %ev.expression, resultat = ev.resultat, "calcul");
                Transition {
                    etat: Calculatrice {
                        saisie: Saisie::resultat(format_resultat(ev.resultat)),
                        secondaire: format!("{} =", ev.expression),
                        erreur: false,
                    },
                    historique: Some(EntreeHistorique {
                        expression: ev.expression,
                        resultat: ev.resultat,
                    }),
                }
            }
            Err(e) => {
                tracing::debug!(expression = %self.saisie.expression, erreur = %e, "échec du calcul");
                Transition::simple(Calculatrice {
                    saisie: Saisie::resultat(super::saisie::SAISIE_INITIALE),
                    secondaire: String::new(),
                    erreur: true,
                })
            }
        }
    }
}
