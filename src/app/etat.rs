//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir la calculatrice, l’historique et les préférences d’affichage,
//! et appliquer les actions collectées par la vue.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par noyau::Calculatrice::appliquer.
//! - L’historique est persisté au moment même de sa mutation (stockage passé en argument).
//! - Un échec de persistance est journalisé ; l’état mémoire reste valide.

use crate::noyau::historique::EntreeHistorique;
use crate::noyau::{Calculatrice, Entree, Historique, Stockage};

/// Actions produites par la vue (et le clavier), appliquées une fois la frame dessinée.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Saisie(Entree),
    Selectionner(usize),
    ViderHistorique,
    BasculerTheme,
    BasculerHistorique,
    FermerHistorique,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: Calculatrice,
    pub historique: Historique,

    // --- préférences (pur UI) ---
    pub theme_sombre: bool,
    pub panneau_historique: bool,

    // --- actions de la frame en cours ---
    pub en_attente: Vec<Action>,
}

impl AppCalc {
    pub fn avec_historique(historique: Historique) -> Self {
        Self {
            historique,
            ..Self::default()
        }
    }

    pub fn pousser(&mut self, action: Action) {
        self.en_attente.push(action);
    }

    /// Vide la file d’actions (ordre d’arrivée).
    pub fn prendre_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.en_attente)
    }

    pub fn executer(&mut self, action: Action, stockage: &mut dyn Stockage) {
        match action {
            Action::Saisie(entree) => {
                let tr = self.calc.appliquer(entree);
                self.calc = tr.etat;
                if let Some(ligne) = tr.historique {
                    self.enregistrer(ligne, stockage);
                }
            }
            Action::Selectionner(index) => {
                if let Some(ligne) = self.historique.get(index) {
                    self.calc = self.calc.reprendre(ligne);
                    self.panneau_historique = false;
                }
            }
            Action::ViderHistorique => {
                if let Err(e) = self.historique.vider(stockage) {
                    tracing::warn!(erreur = %e, "historique non persisté");
                }
            }
            Action::BasculerTheme => self.theme_sombre = !self.theme_sombre,
            Action::BasculerHistorique => self.panneau_historique = !self.panneau_historique,
            Action::FermerHistorique => self.panneau_historique = false,
        }
    }

    fn enregistrer(&mut self, ligne: EntreeHistorique, stockage: &mut dyn Stockage) {
        if let Err(e) = self.historique.enregistrer(ligne, stockage) {
            tracing::warn!(erreur = %e, "historique non persisté");
        }
    }
}
