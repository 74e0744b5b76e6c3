//! Historique des calculs (plus récent en tête, borné).
//!
//! Contrats :
//! - Mémoire et stockage toujours synchronisés : chaque mutation réécrit tout le créneau.
//! - Lecture tolérante : créneau absent ou illisible => historique vide (journalisé, pas affiché).
//! - Le stockage est abstrait (traits Lecture / Stockage) : mémoire pour les tests, eframe::Storage en vrai.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::erreur::ErreurHistorique;

/// Nombre maximal d’entrées conservées.
pub const CAPACITE_HISTORIQUE: usize = 20;

/// Nom du créneau clé-valeur (même clé que le widget web : localStorage).
pub const CLE_HISTORIQUE: &str = "ft_calc_history";

/// Une ligne d’historique. Format JSON : `{"expression": "...", "result": 4}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub expression: String,
    #[serde(rename = "result")]
    pub resultat: f64,
}

/// Lecture clé-valeur synchrone (suffit au chargement).
pub trait Lecture {
    fn lire(&self, cle: &str) -> Option<String>;
}

/// Stockage clé-valeur synchrone.
pub trait Stockage: Lecture {
    fn ecrire(&mut self, cle: &str, valeur: String);
}

/// Stockage en mémoire (tests, ou repli quand eframe n’offre pas de persistance).
#[derive(Clone, Debug, Default)]
pub struct StockageMemoire {
    valeurs: HashMap<String, String>,
}

impl Lecture for StockageMemoire {
    fn lire(&self, cle: &str) -> Option<String> {
        self.valeurs.get(cle).cloned()
    }
}

impl Stockage for StockageMemoire {
    fn ecrire(&mut self, cle: &str, valeur: String) {
        self.valeurs.insert(cle.to_string(), valeur);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    /// Relit le créneau persistant.
    pub fn charger(stockage: &dyn Lecture) -> Self {
        Self::depuis_texte(stockage.lire(CLE_HISTORIQUE).as_deref())
    }

    /// Texte brut du créneau -> historique (vide si absent ou illisible).
    pub fn depuis_texte(texte: Option<&str>) -> Self {
        let Some(texte) = texte else {
            return Self::default();
        };

        match decoder(texte) {
            Ok(mut entrees) => {
                entrees.truncate(CAPACITE_HISTORIQUE);
                tracing::debug!(n = entrees.len(), "historique chargé");
                Self { entrees }
            }
            Err(e) => {
                tracing::warn!(erreur = %e, "historique ignoré");
                Self::default()
            }
        }
    }

    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn get(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(index)
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Ajoute en tête, évince au-delà de la capacité, persiste.
    pub fn enregistrer(
        &mut self,
        entree: EntreeHistorique,
        stockage: &mut dyn Stockage,
    ) -> Result<(), ErreurHistorique> {
        self.entrees.insert(0, entree);
        self.entrees.truncate(CAPACITE_HISTORIQUE);
        self.persister(stockage)
    }

    /// Vide tout, persiste.
    pub fn vider(&mut self, stockage: &mut dyn Stockage) -> Result<(), ErreurHistorique> {
        self.entrees.clear();
        self.persister(stockage)
    }

    fn persister(&self, stockage: &mut dyn Stockage) -> Result<(), ErreurHistorique> {
        let json = serde_json::to_string(&self.entrees).map_err(ErreurHistorique::Ecriture)?;
        stockage.ecrire(CLE_HISTORIQUE, json);
        tracing::debug!(n = self.entrees.len(), "historique persisté");
        Ok(())
    }
}

fn decoder(texte: &str) -> Result<Vec<EntreeHistorique>, ErreurHistorique> {
    serde_json::from_str(texte).map_err(ErreurHistorique::Lecture)
}
