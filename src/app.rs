// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + stockage.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Déroulé d’une frame:
// 1) clavier global -> actions
// 2) vue -> actions (boutons, historique)
// 3) actions appliquées, historique persisté via frame.storage_mut()

pub mod etat;
pub mod stockage;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::{depuis_touche, Entree, Historique, StockageMemoire};
use etat::Action;
use stockage::{LectureEframe, StockageEframe};

impl AppCalc {
    /// Création : relit l’historique persistant (créneau absent ou illisible => vide).
    pub fn nouveau(cc: &eframe::CreationContext<'_>) -> Self {
        let historique = match cc.storage {
            Some(s) => Historique::charger(&LectureEframe(s)),
            None => {
                tracing::warn!("stockage eframe indisponible, historique vide");
                Historique::default()
            }
        };
        tracing::info!(entrees = historique.len(), "calculatrice prête");
        Self::avec_historique(historique)
    }

    /// Clavier global : chiffres, . + - * / ( ) =, Enter, Backspace, Escape.
    ///
    /// Les caractères arrivent en Event::Text ; seules Enter/Backspace/Escape sont lues
    /// en Event::Key (sinon un chiffre serait compté deux fois).
    fn lire_clavier(&mut self, ctx: &egui::Context) {
        let entrees: Vec<Entree> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => depuis_touche(t),
                    egui::Event::Key {
                        key: k @ (egui::Key::Enter | egui::Key::Backspace | egui::Key::Escape),
                        pressed: true,
                        ..
                    } => depuis_touche(k.name()),
                    _ => None,
                })
                .collect()
        });

        for e in entrees {
            self.pousser(Action::Saisie(e));
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.lire_clavier(ctx);

        ctx.set_visuals(if self.theme_sombre {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.ui(ctx);

        let actions = self.prendre_actions();
        if actions.is_empty() {
            return;
        }

        match frame.storage_mut() {
            Some(s) => {
                let mut st = StockageEframe(s);
                for a in actions {
                    self.executer(a, &mut st);
                }
            }
            None => {
                // persistance désactivée : l’historique vit seulement en mémoire
                tracing::warn!("stockage eframe indisponible");
                let mut st = StockageMemoire::default();
                for a in actions {
                    self.executer(a, &mut st);
                }
            }
        }

        // les actions sont appliquées après le dessin : redessiner tout de suite
        ctx.request_repaint();
    }
}
