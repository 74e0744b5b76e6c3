// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : calcul précédent (petit) + saisie ou "Error" (grand)
// - Pavé : chaque bouton = (libellé, étiquette d’action), traduit par noyau::depuis_bouton
// - Historique : panneau latéral (fermer, tout effacer, clic = reprise), fermé par un clic ailleurs
//
// Note :
// - La vue ne modifie pas l’état : elle pousse des Action, appliquées par app.rs
//   (qui seul a accès au stockage persistant de la frame).

use eframe::egui;

use super::etat::{Action, AppCalc};
use crate::noyau::depuis_bouton;
use crate::noyau::format::{format_affichage, format_resultat};

/// Pavé : (libellé, étiquette d’action). Sans étiquette => chiffre ou point.
const PAVE: [[(&str, Option<&str>); 4]; 7] = [
    [("sin", Some("sin")), ("cos", Some("cos")), ("tan", Some("tan")), ("log", Some("log"))],
    [("√", Some("sqrt")), ("x^y", Some("pow")), ("x²", Some("square")), ("e^x", Some("exp"))],
    [("(", Some("(")), (")", Some(")")), ("π", Some("pi")), ("C", Some("clear"))],
    [("7", None), ("8", None), ("9", None), ("÷", Some("/"))],
    [("4", None), ("5", None), ("6", None), ("×", Some("*"))],
    [("1", None), ("2", None), ("3", None), ("−", Some("-"))],
    [("0", None), (".", None), ("DEL", Some("delete")), ("+", Some("+"))],
];

const TAILLE_BOUTON: [f32; 2] = [64.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ctx: &egui::Context) {
        let bascule = self.ui_barre(ctx);

        if self.panneau_historique {
            let panneau = egui::SidePanel::right("panneau_historique")
                .resizable(false)
                .default_width(240.0)
                .show(ctx, |ui| self.ui_historique(ui));
            self.fermer_si_clic_exterieur(ctx, panneau.response.rect, bascule);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            // Densité “calc”
            ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

            self.ui_ecran(ui);
            ui.add_space(10.0);
            self.ui_pave(ui);
        });
    }

    /// Barre du haut ; renvoie le rectangle du bouton Historique.
    fn ui_barre(&mut self, ctx: &egui::Context) -> egui::Rect {
        egui::TopBottomPanel::top("barre")
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(crate::TITRE_APP);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let hist = ui
                            .button("Historique")
                            .on_hover_text("Afficher / masquer l’historique");
                        if hist.clicked() {
                            self.pousser(Action::BasculerHistorique);
                        }

                        let libelle = if self.theme_sombre { "Clair" } else { "Sombre" };
                        if ui.button(libelle).clicked() {
                            self.pousser(Action::BasculerTheme);
                        }

                        hist.rect
                    })
                    .inner
                })
                .inner
            })
            .inner
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(self.calc.affichage_secondaire())
                            .monospace()
                            .weak(),
                    );

                    let mut principal = egui::RichText::new(self.calc.affichage())
                        .monospace()
                        .size(32.0);
                    if self.calc.erreur {
                        principal = principal.color(ui.visuals().error_fg_color);
                    }
                    ui.label(principal);
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for (libelle, action) in rangee {
                        self.bouton(ui, libelle, action, TAILLE_BOUTON);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);
        let largeur = 4.0 * TAILLE_BOUTON[0] + 3.0 * 6.0;
        self.bouton(ui, "=", Some("equals"), [largeur, TAILLE_BOUTON[1]]);
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, action: Option<&str>, taille: [f32; 2]) {
        let resp = ui.add_sized(taille, egui::Button::new(libelle));
        if !resp.clicked() {
            return;
        }

        match depuis_bouton(action, libelle) {
            Some(entree) => self.pousser(Action::Saisie(entree)),
            None => tracing::debug!(libelle, "bouton sans effet"),
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Historique");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Fermer").clicked() {
                    self.pousser(Action::FermerHistorique);
                }
                if ui.button("Tout effacer").clicked() {
                    self.pousser(Action::ViderHistorique);
                }
            });
        });
        ui.separator();

        if self.historique.is_empty() {
            ui.weak("Aucun calcul pour l’instant");
            return;
        }

        let mut choisi = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (i, ligne) in self.historique.entrees().iter().enumerate() {
                    let texte = format!(
                        "{}\n= {}",
                        format_affichage(&ligne.expression),
                        format_resultat(ligne.resultat)
                    );
                    let resp = ui.add(
                        egui::Button::new(egui::RichText::new(texte).monospace())
                            .min_size(egui::vec2(ui.available_width(), 0.0)),
                    );
                    if resp.clicked() {
                        choisi = Some(i);
                    }
                }
            });

        if let Some(i) = choisi {
            self.pousser(Action::Selectionner(i));
        }
    }

    /// Clic primaire hors du panneau et hors du bouton de bascule => fermeture.
    fn fermer_si_clic_exterieur(&mut self, ctx: &egui::Context, panneau: egui::Rect, bascule: egui::Rect) {
        let clic = ctx.input(|i| {
            if i.pointer.primary_clicked() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });

        if let Some(pos) = clic {
            if !panneau.contains(pos) && !bascule.contains(pos) {
                self.pousser(Action::FermerHistorique);
            }
        }
    }
}
