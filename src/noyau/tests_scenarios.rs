//! Tests de scénarios : parcours complets clavier/boutons -> état -> historique persistant.
//!
//! On rejoue des suites d’entrées comme le ferait l’UI (Calculatrice + Historique + Stockage),
//! sans surface d’affichage.

use super::calculatrice::MARQUEUR_ERREUR;
use super::historique::{EntreeHistorique, CAPACITE_HISTORIQUE};
use super::{depuis_bouton, depuis_touche, Calculatrice, Entree, Historique, StockageMemoire};

/// Session minimale : état + historique + stockage mémoire.
struct Session {
    calc: Calculatrice,
    historique: Historique,
    stockage: StockageMemoire,
}

impl Session {
    fn nouvelle() -> Self {
        let stockage = StockageMemoire::default();
        Self {
            calc: Calculatrice::default(),
            historique: Historique::charger(&stockage),
            stockage,
        }
    }

    fn entree(&mut self, e: Entree) {
        let tr = self.calc.appliquer(e);
        self.calc = tr.etat;
        if let Some(ligne) = tr.historique {
            self.historique
                .enregistrer(ligne, &mut self.stockage)
                .unwrap_or_else(|e| panic!("persistance: {e}"));
        }
    }

    fn touches(&mut self, touches: &[&str]) -> &mut Self {
        for t in touches {
            let e = depuis_touche(t).unwrap_or_else(|| panic!("touche inconnue {t:?}"));
            self.entree(e);
        }
        self
    }

    fn bouton(&mut self, action: Option<&str>, glyphe: &str) -> &mut Self {
        let e = depuis_bouton(action, glyphe)
            .unwrap_or_else(|| panic!("bouton inconnu {action:?}/{glyphe:?}"));
        self.entree(e);
        self
    }

    /// Simule un rechargement de page.
    fn recharger(&mut self) {
        self.calc = Calculatrice::default();
        self.historique = Historique::charger(&self.stockage);
    }
}

#[test]
fn scn_deux_plus_deux_puis_plus_trois() {
    let mut s = Session::nouvelle();
    s.touches(&["2", "+", "2", "="]);
    assert_eq!(s.calc.affichage(), "4");
    s.touches(&["+", "3", "="]);
    assert_eq!(s.calc.affichage(), "7");

    let exprs: Vec<&str> = s
        .historique
        .entrees()
        .iter()
        .map(|e| e.expression.as_str())
        .collect();
    assert_eq!(exprs, vec!["4+3", "2+2"]);
}

#[test]
fn scn_sinus_180_au_bouton() {
    let mut s = Session::nouvelle();
    s.bouton(Some("sin"), "sin")
        .bouton(None, "1")
        .bouton(None, "8")
        .bouton(None, "0")
        .bouton(Some("equals"), "=");
    assert_eq!(s.calc.affichage(), "0");
    assert_eq!(s.calc.affichage_secondaire(), "sin(180) =");
}

#[test]
fn scn_fonctions_en_chaine() {
    let mut s = Session::nouvelle();
    // 2√(16)+π² -> 2*√(16)+π^2
    s.bouton(None, "2")
        .bouton(Some("sqrt"), "√")
        .bouton(None, "1")
        .bouton(None, "6")
        .bouton(Some(")"), ")")
        .bouton(Some("+"), "+")
        .bouton(Some("pi"), "π")
        .bouton(Some("square"), "x²");
    assert_eq!(s.calc.saisie.expression, "2*√(16)+π^2");
    assert_eq!(s.calc.affichage(), "2×√(16)+π^2");

    s.bouton(Some("equals"), "=");
    assert_eq!(s.calc.saisie.expression, "17.8696044");
}

#[test]
fn scn_exp_et_puissance() {
    let mut s = Session::nouvelle();
    s.bouton(Some("exp"), "eˣ")
        .bouton(None, "0")
        .touches(&["="]);
    assert_eq!(s.calc.affichage(), "1");

    s.touches(&["2"])
        .bouton(Some("pow"), "xʸ")
        .touches(&["1", "0", "Enter"]);
    assert_eq!(s.calc.affichage(), "1024");
}

#[test]
fn scn_point_double_ignore() {
    let mut s = Session::nouvelle();
    s.touches(&["1", ".", "2", ".", "3"]);
    assert_eq!(s.calc.saisie.expression, "1.23");
}

#[test]
fn scn_erreur_ne_touche_pas_l_historique() {
    let mut s = Session::nouvelle();
    s.touches(&["1", "/", "0", "="]);
    assert_eq!(s.calc.affichage(), MARQUEUR_ERREUR);
    assert_eq!(s.calc.saisie.expression, "0");
    assert!(s.historique.is_empty());

    // syntaxe : "5*(" fermée en "5*()" -> invalide
    s.touches(&["5", "*", "(", "="]);
    assert_eq!(s.calc.affichage(), MARQUEUR_ERREUR);
    assert!(s.historique.is_empty());
}

#[test]
fn scn_historique_survit_au_rechargement() {
    let mut s = Session::nouvelle();
    s.touches(&["3", "*", "3", "="]);
    s.recharger();
    assert_eq!(
        s.historique.entrees(),
        &[EntreeHistorique {
            expression: "3*3".into(),
            resultat: 9.0
        }]
    );

    s.historique.vider(&mut s.stockage).unwrap();
    s.recharger();
    assert!(s.historique.is_empty());
}

#[test]
fn scn_vingt_et_unieme_calcul_evince_le_plus_ancien() {
    let mut s = Session::nouvelle();
    for i in 1..=(CAPACITE_HISTORIQUE + 1) {
        let n = i.to_string();
        let mut touches: Vec<&str> = n.split("").filter(|t| !t.is_empty()).collect();
        touches.extend(["+", "0", "="]);
        s.touches(&touches);
    }
    assert_eq!(s.historique.len(), CAPACITE_HISTORIQUE);
    assert_eq!(
        s.historique.get(0).map(|e| e.expression.as_str()),
        Some("21+0")
    );
    assert_eq!(
        s.historique
            .get(CAPACITE_HISTORIQUE - 1)
            .map(|e| e.expression.as_str()),
        Some("2+0")
    );
}

#[test]
fn scn_puissance_d_un_resultat_negatif() {
    let mut s = Session::nouvelle();
    s.touches(&["0", "-", "4", "="]);
    assert_eq!(s.calc.affichage(), "-4");

    s.bouton(Some("pow"), "x^y").touches(&["2", "="]);
    assert_eq!(s.calc.affichage(), "-16");
    assert_eq!(s.historique.get(0).map(|e| e.expression.as_str()), Some("-4^2"));
}

#[test]
fn scn_reprise_d_une_ligne() {
    let mut s = Session::nouvelle();
    s.touches(&["1", "/", "8", "="]);
    s.touches(&["Escape"]);

    let ligne = s.historique.get(0).cloned().unwrap();
    s.calc = s.calc.reprendre(&ligne);
    assert_eq!(s.calc.affichage(), "0.125");

    s.touches(&["*", "8", "="]);
    assert_eq!(s.calc.affichage(), "1");
    // la reprise n’ajoute rien : seulement les deux calculs
    assert_eq!(s.historique.len(), 2);
}

#[test]
fn scn_effacer_caractere_par_caractere() {
    let mut s = Session::nouvelle();
    s.touches(&["1", "2", "+", "3"]);
    s.touches(&["Backspace", "Backspace"]);
    assert_eq!(s.calc.saisie.expression, "12");
    s.touches(&["Backspace", "Backspace", "Backspace"]);
    assert_eq!(s.calc.saisie.expression, "0");
}
