//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler saisie + évaluation sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - invariants clés : jamais de panique, au plus un '.' par segment, erreur => saisie "0",
//!   historique borné, chiffre par chiffre == littéral complet

use std::time::{Duration, Instant};

use super::entree::{Operateur, Scientifique};
use super::eval::{eval_expression, normaliser};
use super::historique::CAPACITE_HISTORIQUE;
use super::{Calculatrice, Entree, Historique, StockageMemoire};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’entrées (bornée) ------------------------ */

const SCIENTIFIQUES: [Scientifique; 11] = [
    Scientifique::Sin,
    Scientifique::Cos,
    Scientifique::Tan,
    Scientifique::Log,
    Scientifique::Racine,
    Scientifique::Exp,
    Scientifique::Puissance,
    Scientifique::Carre,
    Scientifique::Pi,
    Scientifique::OuvrePar,
    Scientifique::FermePar,
];

const OPERATEURS: [Operateur; 4] = [
    Operateur::Plus,
    Operateur::Moins,
    Operateur::Fois,
    Operateur::Divise,
];

fn gen_entree(rng: &mut Rng) -> Entree {
    match rng.pick(20) {
        0..=8 => Entree::Chiffre(char::from(b'0' + rng.pick(10) as u8)),
        9 | 10 => Entree::Point,
        11..=13 => Entree::Operateur(OPERATEURS[rng.pick(4) as usize]),
        14..=16 => Entree::Scientifique(SCIENTIFIQUES[rng.pick(11) as usize]),
        17 => Entree::Effacer,
        18 => Entree::Egal,
        _ => {
            // Vider rare : on veut des expressions longues
            if rng.pick(4) == 0 {
                Entree::Vider
            } else {
                Entree::Egal
            }
        }
    }
}

/// Littéral décimal sans zéro de tête superflu.
fn gen_litteral(rng: &mut Rng) -> String {
    let mut s = String::new();
    let n = 1 + rng.pick(8);
    for i in 0..n {
        let d = if i == 0 { 1 + rng.pick(9) } else { rng.pick(10) };
        s.push(char::from(b'0' + d as u8));
    }
    if rng.pick(2) == 0 {
        s.push('.');
        for _ in 0..(1 + rng.pick(5)) {
            s.push(char::from(b'0' + rng.pick(10) as u8));
        }
    }
    s
}

fn touche(c: char) -> Entree {
    if c == '.' {
        Entree::Point
    } else {
        Entree::Chiffre(c)
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_un_point_par_segment(expr: &str) {
    for seg in expr.split(['+', '-', '*', '/', '(', ')']) {
        assert!(
            seg.matches('.').count() <= 1,
            "segment {seg:?} avec plusieurs points dans {expr:?}"
        );
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_saisie_aleatoire_invariants() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xC0FFEE);
    let mut stockage = StockageMemoire::default();
    let mut historique = Historique::default();

    for _session in 0..200 {
        budget(start, max);
        let mut calc = Calculatrice::default();

        for _ in 0..60 {
            let e = gen_entree(&mut rng);
            let tr = calc.appliquer(e);
            calc = tr.etat;

            if let Some(ligne) = tr.historique {
                assert!(ligne.resultat.is_finite());
                historique
                    .enregistrer(ligne, &mut stockage)
                    .unwrap_or_else(|e| panic!("persistance: {e}"));
            }

            check_un_point_par_segment(&calc.saisie.expression);
            assert!(!calc.saisie.expression.is_empty(), "saisie vide après {e:?}");

            if calc.erreur {
                assert_eq!(calc.saisie.expression, "0");
                assert!(calc.saisie.reinit_en_attente);
            }

            assert!(historique.len() <= CAPACITE_HISTORIQUE);
        }
    }

    // le créneau persistant reflète exactement la mémoire
    assert_eq!(Historique::charger(&stockage), historique);
}

#[test]
fn fuzz_chiffre_par_chiffre_egal_litteral() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(42);

    for _ in 0..500 {
        budget(start, max);

        let a = gen_litteral(&mut rng);
        let b = gen_litteral(&mut rng);
        let op = OPERATEURS[rng.pick(3) as usize]; // + - * (pas de division par zéro)

        let mut calc = Calculatrice::default();
        for c in a.chars() {
            calc = calc.appliquer(touche(c)).etat;
        }
        calc = calc.appliquer(Entree::Operateur(op)).etat;
        for c in b.chars() {
            calc = calc.appliquer(touche(c)).etat;
        }

        let litteral = format!("{a}{}{b}", op.symbole());
        assert_eq!(calc.saisie.expression, litteral);

        let tr = calc.appliquer(Entree::Egal);
        let (x, y): (f64, f64) = (a.parse().unwrap(), b.parse().unwrap());
        let brut = match op {
            Operateur::Plus => x + y,
            Operateur::Moins => x - y,
            _ => x * y,
        };
        let attendu = normaliser(brut).unwrap_or_else(|e| panic!("{litteral:?}: {e}"));
        let obtenu = tr
            .historique
            .unwrap_or_else(|| panic!("pas d’historique pour {litteral:?}"))
            .resultat;
        assert_eq!(obtenu, attendu, "{litteral:?}");
    }
}

#[test]
fn fuzz_determinisme() {
    let rejoue = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut calc = Calculatrice::default();
        let mut trace = Vec::new();
        for _ in 0..300 {
            let tr = calc.appliquer(gen_entree(&mut rng));
            calc = tr.etat;
            trace.push(calc.affichage());
        }
        trace
    };
    assert_eq!(rejoue(7), rejoue(7));
}

#[test]
fn fuzz_textes_arbitraires_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    let alphabet: Vec<char> = "0123456789.+-*/()^πe√sincotalgqrxp ×÷E".chars().collect();
    let mut rng = Rng::new(1234);

    for _ in 0..2000 {
        budget(start, max);
        let n = rng.pick(25) as usize;
        let s: String = (0..n)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        // Ok ou Err, jamais de panique ; un Ok est toujours fini
        if let Ok(ev) = eval_expression(&s) {
            assert!(ev.resultat.is_finite(), "{s:?}");
        }
    }
}
