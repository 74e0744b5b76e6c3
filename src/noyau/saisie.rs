// src/noyau/saisie.rs
//
// Construction de l’expression, touche par touche.
//
// Contrats:
// - Transitions pures : chaque méthode consomme la saisie et rend la suivante.
// - Totales : aucune touche n’est refusée avec une erreur ; un second point dans
//   le même nombre est ignoré, le reste est laissé à l’évaluation.
// - Au plus un '.' par segment numérique (segment = texte après le dernier + - * / ( )).

use super::entree::{Operateur, Scientifique};

/// Valeur neutre de la saisie.
pub const SAISIE_INITIALE: &str = "0";

const OPERATEURS: [char; 4] = ['+', '-', '*', '/'];
const SEPARATEURS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Saisie {
    pub expression: String,
    /// Le texte affiché est un résultat figé : le prochain chiffre repart de zéro.
    pub reinit_en_attente: bool,
}

impl Default for Saisie {
    fn default() -> Self {
        Self {
            expression: SAISIE_INITIALE.to_string(),
            reinit_en_attente: false,
        }
    }
}

impl Saisie {
    /// Saisie qui affiche un résultat figé.
    pub fn resultat(texte: impl Into<String>) -> Self {
        Self {
            expression: texte.into(),
            reinit_en_attente: true,
        }
    }

    fn dernier(&self) -> Option<char> {
        self.expression.chars().last()
    }

    fn point_possible(&self) -> bool {
        let segment = self
            .expression
            .rsplit(|c: char| SEPARATEURS.contains(&c))
            .next()
            .unwrap_or("");
        !segment.contains('.')
    }

    /// Chiffre '0'..='9' ou '.'.
    pub fn chiffre(mut self, c: char) -> Self {
        if self.reinit_en_attente {
            self.expression.clear();
            self.reinit_en_attente = false;
        }

        if c == '.' {
            if self.point_possible() {
                self.expression.push('.');
            }
            return self;
        }

        if self.expression == SAISIE_INITIALE {
            self.expression = c.to_string();
            return self;
        }

        // (2+2)3 -> (2+2)*3 ; π3 -> π*3
        if matches!(self.dernier(), Some(')') | Some('π')) {
            self.expression.push('*');
        }
        self.expression.push(c);
        self
    }

    /// + - * / : remplace un opérateur final au lieu de l’empiler.
    /// Après un résultat, l’expression continue (le résultat devient l’opérande gauche).
    pub fn operateur(mut self, op: Operateur) -> Self {
        self.reinit_en_attente = false;

        if matches!(self.dernier(), Some(c) if OPERATEURS.contains(&c)) {
            self.expression.pop();
        }
        self.expression.push(op.symbole());
        self
    }

    pub fn scientifique(mut self, s: Scientifique) -> Self {
        self.reinit_en_attente = false;

        if self.expression == SAISIE_INITIALE {
            self.expression.clear();
        }

        // 2sin -> 2*sin( ; )( -> )*( ; π√ -> π*√(
        if s.multiplication_implicite()
            && matches!(self.dernier(), Some(c) if c.is_ascii_digit() || c == ')' || c == 'π')
        {
            self.expression.push('*');
        }
        self.expression.push_str(s.texte());
        self
    }

    /// DEL : sur un résultat figé, équivaut à vider ; sinon retire un caractère.
    pub fn effacer(mut self) -> Self {
        if self.reinit_en_attente {
            return Self::default();
        }

        self.expression.pop();
        if self.expression.is_empty() {
            return Self::default();
        }
        self
    }
}
