// src/noyau/expr.rs
//
// AST flottant (f64) + table fixe fonctions/constantes.
// - Nombre    : littéral
// - Constante : PI, E
// - Appel     : fonction unaire de la table (sin/cos/tan en degrés)
//
// IMPORTANT:
// - evaluer() ne panique jamais : division par zéro, domaine (√ négatif, log 0)
//   produisent ±inf / NaN, filtrés ensuite par eval::normaliser().

use std::f64::consts::{E, PI};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "PI" => Some(Self::Pi),
            "E" => Some(Self::E),
            _ => None,
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Self::Pi => PI,
            Self::E => E,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Sqrt,
    Exp,
}

impl Fonction {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            "sqrt" => Some(Self::Sqrt),
            "exp" => Some(Self::Exp),
            _ => None,
        }
    }

    /// Trigonométrie en degrés ; log en base 10.
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.to_radians().sin(),
            Self::Cos => x.to_radians().cos(),
            Self::Tan => x.to_radians().tan(),
            Self::Log => x.log10(),
            Self::Sqrt => x.sqrt(),
            Self::Exp => x.exp(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    Constante(Constante),

    Neg(Box<Expr>),
    Appel(Fonction, Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Parcours récursif de l’arbre.
    pub fn evaluer(&self) -> f64 {
        use Expr::*;

        match self {
            Nombre(v) => *v,
            Constante(c) => c.valeur(),
            Neg(x) => -x.evaluer(),
            Appel(f, x) => f.appliquer(x.evaluer()),
            Add(a, b) => a.evaluer() + b.evaluer(),
            Sub(a, b) => a.evaluer() - b.evaluer(),
            Mul(a, b) => a.evaluer() * b.evaluer(),
            Div(a, b) => a.evaluer() / b.evaluer(),
            Pow(a, b) => a.evaluer().powf(b.evaluer()),
        }
    }
}
