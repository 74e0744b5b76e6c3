// src/noyau/entree.rs
//
// Vocabulaire d’entrée unique (boutons + clavier).
// Deux sources, un seul chemin :
// - depuis_bouton(action, glyphe) : bouton libellé, avec étiquette d’action optionnelle
// - depuis_touche(touche)         : nom de touche ("7", "+", "Enter", "Backspace", …)

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }

    pub fn depuis_symbole(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Moins),
            "*" => Some(Self::Fois),
            "/" => Some(Self::Divise),
            _ => None,
        }
    }
}

/// Touches scientifiques (notation infixe : "sin(", "√(", "^"…).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scientifique {
    Sin,
    Cos,
    Tan,
    Log,
    Racine,
    Exp,
    Puissance,
    Carre,
    Pi,
    OuvrePar,
    FermePar,
}

impl Scientifique {
    pub fn depuis_action(action: &str) -> Option<Self> {
        match action {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            "sqrt" => Some(Self::Racine),
            "exp" => Some(Self::Exp),
            "pow" => Some(Self::Puissance),
            "square" => Some(Self::Carre),
            "pi" => Some(Self::Pi),
            "(" => Some(Self::OuvrePar),
            ")" => Some(Self::FermePar),
            _ => None,
        }
    }

    /// Texte ajouté à la saisie.
    pub fn texte(self) -> &'static str {
        match self {
            Self::Sin => "sin(",
            Self::Cos => "cos(",
            Self::Tan => "tan(",
            Self::Log => "log(",
            Self::Racine => "√(",
            Self::Exp => "e^(",
            Self::Puissance => "^",
            Self::Carre => "^2",
            Self::Pi => "π",
            Self::OuvrePar => "(",
            Self::FermePar => ")",
        }
    }

    /// Ouvre un groupe (ou π) : multiplication implicite possible avant.
    pub fn multiplication_implicite(self) -> bool {
        !matches!(self, Self::Puissance | Self::Carre | Self::FermePar)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entree {
    /// '0'..='9'
    Chiffre(char),
    Point,
    Operateur(Operateur),
    Scientifique(Scientifique),
    Egal,
    /// Effacement d’un caractère (DEL / Backspace)
    Effacer,
    /// Remise à zéro (C / Escape)
    Vider,
}

/// Bouton : sans action => le glyphe est un chiffre ou le point.
pub fn depuis_bouton(action: Option<&str>, glyphe: &str) -> Option<Entree> {
    match action {
        None => chiffre_ou_point(glyphe),
        Some("clear") => Some(Entree::Vider),
        Some("delete") => Some(Entree::Effacer),
        Some("equals") | Some("=") => Some(Entree::Egal),
        Some(a) => Operateur::depuis_symbole(a)
            .map(Entree::Operateur)
            .or_else(|| Scientifique::depuis_action(a).map(Entree::Scientifique)),
    }
}

/// Clavier : même jeu de touches que le widget web d’origine.
pub fn depuis_touche(touche: &str) -> Option<Entree> {
    match touche {
        "Enter" | "=" => Some(Entree::Egal),
        "Backspace" => Some(Entree::Effacer),
        "Escape" => Some(Entree::Vider),
        "(" => Some(Entree::Scientifique(Scientifique::OuvrePar)),
        ")" => Some(Entree::Scientifique(Scientifique::FermePar)),
        t => Operateur::depuis_symbole(t)
            .map(Entree::Operateur)
            .or_else(|| chiffre_ou_point(t)),
    }
}

fn chiffre_ou_point(glyphe: &str) -> Option<Entree> {
    let mut chars = glyphe.chars();
    match (chars.next(), chars.next()) {
        (Some('.'), None) => Some(Entree::Point),
        (Some(c), None) if c.is_ascii_digit() => Some(Entree::Chiffre(c)),
        _ => None,
    }
}
