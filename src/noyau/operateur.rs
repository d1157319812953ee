// src/noyau/operateur.rs
//
// Table des opérateurs + exécuteur arithmétique.
//
// La précédence et l’associativité vivent dans UNE table (`Operateur::proprietes`) :
// ajouter un opérateur = une ligne ici + une branche dans `appliquer`.
//
// Politique du signe : '+'/'-' en position d’opérande est un opérateur UNAIRE,
// distinct de l’addition/soustraction, et lie plus fort que tout opérateur binaire.
// Donc "-2^2" = (-2)^2 = 4 (comme l’ancien calcul, où le signe collait au nombre),
// et "8+-5" = 3, "2^-1" = 0.5.

use num_traits::Float;

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Puissance,
    Division,
    Multiplication,
    Addition,
    Soustraction,
    Positif,
    Negatif,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proprietes {
    pub precedence: u8,
    pub associativite: Associativite,
    pub unaire: bool,
}

const fn binaire(precedence: u8) -> Proprietes {
    Proprietes {
        precedence,
        associativite: Associativite::Gauche,
        unaire: false,
    }
}

const SIGNE: Proprietes = Proprietes {
    precedence: 4,
    associativite: Associativite::Droite,
    unaire: true,
};

impl Operateur {
    /// BEDMAS : signe > ^ > (/ *) > (+ -).
    ///
    /// '^' est associatif à gauche : "2^3^2" = (2^3)^2 = 64, la première
    /// occurrence est réduite d’abord, comme pour les autres niveaux.
    pub const fn proprietes(self) -> Proprietes {
        match self {
            Operateur::Positif | Operateur::Negatif => SIGNE,
            Operateur::Puissance => binaire(3),
            Operateur::Division | Operateur::Multiplication => binaire(2),
            Operateur::Addition | Operateur::Soustraction => binaire(1),
        }
    }

    pub const fn precedence(self) -> u8 {
        self.proprietes().precedence
    }

    pub const fn est_unaire(self) -> bool {
        self.proprietes().unaire
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Puissance => "^",
            Operateur::Division => "/",
            Operateur::Multiplication => "*",
            Operateur::Addition => "+",
            Operateur::Soustraction => "-",
            // notation "démarche" (RPN lisible)
            Operateur::Positif => "pos",
            Operateur::Negatif => "neg",
        }
    }

    /// Doit-on sortir `self` (sommet de pile) avant d’empiler `entrant` ?
    pub fn sort_avant(self, entrant: Operateur) -> bool {
        let p_top = self.precedence();
        let p_in = entrant.precedence();
        match entrant.proprietes().associativite {
            Associativite::Gauche => p_top >= p_in,
            Associativite::Droite => p_top > p_in,
        }
    }
}

/// Applique un opérateur binaire.
///
/// - '/' par zéro (0 ou -0) => `DivisionParZero`
/// - résultat infini ou NaN => `ResultatNonFini`
pub fn appliquer<T: Float>(op: Operateur, gauche: T, droite: T) -> Result<T, ErreurEval> {
    let r = match op {
        Operateur::Puissance => gauche.powf(droite),
        Operateur::Division => {
            if droite.is_zero() {
                return Err(ErreurEval::DivisionParZero);
            }
            gauche / droite
        }
        Operateur::Multiplication => gauche * droite,
        Operateur::Addition => gauche + droite,
        Operateur::Soustraction => gauche - droite,
        // un unaire ici = RPN mal formée
        Operateur::Positif | Operateur::Negatif => return Err(ErreurEval::operande_vide()),
    };

    if !r.is_finite() {
        return Err(ErreurEval::ResultatNonFini);
    }
    Ok(r)
}

/// Applique un signe (opérateur unaire).
pub fn appliquer_signe<T: Float>(op: Operateur, x: T) -> Result<T, ErreurEval> {
    match op {
        Operateur::Positif => Ok(x),
        Operateur::Negatif => Ok(-x),
        // un binaire ici = RPN mal formée
        _ => Err(ErreurEval::operande_vide()),
    }
}
