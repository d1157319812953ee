//! Noyau BEDMAS (flottants)
//!
//! Organisation interne :
//! - normalise.rs : espaces, parité des parenthèses, '*' implicites
//! - jetons.rs    : tokenisation + lecture des opérandes
//! - operateur.rs : table précédence/associativité + exécuteur arithmétique
//! - rpn.rs       : shunting-yard (parenthèses, signes, opérandes vides)
//! - eval.rs      : pipeline complet + pile de valeurs
//! - erreur.rs    : causes d’échec

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod normalise;
pub mod operateur;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{calculer_chaine, eval_expression, evaluate, DemarcheNoyau};

/// Profondeur d’imbrication par défaut.
pub const PROFONDEUR_MAX_DEFAUT: usize = 256;

/// Réglages du noyau (aucun fichier, aucune variable d’environnement).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Garde-fou : nombre maximal de '(' ouvertes en même temps.
    pub profondeur_max: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            profondeur_max: PROFONDEUR_MAX_DEFAUT,
        }
    }
}
