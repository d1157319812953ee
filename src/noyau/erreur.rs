// src/noyau/erreur.rs
//
// Erreurs du noyau.
// L’ancien contrat ("chaîne vide = échec") est conservé par `calculer_chaine`,
// mais en interne chaque échec garde sa cause.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Comptes de '(' et ')' différents, ou parenthèse sans partenaire.
    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    /// Opérande vide (ex: "4//2", "4+", "()") ou non numérique (ex: "abc", "1.2.3").
    #[error("opérande invalide: '{0}'")]
    OperandeInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// Pas de symbole d’opération et pas un nombre non plus.
    #[error("aucun opérateur résoluble dans '{0}'")]
    AucunOperateur(String),

    /// Imbrication de parenthèses au-delà de `Options::profondeur_max`.
    #[error("imbrication trop profonde (max {0})")]
    ProfondeurExcessive(usize),

    /// Débordement ou NaN (ex: 10^400, (-8)^0.5).
    #[error("résultat non fini")]
    ResultatNonFini,
}

impl ErreurEval {
    /// Opérande vide : même erreur que ci-dessus, avec un texte lisible.
    pub fn operande_vide() -> Self {
        ErreurEval::OperandeInvalide(String::new())
    }
}
