//! Calculatrice BEDMAS — évaluateur d’expressions arithmétiques sur chaînes.
//!
//! ```text
//! evaluate("3 - 2 ^ 3 * 8 / 2 + 7") == Ok("-22")
//! evaluate("4 ) 5 + (3")            == Err(ParenthesesDesequilibrees)
//! ```

pub mod noyau;

pub use noyau::{calculer_chaine, eval_expression, evaluate, DemarcheNoyau, ErreurEval, Options};
