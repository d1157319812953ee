//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - générateurs bornés (profondeur, longueur)
//! - nombre de cas fixé
//! - invariants : jamais de panique, résultat déterministe, parité des parenthèses,
//!   division par zéro refusée, accord avec une évaluation de référence sur l’arbre généré
//! - littéraux longs (300 à 400 chiffres) : autour de la limite f64

use proptest::prelude::*;

use super::erreur::ErreurEval;
use super::normalise::normaliser;
use super::{evaluate, Options};

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Arbre généré + sa valeur de référence (None si division par zéro / non fini).
#[derive(Clone, Debug)]
enum Arbre {
    Nombre(u32),
    // longue suite de chiffres, proche (ou au-delà) de la limite f64
    Litteral(String),
    Neg(Box<Arbre>),
    Bin(Box<Arbre>, char, Box<Arbre>),
}

impl Arbre {
    /// Écriture entièrement parenthésée : l’ordre d’évaluation est imposé.
    fn texte(&self) -> String {
        match self {
            Arbre::Nombre(n) => n.to_string(),
            Arbre::Litteral(t) => t.clone(),
            Arbre::Neg(x) => format!("-({})", x.texte()),
            Arbre::Bin(a, op, b) => format!("({}){op}({})", a.texte(), b.texte()),
        }
    }

    fn valeur(&self) -> Option<f64> {
        let v = match self {
            Arbre::Nombre(n) => f64::from(*n),
            Arbre::Litteral(t) => t.parse::<f64>().ok()?,
            Arbre::Neg(x) => -x.valeur()?,
            Arbre::Bin(a, op, b) => {
                let (a, b) = (a.valeur()?, b.valeur()?);
                match op {
                    '+' => a + b,
                    '-' => a - b,
                    '*' => a * b,
                    '/' if b == 0.0 => return None,
                    '/' => a / b,
                    '^' => a.powf(b),
                    _ => return None,
                }
            }
        };
        v.is_finite().then_some(v)
    }
}

fn arbre() -> impl Strategy<Value = Arbre> {
    let feuille = prop_oneof![
        8 => (0u32..50).prop_map(Arbre::Nombre),
        1 => "[1-9][0-9]{299,399}".prop_map(Arbre::Litteral),
    ];
    feuille.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|x| Arbre::Neg(Box::new(x))),
            (inner.clone(), prop::sample::select(vec!['+', '-', '*', '/', '^']), inner)
                .prop_map(|(a, op, b)| Arbre::Bin(Box::new(a), op, Box::new(b))),
        ]
    })
}

/// Bruit : n’importe quelle suite de symboles du domaine (+ quelques intrus).
fn bruit() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            '0', '1', '2', '9', '.', '+', '-', '*', '/', '^', '(', ')', ' ', 'x',
        ]),
        0..40,
    )
    .prop_map(|v| v.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn fuzz_aucune_panique_et_deterministe(s in bruit()) {
        let a = evaluate(&s);
        let b = evaluate(&s);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn fuzz_parite_des_parentheses(s in bruit()) {
        let ouvrantes = s.chars().filter(|&c| c == '(').count();
        let fermantes = s.chars().filter(|&c| c == ')').count();
        if ouvrantes != fermantes {
            prop_assert_eq!(evaluate(&s), Err(ErreurEval::ParenthesesDesequilibrees));
        }
    }

    #[test]
    fn fuzz_normalisation_idempotente(s in bruit()) {
        if let Ok(une) = normaliser(&s) {
            prop_assert_eq!(normaliser(&une), Ok(une));
        }
    }

    #[test]
    fn fuzz_division_par_zero(a in 0u32..100_000, frac in 0u32..100) {
        let expr = format!("{a}.{frac}/0");
        prop_assert_eq!(evaluate(&expr), Err(ErreurEval::DivisionParZero));
    }

    #[test]
    fn fuzz_accord_reference(t in arbre()) {
        let texte = t.texte();
        match t.valeur() {
            Some(attendu) => {
                let v: f64 = evaluate(&texte)
                    .map_err(|e| TestCaseError::fail(format!("{texte:?}: {e}")))?
                    .parse()
                    .map_err(|e| TestCaseError::fail(format!("{texte:?}: {e}")))?;
                prop_assert!(
                    v == attendu || (v - attendu).abs() <= 1e-9 * attendu.abs().max(1.0),
                    "texte={:?} v={} attendu={}", texte, v, attendu
                );
            }
            None => prop_assert!(evaluate(&texte).is_err(), "texte={:?}", texte),
        }
    }

    #[test]
    fn fuzz_resultat_relisible(t in arbre()) {
        // un résultat est lui-même une expression valide, de même valeur
        if let Ok(r) = evaluate(&t.texte()) {
            prop_assert_eq!(evaluate(&r), Ok(r.clone()));
        }
    }

    #[test]
    fn fuzz_litteraux_longs(
        t in "[0-9]{300,400}",
        signe in prop::sample::select(vec!["", "-", "+"]),
    ) {
        let expr = format!("{signe}({t})");
        match t.parse::<f64>() {
            Ok(v) if v.is_finite() => {
                let r = evaluate(&expr)
                    .map_err(|e| TestCaseError::fail(format!("{expr:?}: {e}")))?;
                prop_assert_eq!(evaluate(&r), Ok(r.clone()));
            }
            _ => prop_assert_eq!(
                evaluate(&expr),
                Err(ErreurEval::OperandeInvalide(t.clone()))
            ),
        }
    }

    #[test]
    fn fuzz_profondeur_configurable(n in 1usize..40, max in 1usize..40) {
        let expr = format!("{}7{}", "(".repeat(n), ")".repeat(n));
        let r = super::eval_expression(&expr, &Options { profondeur_max: max });
        if n <= max {
            prop_assert_eq!(r.map(|(t, _)| t), Ok("7".to_string()));
        } else {
            prop_assert_eq!(r, Err(ErreurEval::ProfondeurExcessive(max)));
        }
    }
}
