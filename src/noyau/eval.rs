//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> tokenize -> RPN -> pile de valeurs -> texte
//!
//! Aucune récursion : la profondeur d’imbrication est bornée par `Options`,
//! et chaque réduction (gauche OP droite => valeur) se fait sur une pile explicite.

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, lire_nombre, tokenize};
use super::normalise::{contient_symbole, normaliser};
use super::operateur::{appliquer, appliquer_signe};
use super::rpn::{format_rpn, vers_rpn, Rpn};
use super::Options;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
    pub note: String,
}

/// API publique : évalue une expression BEDMAS.
///
/// Retourne le résultat formaté (`"28"`, `"3.24"`, `"-22"`), ou la cause de l’échec.
pub fn evaluate(expression: &str) -> Result<String, ErreurEval> {
    eval_expression(expression, &Options::default()).map(|(texte, _d)| texte)
}

/// Convention historique : résultat, ou chaîne vide si le calcul échoue.
pub fn calculer_chaine(expression: &str) -> String {
    evaluate(expression).unwrap_or_default()
}

/// API complète : résultat formaté + démarche (normalisée, jetons, RPN).
pub fn eval_expression(
    expr_str: &str,
    options: &Options,
) -> Result<(String, DemarcheNoyau), ErreurEval> {
    let resultat = pipeline(expr_str, options);
    if let Err(e) = &resultat {
        log::debug!("échec pour {expr_str:?}: {e}");
    }
    resultat
}

fn pipeline(expr_str: &str, options: &Options) -> Result<(String, DemarcheNoyau), ErreurEval> {
    // 1) Normalisation (espaces, parité des parenthèses, '*' implicites)
    let normalisee = normaliser(expr_str)?;
    log::debug!("normalisée: {normalisee:?}");

    // 2) Cas terminal : pas de symbole => un nombre, ou rien de résoluble
    if !contient_symbole(&normalisee) {
        // forme numérique mais illisible (ex: littéral trop grand) => opérande invalide
        let forme_numerique = !normalisee.is_empty()
            && normalisee.chars().all(|c| c.is_ascii_digit() || c == '.');
        let valeur = lire_nombre(&normalisee).map_err(|e| {
            if forme_numerique {
                e
            } else {
                ErreurEval::AucunOperateur(normalisee.clone())
            }
        })?;
        let d = DemarcheNoyau {
            jetons: normalisee.clone(),
            rpn: normalisee.clone(),
            normalisee,
            note: "Nombre seul : aucune réduction.".into(),
        };
        return Ok((formater(valeur), d));
    }

    // 3) Jetons
    let jetons = tokenize(&normalisee)?;
    let jetons_txt = format_tokens(&jetons);
    log::debug!("jetons: {jetons_txt}");

    // 4) RPN
    let rpn = vers_rpn(&jetons, options)?;
    let rpn_txt = format_rpn(&rpn);
    log::debug!("rpn: {rpn_txt}");

    // 5) Réductions
    let valeur = evaluer_rpn(&rpn)?;

    let d = DemarcheNoyau {
        normalisee,
        jetons: jetons_txt,
        rpn: rpn_txt,
        note: "Pipeline: normalisation → jetons → RPN → réductions (pile).".into(),
    };

    Ok((formater(valeur), d))
}

/// Évalue une RPN avec une pile de valeurs.
pub fn evaluer_rpn(rpn: &[Rpn]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for elem in rpn {
        match *elem {
            Rpn::Nombre(x) => st.push(x),

            Rpn::Op(op) if op.est_unaire() => {
                let x = st.pop().ok_or_else(ErreurEval::operande_vide)?;
                st.push(appliquer_signe(op, x)?);
            }

            Rpn::Op(op) => {
                let b = st.pop().ok_or_else(ErreurEval::operande_vide)?;
                let a = st.pop().ok_or_else(ErreurEval::operande_vide)?;
                let r = appliquer(op, a, b)?;
                log::trace!("réduction: {a} {} {b} => {r}", op.symbole());
                st.push(r);
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) if v.is_finite() => Ok(v),
        (Some(_), true) => Err(ErreurEval::ResultatNonFini),
        (Some(v), false) => Err(ErreurEval::AucunOperateur(format!("{v}"))),
        (None, _) => Err(ErreurEval::operande_vide()),
    }
}

/// Formatage natif des flottants ("28", "3.24", "3.3333333333333335").
/// "-0" est affiché "0".
pub fn formater(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
