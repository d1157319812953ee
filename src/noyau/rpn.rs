// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), sans récursion
// - Valider la forme au passage (opérandes vides, parenthèses orphelines)
//
// Règles:
// - '+'/'-' quand on ATTEND une valeur (début, après opérateur, après '(') => signe unaire
// - '^', '*', '/' quand on attend une valeur => opérande vide (ex: "4//2", "+-/*")
// - ')' quand on attend une valeur => groupe vide ou incomplet (ex: "()", "(4+)")
// - profondeur de '(' bornée par Options::profondeur_max

use std::fmt;

use super::erreur::ErreurEval;
use super::jetons::Tok;
use super::operateur::Operateur;
use super::Options;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rpn {
    Nombre(f64),
    Op(Operateur),
}

impl fmt::Display for Rpn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rpn::Nombre(x) => write!(f, "{x}"),
            Rpn::Op(op) => f.write_str(op.symbole()),
        }
    }
}

/// Élément de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Ouvrante,
    Op(Operateur),
}

fn binaire(tok: &Tok) -> Option<Operateur> {
    match tok {
        Tok::Plus => Some(Operateur::Addition),
        Tok::Minus => Some(Operateur::Soustraction),
        Tok::Star => Some(Operateur::Multiplication),
        Tok::Slash => Some(Operateur::Division),
        Tok::Caret => Some(Operateur::Puissance),
        _ => None,
    }
}

fn symbole(tok: &Tok) -> String {
    super::jetons::format_tokens(std::slice::from_ref(tok))
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(2), Caret, LPar, Num(1), Plus, Num(1), RPar]
///   rpn:    [2, neg, 1, 1, +, ^]
pub fn vers_rpn(tokens: &[Tok], options: &Options) -> Result<Vec<Rpn>, ErreurEval> {
    let mut out: Vec<Rpn> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();

    // true tant qu’on attend un opérande (début, après opérateur, après '(')
    let mut attend_valeur = true;
    let mut profondeur: usize = 0;

    for tok in tokens {
        match tok {
            Tok::Num(x) => {
                if !attend_valeur {
                    // deux valeurs sans opérateur entre elles (ex: "4 5")
                    return Err(ErreurEval::AucunOperateur(format!("{x}")));
                }
                out.push(Rpn::Nombre(*x));
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(ErreurEval::AucunOperateur("(".into()));
                }
                profondeur += 1;
                if profondeur > options.profondeur_max {
                    return Err(ErreurEval::ProfondeurExcessive(options.profondeur_max));
                }
                ops.push(Pile::Ouvrante);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(ErreurEval::operande_vide());
                }
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Pile::Ouvrante) => break,
                        Some(Pile::Op(op)) => out.push(Rpn::Op(op)),
                        None => return Err(ErreurEval::ParenthesesDesequilibrees),
                    }
                }
                profondeur = profondeur.saturating_sub(1);
            }

            Tok::Plus | Tok::Minus if attend_valeur => {
                // signe : rien à dépiler (opérateur préfixe)
                let signe = if matches!(tok, Tok::Minus) {
                    Operateur::Negatif
                } else {
                    Operateur::Positif
                };
                ops.push(Pile::Op(signe));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                if attend_valeur {
                    return Err(ErreurEval::OperandeInvalide(symbole(tok)));
                }
                let Some(op) = binaire(tok) else {
                    return Err(ErreurEval::OperandeInvalide(symbole(tok)));
                };

                while let Some(Pile::Op(top)) = ops.last() {
                    if top.sort_avant(op) {
                        out.push(Rpn::Op(*top));
                        ops.pop();
                    } else {
                        break;
                    }
                }

                ops.push(Pile::Op(op));
                attend_valeur = true;
            }
        }
    }

    // opérateur final sans opérande droite (ex: "4+"), ou entrée vide
    if attend_valeur {
        return Err(ErreurEval::operande_vide());
    }

    // vide la pile ops
    while let Some(p) = ops.pop() {
        match p {
            Pile::Ouvrante => return Err(ErreurEval::ParenthesesDesequilibrees),
            Pile::Op(op) => out.push(Rpn::Op(op)),
        }
    }

    Ok(out)
}

/// Format utilitaire (“démarche”) : RPN en texte.
pub fn format_rpn(rpn: &[Rpn]) -> String {
    rpn.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
