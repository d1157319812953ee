// src/noyau/normalise.rs
//
// Normalisation de l’entrée brute (avant tokenisation) :
// - retire tous les espaces
// - vérifie que le nombre de '(' égale le nombre de ')'
//   (l’imbrication elle-même est vérifiée plus tard, dans rpn.rs : ")(" passe ici)
// - insère les multiplications implicites autour des parenthèses :
//     3(4)   -> 3*(4)
//     (4)3   -> (4)*3
//     (2)(3) -> (2)*(3)

use super::erreur::ErreurEval;

/// Symboles d’opération BEDMAS (parenthèses comprises).
pub fn est_symbole(c: char) -> bool {
    matches!(c, '(' | ')' | '^' | '/' | '*' | '+' | '-')
}

/// Vrai si la chaîne contient au moins un symbole (opérateur ou parenthèse).
pub fn contient_symbole(s: &str) -> bool {
    s.chars().any(est_symbole)
}

/// Normalise une expression brute.
///
/// Pure : la même entrée donne toujours la même sortie, et
/// `normaliser(normaliser(x)) == normaliser(x)`.
pub fn normaliser(brut: &str) -> Result<String, ErreurEval> {
    let compacte: String = brut.chars().filter(|c| !c.is_whitespace()).collect();

    let ouvrantes = compacte.chars().filter(|&c| c == '(').count();
    let fermantes = compacte.chars().filter(|&c| c == ')').count();
    if ouvrantes != fermantes {
        log::debug!("normaliser: {ouvrantes} '(' pour {fermantes} ')' dans {compacte:?}");
        return Err(ErreurEval::ParenthesesDesequilibrees);
    }

    Ok(inserer_multiplications(&compacte))
}

fn inserer_multiplications(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '(' => {
                // Valeur juste avant => '*'.
                // Cas ")(" : le '*' est déjà posé par la branche ')'.
                if let Some(&avant) = i.checked_sub(1).and_then(|j| chars.get(j)) {
                    if !est_symbole(avant) {
                        out.push('*');
                    }
                }
                out.push(c);
            }
            ')' => {
                out.push(c);
                if let Some(&apres) = chars.get(i + 1) {
                    if apres == '(' || !est_symbole(apres) {
                        out.push('*');
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}
