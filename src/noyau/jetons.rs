// src/noyau/jetons.rs

use super::erreur::ErreurEval;
use super::normalise::est_symbole;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

/// Tokenize une chaîne (normalisée ou non) en jetons.
/// Supporte:
/// - nombres décimaux : 12, 3.24, 5. (= 5.0), .5 (= 0.5)
/// - opérateurs + - * / ^
/// - parenthèses ( )
///
/// Un opérande est la plus longue suite de caractères hors symboles.
/// Il doit être fait de chiffres avec au plus un point : "abc", "1e5",
/// "inf" ou "1.2.3" donnent `OperandeInvalide`.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let symbole = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            _ => None,
        };
        if let Some(t) = symbole {
            out.push(t);
            i += 1;
            continue;
        }

        // Opérande : tout jusqu’au prochain symbole (ou espace)
        let start = i;
        while i < chars.len() && !est_symbole(chars[i]) && !chars[i].is_whitespace() {
            i += 1;
        }
        let texte: String = chars[start..i].iter().collect();
        out.push(Tok::Num(lire_nombre(&texte)?));
    }

    Ok(out)
}

/// Lit un opérande décimal non signé et fini.
/// Un littéral trop grand pour f64 (ex: 400 chiffres) est refusé.
pub fn lire_nombre(texte: &str) -> Result<f64, ErreurEval> {
    let chiffres = texte.chars().filter(char::is_ascii_digit).count();
    let points = texte.chars().filter(|&c| c == '.').count();

    let forme_ok = chiffres > 0 && points <= 1 && chiffres + points == texte.chars().count();
    if !forme_ok {
        return Err(ErreurEval::OperandeInvalide(texte.to_string()));
    }

    match texte.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ErreurEval::OperandeInvalide(texte.to_string())),
    }
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(x) => format!("{x}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
