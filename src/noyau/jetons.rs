// src/noyau/jetons.rs

use super::erreur::ErreurEval;
use super::valide::ExpressionNette;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Découpe une expression nettoyée en jetons.
///
/// Nombres: découpage greedy "un ou plusieurs chiffres, point optionnel,
/// chiffres optionnels". Un '.' qui ne démarre aucun nombre (ex: le
/// deuxième point de "1.2.3") est ignoré, volontairement: "1.2.3" donne
/// [1.2, 3] et c'est la pile finale de l'évaluateur qui refusera.
/// Aucun jeton n'est modifié après création; l'ordre suit l'entrée.
pub fn decouper(expr: &ExpressionNette) -> Result<Vec<Jeton>, ErreurEval> {
    let chars: Vec<char> = expr.as_str().chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        match c {
            '(' => {
                out.push(Jeton::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Jeton::RPar);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        if c.is_ascii_digit() {
            let debut = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let texte: String = chars[debut..i].iter().collect();
            // inatteignable pour cette grammaire; garde-fou plutôt que panique
            let v: f64 = texte.parse().map_err(|_| ErreurEval::ResultatMalforme)?;
            out.push(Jeton::Num(v));
            continue;
        }

        // '.' orphelin: ignoré (cf. doc ci-dessus)
        debug_assert_eq!(c, '.');
        i += 1;
    }

    Ok(out)
}
