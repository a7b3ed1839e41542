// src/noyau/rpn.rs
//
// Shunting-yard: infixe -> RPN (notation polonaise inversée)
//
// Règles:
// - table de précédence fixe: + - au niveau 1, * / au niveau 2
// - associativité gauche: égalité de précédence => dépile
// - les parenthèses ne survivent jamais à la conversion
// - PAS de moins unaire: un '-' de tête est un opérateur binaire ordinaire;
//   la pile de l'évaluateur sous-alimentera, c'est un échec propre.

use super::jetons::Jeton;

fn precedence(j: &Jeton) -> i32 {
    match j {
        Jeton::Plus | Jeton::Minus => 1,
        Jeton::Star | Jeton::Slash => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN.
///
/// Infaillible par construction: la validation a déjà équilibré les
/// parenthèses. Un déséquilibre résiduel (ex: ")(" en comptes égaux) ne
/// doit quand même pas paniquer: dépiler une pile vide est un no-op et
/// une '(' restante en fin de course est jetée sans sortir.
pub fn en_rpn(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().copied() {
        match jeton {
            Jeton::Num(_) => out.push(jeton),

            Jeton::LPar => ops.push(jeton),

            Jeton::RPar => {
                // dépile jusqu'à '(' ; les deux parenthèses sont jetées
                while let Some(haut) = ops.pop() {
                    if matches!(haut, Jeton::LPar) {
                        break;
                    }
                    out.push(haut);
                }
            }

            Jeton::Plus | Jeton::Minus | Jeton::Star | Jeton::Slash => {
                while let Some(haut) = ops.last() {
                    if matches!(haut, Jeton::LPar) {
                        break;
                    }
                    if precedence(haut) >= precedence(&jeton) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }
                ops.push(jeton);
            }
        }
    }

    // vide la pile ops; une '(' résiduelle est jetée
    while let Some(op) = ops.pop() {
        if !matches!(op, Jeton::LPar) {
            out.push(op);
        }
    }

    out
}
