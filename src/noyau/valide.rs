// src/noyau/valide.rs
//
// Validation d'entrée (avant tokenisation).
//
// Choix appliqué partout: les caractères hors alphabet sont SUPPRIMÉS,
// pas rejetés (espaces compris). Les refus structurels arrivent ensuite,
// dans l'ordre: parenthèses, opérateur final, absence d'opérande.

use super::erreur::ErreurEval;

/// Expression nettoyée et pré-validée.
///
/// Invariants: ne contient que `0-9 . + - * / ( )`, au moins un chiffre,
/// autant de '(' que de ')', pas d'opérateur en dernière position.
#[derive(Clone, Debug)]
pub struct ExpressionNette(String);

impl ExpressionNette {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

/// Nettoie puis valide une expression brute. Fonction pure.
pub fn valider(brut: &str) -> Result<ExpressionNette, ErreurEval> {
    let nette: String = brut.chars().filter(|c| est_autorise(*c)).collect();

    let ouvrantes = nette.chars().filter(|&c| c == '(').count();
    let fermantes = nette.chars().filter(|&c| c == ')').count();
    if ouvrantes != fermantes {
        return Err(ErreurEval::ParenthesesDesequilibrees);
    }

    if nette.ends_with(['+', '-', '*', '/']) {
        return Err(ErreurEval::OperateurFinal);
    }

    if !nette.chars().any(|c| c.is_ascii_digit()) {
        return Err(ErreurEval::AucunOperande);
    }

    Ok(ExpressionNette(nette))
}
