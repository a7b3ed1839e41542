// src/noyau/erreur.rs

use thiserror::Error;

/// Taxonomie interne des échecs d'évaluation.
///
/// L'UI affiche UN SEUL message générique ("Expression invalide") pour
/// toutes les variantes; la distinction sert aux tests et aux logs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurEval {
    /// Le nombre de '(' diffère du nombre de ')'.
    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    /// L'expression nettoyée se termine par + - * ou /.
    #[error("opérateur en fin d'expression")]
    OperateurFinal,

    /// Aucun chiffre dans l'expression nettoyée.
    #[error("aucun opérande")]
    AucunOperande,

    /// Un opérateur a trouvé moins de deux valeurs sur la pile
    /// (couvre notamment le '-' de tête, jamais unaire ici).
    #[error("pile insuffisante (opérateur sans opérandes)")]
    PileInsuffisante,

    #[error("division par zéro")]
    DivisionParZero,

    /// Pile finale non réduite à une valeur, ou valeur non finie
    /// (débordement vers ±inf, NaN).
    #[error("résultat malformé (pile non réduite ou valeur non finie)")]
    ResultatMalforme,
}
