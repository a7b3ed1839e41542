//! Noyau d'évaluation — pur, synchrone, sans E/S
//!
//! Organisation interne :
//! - erreur.rs  : taxonomie typée des échecs
//! - valide.rs  : nettoyage + validation structurelle
//! - jetons.rs  : tokenisation
//! - rpn.rs     : shunting-yard (infixe -> postfixe)
//! - eval.rs    : évaluation pile + pipeline complet
//! - devise.rs  : mode devise (valeur d'appel, pas d'état global)
//! - format.rs  : affichage des résultats (frontière)

pub mod devise;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod valide;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use devise::Devise;
pub use erreur::ErreurEval;
pub use eval::{evaluer_expression, Sortie};
pub use format::formater_valeur;
