//! Noyau — évaluation (pipeline réel)
//!
//! normaliser (devise) -> valider -> découper -> RPN -> éval pile
//!
//! Chaque appel est indépendant: aucun état partagé, aucune E/S, aucun
//! blocage. Court-circuit à la première erreur, pas de rattrapage partiel.

use super::devise::Devise;
use super::erreur::ErreurEval;
use super::jetons::{decouper, Jeton};
use super::rpn::en_rpn;
use super::valide::valider;

/// Issue d'une évaluation complète.
#[derive(Clone, Debug, PartialEq)]
pub enum Sortie {
    /// Entrée vide après trim: l'appelant affiche l'invite neutre,
    /// ce n'est PAS une erreur.
    Vide,
    /// Résultat calculé, toujours fini. Le formatage (séparateurs,
    /// arrondi d'affichage) revient à l'appelant.
    Valeur(f64),
    /// Échec typé; l'appelant n'en montre qu'un message générique unique.
    Erreur(ErreurEval),
}

/// API publique: évalue une expression texte dans un mode devise donné.
///
/// Le mode est une valeur fournie à CHAQUE appel, jamais un état global:
/// en BRL la virgule décimale est normalisée en point AVANT validation
/// (choix documenté: la normalisation vit dans le pipeline, pas chez
/// l'appelant).
pub fn evaluer_expression(texte: &str, devise: Devise) -> Sortie {
    if texte.trim().is_empty() {
        return Sortie::Vide;
    }

    let normalise = devise.normaliser_entree(texte);

    let nette = match valider(&normalise) {
        Ok(e) => e,
        Err(err) => return Sortie::Erreur(err),
    };

    let jetons = match decouper(&nette) {
        Ok(j) => j,
        Err(err) => return Sortie::Erreur(err),
    };

    let rpn = en_rpn(&jetons);

    match eval_rpn(&rpn) {
        Ok(v) => Sortie::Valeur(v),
        Err(err) => Sortie::Erreur(err),
    }
}

/// Évalue une suite RPN avec une pile de valeurs transitoire.
///
/// Un opérateur dépile `b` puis `a` (donc `a` empilé en premier) et
/// empile `a OP b`. En fin de parcours la pile doit contenir exactement
/// une valeur finie.
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in rpn.iter().copied() {
        match jeton {
            Jeton::Num(v) => pile.push(v),

            Jeton::Plus | Jeton::Minus | Jeton::Star | Jeton::Slash => {
                let b = pile.pop().ok_or(ErreurEval::PileInsuffisante)?;
                let a = pile.pop().ok_or(ErreurEval::PileInsuffisante)?;

                let v = match jeton {
                    Jeton::Plus => a + b,
                    Jeton::Minus => a - b,
                    Jeton::Star => a * b,
                    Jeton::Slash => {
                        if b == 0.0 {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a / b
                    }
                    _ => unreachable!(),
                };

                pile.push(v);
            }

            // la conversion RPN ne laisse jamais passer de parenthèses
            Jeton::LPar | Jeton::RPar => return Err(ErreurEval::ResultatMalforme),
        }
    }

    match pile.as_slice() {
        [seul] if seul.is_finite() => Ok(*seul),
        _ => Err(ErreurEval::ResultatMalforme),
    }
}
