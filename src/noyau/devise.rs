// src/noyau/devise.rs
//
// Mode devise (USD / BRL) — valeur fournie par l'appelant à chaque appel,
// jamais un état global du processus. Porte la normalisation d'entrée
// (virgule décimale) et les conventions d'affichage associées.

use std::borrow::Cow;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Devise {
    Usd,
    #[default]
    Brl,
}

impl Devise {
    /// Normalise l'entrée AVANT validation: en BRL la virgule est le
    /// séparateur décimal, convertie en point. En USD l'entrée passe
    /// telle quelle (une virgule y sera supprimée par la validation,
    /// hors alphabet).
    pub fn normaliser_entree(self, texte: &str) -> Cow<'_, str> {
        match self {
            Devise::Brl if texte.contains(',') => Cow::Owned(texte.replace(',', ".")),
            _ => Cow::Borrowed(texte),
        }
    }

    /// Séparateur décimal à l'affichage.
    pub fn separateur_decimal(self) -> char {
        match self {
            Devise::Usd => '.',
            Devise::Brl => ',',
        }
    }

    /// Séparateur de milliers à l'affichage.
    pub fn separateur_milliers(self) -> char {
        match self {
            Devise::Usd => ',',
            Devise::Brl => '.',
        }
    }

    /// Texte d'invite du champ de saisie, selon le mode.
    pub fn invite_saisie(self) -> &'static str {
        match self {
            Devise::Usd => "Ex: 3.14 + 2.5",
            Devise::Brl => "Ex: 3,14 + 2,5",
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            Devise::Usd => "USD",
            Devise::Brl => "BRL",
        }
    }
}
