// src/noyau/format.rs
//
// Affichage des résultats (frontière UI, jamais réinjecté dans le calcul)
//
// Conventions:
// - arrondi d'affichage à 6 décimales, zéros de fin supprimés
// - groupement des milliers sur la partie entière
// - séparateurs selon le mode devise ("," / "." en USD, inversés en BRL)

use super::devise::Devise;

/// Arrondi d'affichage: 6 décimales.
const DECIMALES_AFFICHEES: usize = 6;

/// Formate une valeur calculée pour l'affichage, selon le mode devise.
///
/// N'est appelée que sur une `Sortie::Valeur`, donc `v` est fini.
pub fn formater_valeur(v: f64, devise: Devise) -> String {
    let facteur = 10f64.powi(DECIMALES_AFFICHEES as i32);
    let arrondi = (v * facteur).round() / facteur;
    // évite "-0"
    let arrondi = if arrondi == 0.0 { 0.0 } else { arrondi };

    // {:.6} garantit un point, donc les zéros entiers sont protégés du trim
    let brut = format!("{:.*}", DECIMALES_AFFICHEES, arrondi);
    let brut = brut.trim_end_matches('0').trim_end_matches('.');

    let (signe, corps) = match brut.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", brut),
    };

    let (entiere, decimale) = match corps.split_once('.') {
        Some((e, d)) => (e, Some(d)),
        None => (corps, None),
    };

    let mut out = String::with_capacity(brut.len() + entiere.len() / 3 + 1);
    out.push_str(signe);
    out.push_str(&grouper_milliers(entiere, devise.separateur_milliers()));
    if let Some(d) = decimale {
        out.push(devise.separateur_decimal());
        out.push_str(d);
    }
    out
}

/// Insère un séparateur tous les trois chiffres.
/// `chiffres` ne contient que des chiffres ASCII (signe déjà retiré).
fn grouper_milliers(chiffres: &str, separateur: char) -> String {
    let n = chiffres.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(separateur);
        }
        out.push(c);
    }
    out
}
