//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état de la calculatrice (entrée, résultat formaté,
//! mode devise) et offrir des opérations simples (C/AC, dépôt de
//! résultat) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - La sauvegarde ne transporte que l'entrée + le mode + l'horodatage;
//!   le résultat se recalcule à la restauration.

use crate::noyau::Devise;

/// Âge maximal d'une sauvegarde restaurable: 24 h.
const SAUVEGARDE_MAX_AGE_S: u64 = 24 * 60 * 60;

/// Photographie persistée entre deux sessions.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Sauvegarde {
    pub entree: String,
    pub devise: Devise,
    /// Secondes depuis l'époque Unix au moment de la sauvegarde.
    pub horodatage_s: u64,
}

impl Sauvegarde {
    /// Restaurable seulement si elle a moins de 24 h.
    pub fn est_fraiche(&self, maintenant_s: u64) -> bool {
        maintenant_s.saturating_sub(self.horodatage_s) < SAUVEGARDE_MAX_AGE_S
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // résultat formaté, vide si rien à montrer
    pub erreur: bool,     // true => afficher le message générique

    // --- paramètres ---
    pub devise: Devise,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: false,
            devise: Devise::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions "boutons" (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultat + mode par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultat();
        self.devise = Devise::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Retour à l'invite neutre ("Prêt à calculer…").
    pub fn clear_resultat(&mut self) {
        self.resultat.clear();
        self.erreur = false;
    }

    /* ------------------------ Dépôt des issues du noyau ------------------------ */

    /// Dépose un résultat déjà formaté.
    pub fn set_valeur(&mut self, formate: String) {
        self.resultat = formate;
        self.erreur = false;
    }

    /// Entrée vide: invite neutre, ce n'est pas une erreur.
    pub fn set_vide(&mut self) {
        self.clear_resultat();
    }

    /// Échec d'évaluation: un seul message générique côté UI,
    /// quelle que soit la variante interne.
    pub fn set_erreur(&mut self) {
        self.resultat.clear();
        self.erreur = true;
    }

    /// Bascule de mode (le noyau reçoit le mode en valeur d'appel).
    pub fn basculer_devise(&mut self, mode: Devise) {
        self.devise = mode;
        self.focus_entree = true;
    }

    /* ------------------------ Persistance ------------------------ */

    pub fn vers_sauvegarde(&self, maintenant_s: u64) -> Sauvegarde {
        Sauvegarde {
            entree: self.entree.clone(),
            devise: self.devise,
            horodatage_s: maintenant_s,
        }
    }

    /// Restaure entrée + mode (fraîcheur déjà vérifiée par l'appelant).
    pub fn restaurer(&mut self, s: Sauvegarde) {
        self.entree = s.entree;
        self.devise = s.devise;
        self.focus_entree = true;
    }
}
