// src/app.rs
//
// Calculatrice Devise — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB), persistance comprise
//
// Important:
// - La gestion Enter est faite dans vue.rs (au bon endroit: quand le champ
//   a le focus).
// - La sauvegarde passe par eframe::Storage; eframe espace lui-même les
//   écritures, pas besoin de debounce maison.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Sauvegarde;

impl AppCalc {
    /// Construit l'app en restaurant la sauvegarde si elle a moins de 24 h,
    /// puis recalcule l'expression restaurée.
    pub fn nouveau(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();

        if let Some(storage) = cc.storage {
            if let Some(s) = eframe::get_value::<Sauvegarde>(storage, eframe::APP_KEY) {
                if s.est_fraiche(maintenant_s()) {
                    app.restaurer(s);
                    app.eval_via_noyau();
                } else {
                    log::debug!("sauvegarde périmée (plus de 24 h), ignorée");
                }
            }
        }

        app
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = effacer seulement l'entrée (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree(); // méthode publique de etat.rs
            self.eval_via_noyau(); // entrée vide => invite neutre
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.vers_sauvegarde(maintenant_s()));
    }
}

/// Secondes Unix courantes (natif: horloge système; web: Date.now()).
#[cfg(not(target_arch = "wasm32"))]
fn maintenant_s() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn maintenant_s() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}
