// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Évaluation "en direct" à chaque frappe (comme un écouteur input),
//   Enter ré-évalue quand le champ a le focus
// - Bascule USD/BRL: recalcule l'expression courante avec le nouveau mode
// - Erreurs: UN message générique, la taxonomie part dans les logs

use eframe::egui;

use crate::noyau::{evaluer_expression, formater_valeur, Devise, Sortie};

use super::etat::AppCalc;

/// Expressions d'exemple (boutons de remplissage rapide).
const EXEMPLES: [&str; 3] = ["2+3*4", "(10+5)/3", "7*8-12"];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice Devise");
        ui.add_space(6.0);

        self.ui_devise(ui);

        ui.add_space(8.0);

        self.ui_entree(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_resultat(ui);

        ui.add_space(8.0);

        self.ui_exemples(ui);
    }

    fn ui_devise(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Mode :");
            for mode in [Devise::Usd, Devise::Brl] {
                let actif = self.devise == mode;
                if ui.selectable_label(actif, mode.libelle()).clicked() && !actif {
                    self.basculer_devise(mode);
                    // comme la bascule d'origine: on recalcule tout de suite
                    self.eval_via_noyau();
                }
            }
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        let invite = self.devise.invite_saisie();

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text(invite)
                .id_source("entree_edit"),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // évaluation en direct à chaque modification du champ
        if resp.changed() {
            self.eval_via_noyau();
        }

        // Enter ré-évalue (seulement si le champ est focus)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; AC = tout
            if ui
                .add_sized([56.0, 30.0], egui::Button::new("C"))
                .on_hover_text("Efface seulement l'entrée")
                .clicked()
            {
                self.clear_entree();
                self.eval_via_noyau(); // entrée vide => invite neutre
            }
            if ui
                .add_sized([56.0, 30.0], egui::Button::new("AC"))
                .on_hover_text("Remise à zéro totale")
                .clicked()
            {
                self.reset_total();
            }
        });
    }

    fn ui_resultat(&self, ui: &mut egui::Ui) {
        if self.erreur {
            ui.colored_label(ui.visuals().error_fg_color, "Expression invalide");
        } else if self.resultat.is_empty() {
            ui.weak("Prêt à calculer…");
        } else {
            ui.heading(format!("= {}", self.resultat));
        }
    }

    fn ui_exemples(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            ui.label("Exemples :");
            for exemple in EXEMPLES {
                if ui.small_button(exemple).clicked() {
                    self.entree = exemple.to_string();
                    self.eval_via_noyau();
                    self.focus_entree = true;
                }
            }
        });
    }

    /// Évalue l'entrée via le noyau et dépose l'issue dans l'état UI.
    pub(crate) fn eval_via_noyau(&mut self) {
        match evaluer_expression(&self.entree, self.devise) {
            Sortie::Vide => self.set_vide(),
            Sortie::Valeur(v) => self.set_valeur(formater_valeur(v, self.devise)),
            Sortie::Erreur(err) => {
                // taxonomie interne: loggée, jamais affichée telle quelle
                log::debug!("évaluation refusée ({err}) pour {:?}", self.entree);
                self.set_erreur();
            }
        }
    }
}
