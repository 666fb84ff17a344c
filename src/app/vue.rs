// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : pavé 5 colonnes, focus redonné après clic (focus_entree)
// - Bascule DEG / RAD au-dessus du pavé
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::ModeAngle;

/// Pavé, ligne par ligne (libellés passés tels quels à `AppCalc::appuyer`).
const PAVE: [[&str; 5]; 7] = [
    ["(", ")", "mod", "ANS", "C"],
    ["sin", "cos", "tan", "log", "ln"],
    ["√", "x²", "x^y", "1/x", "%"],
    ["7", "8", "9", "÷", "π"],
    ["4", "5", "6", "×", "e"],
    ["1", "2", "3", "-", "±"],
    ["0", ".", "DEL", "+", "="],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(6.0);
                self.ui_mode(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.affichage)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2(3+4), sin(90), 50%, 7 mod 3")
                .id_source("affichage_edit")
                .font(egui::TextStyle::Heading)
                .horizontal_align(egui::Align::RIGHT),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.evaluer();
        }
    }

    fn ui_mode(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for m in [ModeAngle::Degres, ModeAngle::Radians] {
                if ui
                    .selectable_label(self.mode == m, m.libelle())
                    .clicked()
                    && self.mode != m
                {
                    self.basculer_mode();
                }
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calc")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        let resp = ui.add_sized([56.0, 40.0], egui::Button::new(touche));
                        if resp.clicked() {
                            self.appuyer(touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
