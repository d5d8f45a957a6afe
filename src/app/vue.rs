// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Évaluation “vive” : chaque frappe relance le calcul (si activé)
// - Clavier : Enter évalue (utile quand le mode vif est coupé)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)

use eframe::egui;

use calculatrice_vive::noyau::TypeNumerique;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice vive");
                ui.add_space(6.0);

                self.ui_reglages(ui);

                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Type :");
            let mut choisi = self.type_numerique;
            for t in TypeNumerique::TOUS {
                ui.selectable_value(&mut choisi, t, t.libelle());
            }
            if choisi != self.type_numerique {
                self.set_type(choisi);
                self.focus_entree = true;
            }

            ui.separator();

            if ui
                .checkbox(&mut self.evaluation_vive, "Évaluer en tapant")
                .changed()
                && self.evaluation_vive
            {
                self.entree_modifiee();
                self.focus_entree = true;
            }
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+3*4, -(1,5+2)^2, 7%2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        if resp.changed() {
            self.entree_modifiee();
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.evaluer();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 30.0], egui::Button::new("="));
            if eq.clicked() {
                self.evaluer();
                self.focus_entree = true;
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_vif")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [
                    ["7", "8", "9", "/", "("],
                    ["4", "5", "6", "*", ")"],
                    ["1", "2", "3", "-", "^"],
                    ["0", ",", "%", "+", " "],
                ] {
                    for touche in ligne {
                        if touche.trim().is_empty() {
                            ui.label("");
                        } else {
                            self.bouton_insert(ui, touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Résultat ({}) :", self.type_numerique));
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().weak_text_color(), &self.erreur);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Préformatée", "demarche_pre", &self.demarche.preformat);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Unaires", "demarche_unaires", &self.demarche.unaires);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => {
                    self.clear_entree();
                    self.entree_modifiee();
                }
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                    self.entree_modifiee();
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, touche: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(touche));
        if resp.clicked() {
            self.entree.push_str(touche);
            self.entree_modifiee();
            self.focus_entree = true;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
