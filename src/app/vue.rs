// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, Escape efface l’entrée (voir app.rs)
// - Pavé décrit par une table (PAVE) : une touche = un texte + un effet

use eframe::egui;
use log::debug;

use calculatrice_rpn::noyau::format::{format_arrondi, format_resultat};

use super::etat::{AppCalc, DECIMALES_MAX};

const TAILLE_TOUCHE: [f32; 2] = [52.0, 30.0];

/// Effet d’une touche du pavé.
#[derive(Clone, Copy, Debug)]
enum Touche {
    /// Chiffre, point ou ')' : collé à ce qui précède.
    Colle(&'static str),
    /// Opérateur : entouré d’espaces.
    Operateur(&'static str),
    /// '(' : espacée d’un nombre ou d’une ')' qui précède.
    Ouvrante,
    Effacer,
    Egal,
    Vide,
}

use Touche::*;

const PAVE: [[Touche; 4]; 5] = [
    [Ouvrante, Colle(")"), Effacer, Operateur("/")],
    [Colle("7"), Colle("8"), Colle("9"), Operateur("*")],
    [Colle("4"), Colle("5"), Colle("6"), Operateur("-")],
    [Colle("1"), Colle("2"), Colle("3"), Operateur("+")],
    [Colle("0"), Colle("."), Vide, Egal],
];

impl Touche {
    fn libelle(self) -> &'static str {
        match self {
            Colle(s) | Operateur(s) => s,
            Ouvrante => "(",
            Effacer => "DEL",
            Egal => "=",
            Vide => "",
        }
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_saisie(ui);
                ui.add_space(4.0);
                self.ui_commandes(ui);
                ui.add_space(8.0);
                self.ui_pave(ui);
                self.ui_erreur(ui);

                ui.separator();
                self.ui_resultats(ui);

                ui.separator();
                self.ui_demarche(ui);
            });
    }

    fn ui_saisie(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 3 + (4 * 2 - (3 * 4 - 2) / 2) - 7 / 2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter fait perdre le focus à un champ une ligne : on teste les deux.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter && (resp.has_focus() || resp.lost_focus()) {
            self.evaluer();
        }
    }

    fn ui_commandes(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // C = entrée seulement ; CLR = résultats seulement ; AC = tout
            if commande(ui, "C", "Efface seulement l’entrée") {
                self.clear_entree();
            }
            if commande(ui, "CLR", "Efface résultat + erreur + démarche") {
                self.clear_resultats();
            }
            if commande(ui, "AC", "Remise à zéro totale") {
                self.reset_total();
            }

            ui.separator();

            let mut d = self.decimales as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DECIMALES_MAX as u32)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_decimales(d as usize);
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for touche in rangee {
                        self.ui_touche(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_touche(&mut self, ui: &mut egui::Ui, touche: Touche) {
        if matches!(touche, Vide) {
            ui.label("");
            return;
        }
        if !ui
            .add_sized(TAILLE_TOUCHE, egui::Button::new(touche.libelle()))
            .clicked()
        {
            return;
        }

        match touche {
            Colle(s) => self.entree.push_str(s),
            Operateur(s) => self.insere_operateur(s),
            Ouvrante => self.insere_ouvrante(),
            Effacer => self.efface_dernier(),
            Egal => self.evaluer(),
            Vide => {}
        }
        self.focus_entree = true;
    }

    fn ui_erreur(&self, ui: &mut egui::Ui) {
        if self.erreur.is_empty() {
            return;
        }
        ui.add_space(6.0);
        ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        if let Some(marqueur) = self.marqueur_erreur() {
            ui.monospace(marqueur);
        }
    }

    fn ui_resultats(&self, ui: &mut egui::Ui) {
        let arrondi = self
            .valeur
            .map(|v| format_arrondi(v, self.decimales))
            .unwrap_or_default();

        egui::Grid::new("resultats_rpn")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                ui.label("Résultat");
                ui.monospace(self.resultat.as_str());
                ui.end_row();

                ui.label(format!("Arrondi ({})", self.decimales));
                ui.monospace(arrondi);
                ui.end_row();
            });
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("demarche_rpn")
                    .num_columns(2)
                    .show(ui, |ui| {
                        ui.label("Jetons");
                        ui.monospace(self.demarche.jetons.as_str());
                        ui.end_row();

                        ui.label("RPN");
                        ui.monospace(self.demarche.rpn.as_str());
                        ui.end_row();
                    });
            });
    }

    /* ------------------------ Édition de l’entrée ------------------------ */

    fn insere_operateur(&mut self, op: &str) {
        let garde = self.entree.trim_end().len();
        self.entree.truncate(garde);
        if !self.entree.is_empty() && !self.entree.ends_with('(') {
            self.entree.push(' ');
        }
        self.entree.push_str(op);
        self.entree.push(' ');
    }

    fn insere_ouvrante(&mut self) {
        let precedent = self.entree.chars().rev().find(|c| !c.is_whitespace());
        if matches!(precedent, Some(c) if c.is_ascii_digit() || c == ')') {
            self.entree.push(' ');
        }
        self.entree.push('(');
    }

    /// DEL : retire le dernier symbole (les espaces autour ne comptent pas).
    fn efface_dernier(&mut self) {
        let garde = self.entree.trim_end().len();
        self.entree.truncate(garde);
        self.entree.pop();
        let garde = self.entree.trim_end().len();
        self.entree.truncate(garde);
    }

    /// Évalue l’expression via le noyau, puis dépose résultat/erreur/démarche dans l’état UI.
    fn evaluer(&mut self) {
        self.focus_entree = true;

        if self.entree.trim().is_empty() {
            self.set_erreur("Entrée vide", None);
            return;
        }

        // Entrée NON rognée : les positions d’erreur restent alignées sur le champ.
        match calculatrice_rpn::calculate_with_steps(&self.entree) {
            Ok((v, demarche)) => self.set_resultat(v, format_resultat(v), demarche),
            Err(e) => {
                debug!("évaluation refusée: {e}");
                self.set_erreur(e.to_string(), e.position());
            }
        }
    }
}

/// Bouton de commande ; vrai si cliqué.
fn commande(ui: &mut egui::Ui, label: &str, tip: &str) -> bool {
    ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label))
        .on_hover_text(tip)
        .clicked()
}
