use egui::{RichText, TextEdit};

use crate::search::{IngredientSearch, InputState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    Input(String),
    Submit,
    Add(String),
    Remove(String),
}

#[derive(Default)]
pub struct IngredientPanel {
    refocus: bool,
}

impl IngredientPanel {
    pub fn new() -> Self {
        Self::default()
    }

    // Cleared without focusing once the field is locked.
    fn take_refocus(&mut self, active: bool) -> bool {
        std::mem::take(&mut self.refocus) && active
    }

    pub fn show(&mut self, ui: &mut egui::Ui, search: &IngredientSearch) -> Vec<PanelAction> {
        let mut actions = Vec::new();

        ui.horizontal_wrapped(|ui| {
            for ingredient in search.selection().iter() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(ingredient);
                        if ui
                            .small_button("x")
                            .on_hover_text(format!("Remove {ingredient}"))
                            .clicked()
                        {
                            actions.push(PanelAction::Remove(ingredient.to_owned()));
                        }
                    });
                });
            }
        });

        ui.add_space(8.0);

        let active = search.input_state() == InputState::Active;
        ui.horizontal(|ui| {
            let mut buffer = search.pending().to_owned();
            let response = ui.add_enabled(
                active,
                TextEdit::singleline(&mut buffer)
                    .hint_text(search.placeholder())
                    .desired_width(ui.available_width() - 60.0),
            );

            if self.take_refocus(active) {
                response.request_focus();
            }

            if response.changed() {
                actions.push(PanelAction::Input(buffer));
            }

            if response.lost_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Enter))
                && !search.pending().is_empty()
            {
                actions.push(PanelAction::Submit);
                self.refocus = true;
            }

            if ui
                .add_enabled(search.can_add(), egui::Button::new("Add"))
                .clicked()
            {
                actions.push(PanelAction::Submit);
            }
        });

        if !search.suggestions().is_empty() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(240.0)
                    .show(ui, |ui| {
                        for suggestion in search.suggestions() {
                            if ui.selectable_label(false, *suggestion).clicked() {
                                actions.push(PanelAction::Add((*suggestion).to_owned()));
                            }
                        }
                    });
            });
        }

        if active {
            ui.add_space(10.0);
            ui.label(RichText::new("Popular ingredients:").small().weak());
            ui.horizontal_wrapped(|ui| {
                for tag in search.popular_tags() {
                    if ui.button(format!("+ {tag}")).clicked() {
                        actions.push(PanelAction::Add(tag.to_owned()));
                    }
                }
            });
        }

        actions
    }
}
