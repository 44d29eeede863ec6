use crate::location::{History, Navigator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressAction {
    Back,
    Forward,
    Navigate(String),
    CopyLink,
}

#[derive(Default)]
pub struct AddressBarState {
    text: String,
    editing: bool,
}

impl AddressBarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, history: &History) -> Vec<AddressAction> {
        let mut actions = Vec::new();

        if !self.editing {
            self.text = history.location().to_string();
        }

        ui.horizontal(|ui| {
            if ui
                .add_enabled(history.can_go_back(), egui::Button::new("Back"))
                .clicked()
            {
                actions.push(AddressAction::Back);
            }
            if ui
                .add_enabled(history.can_go_forward(), egui::Button::new("Forward"))
                .clicked()
            {
                actions.push(AddressAction::Forward);
            }

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.text)
                    .desired_width(ui.available_width() - 90.0),
            );
            self.editing = response.has_focus();

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                actions.push(AddressAction::Navigate(self.text.clone()));
            }

            if ui.button("Copy link").clicked() {
                actions.push(AddressAction::CopyLink);
            }
        });

        actions
    }
}
