use eframe::egui;

use crate::clipboard::copy_to_clipboard;
use crate::location::{History, Location, Navigator};
use crate::search::IngredientSearch;
use crate::ui::{AddressAction, AddressBarState, IngredientPanel, PanelAction};

pub struct PantryApp {
    history: History,
    search: IngredientSearch,

    address_bar: AddressBarState,
    panel: IngredientPanel,
}

impl PantryApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, start: Location) -> Self {
        let history = History::new(start);
        let mut search = IngredientSearch::new();
        search.sync_from_location(&history);

        Self {
            history,
            search,
            address_bar: AddressBarState::new(),
            panel: IngredientPanel::new(),
        }
    }

    fn handle_address(&mut self, action: AddressAction) {
        match action {
            AddressAction::Back => {
                self.history.back();
            }
            AddressAction::Forward => {
                self.history.forward();
            }
            AddressAction::Navigate(text) => match Location::parse(&text) {
                Ok(location) => self.history.push(location),
                Err(e) => log::warn!("Ignoring address: {}", e),
            },
            AddressAction::CopyLink => {
                let link = self.history.location().to_string();
                if let Err(e) = copy_to_clipboard(&link) {
                    log::error!("Failed to copy link to clipboard: {}", e);
                } else {
                    log::info!("Link copied to clipboard");
                }
            }
        }
    }

    fn handle_panel(&mut self, action: PanelAction) {
        match action {
            PanelAction::Input(value) => self.search.set_input(&value),
            PanelAction::Submit => {
                self.search.submit(&mut self.history);
            }
            PanelAction::Add(ingredient) => {
                self.search.add(&ingredient, &mut self.history);
            }
            PanelAction::Remove(ingredient) => {
                self.search.remove(&ingredient, &mut self.history);
            }
        }
    }
}

impl eframe::App for PantryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let address_actions = egui::TopBottomPanel::top("address_bar")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let actions = self.address_bar.show(ui, &self.history);
                ui.add_space(4.0);
                actions
            })
            .inner;
        for action in address_actions {
            self.handle_address(action);
        }

        self.search.sync_from_location(&self.history);

        let panel_actions = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.heading("What's in your kitchen?");
                ui.add_space(10.0);
                self.panel.show(ui, &self.search)
            })
            .inner;
        for action in panel_actions {
            self.handle_panel(action);
        }
    }
}
