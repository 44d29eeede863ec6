pub mod address_bar;
pub mod ingredient_panel;

pub use address_bar::{AddressAction, AddressBarState};
pub use ingredient_panel::{IngredientPanel, PanelAction};
