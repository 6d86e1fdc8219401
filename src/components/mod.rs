//! UI Components
//!
//! Reusable Leptos components.

mod title_bar;
mod search_bar;
mod category_sidebar;
mod plant_grid;
mod details_modal;
mod cart_modal;
mod spinner;

pub use title_bar::TitleBar;
pub use search_bar::SearchBar;
pub use category_sidebar::CategorySidebar;
pub use plant_grid::PlantGrid;
pub use details_modal::DetailsModal;
pub use cart_modal::CartModal;
pub use spinner::Spinner;
