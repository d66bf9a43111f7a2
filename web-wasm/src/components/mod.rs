pub mod auth_gate;
pub mod filter_navbar;
pub mod header;
pub mod list_view;
pub mod loading;
pub mod recipe_card;
pub mod redirect;
pub mod sort_navbar;
