pub mod deck;
pub mod ui_helpers;
