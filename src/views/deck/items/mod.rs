pub mod card;
pub mod less_button;
pub mod pack_overlay;
pub mod swipe;
