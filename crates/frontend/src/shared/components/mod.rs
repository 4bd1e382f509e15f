pub mod card_animated;
pub mod stat_card;
pub mod stat_tile;
pub mod ui;
