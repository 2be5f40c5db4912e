pub mod api;
pub mod player;
