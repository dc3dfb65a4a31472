pub mod fetch;
pub mod player;
