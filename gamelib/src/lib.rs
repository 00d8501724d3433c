pub mod game_info;
pub mod library;
