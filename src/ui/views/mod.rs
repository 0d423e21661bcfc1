pub mod dashboard;
pub mod game;
pub mod language;
pub mod level_menu;
pub mod results;
