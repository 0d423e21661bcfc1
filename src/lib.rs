pub mod app;
pub mod data;
pub mod model;
pub mod platform;
pub mod site;
pub mod ui;
pub mod uploads;
pub mod view_models;

pub use app::SpellCraftApp;
pub use site::SiteApp;
