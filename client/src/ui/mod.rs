pub mod hud;
pub mod radial_menu;
