use bevy::prelude::*;

pub const CONFIG_FILE_NAME: &str = "waterplacer.ron";

pub const PLACEMENT_SOUND_PATHS: [&str; 3] = [
    "sounds/liquid_exit_0.ogg",
    "sounds/liquid_exit_1.ogg",
    "sounds/liquid_exit_2.ogg",
];

pub const HIGHLIGHT_COLOR: Color = Color::srgb(0.3, 0.7, 1.0);
pub const HUD_FONT_SIZE: f32 = 16.0;
