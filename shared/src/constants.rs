use bevy::prelude::*;

pub const MOD_NAME: &str = "WaterPlacer";
pub const MOD_VERSION: &str = "0.2.0";

/// Identifier of the liquid template placed by the tool.
pub const WATER_TEMPLATE_IDENTIFIER: &str = "lt__base_water";

/// Amount written into every cell touched by the tool.
pub const FULL_LIQUID_AMOUNT: u8 = u8::MAX;

pub const DEFAULT_FREE_PLACE_DISTANCE: f32 = 6.5;
pub const DEFAULT_TERRAIN_REACH: f32 = 64.0;
pub const DEFAULT_QUEUED_EVENTS_PER_FRAME: usize = 32;

pub const HALF_BLOCK: Vec3 = Vec3 {
    x: 0.5,
    y: 0.5,
    z: 0.5,
};
