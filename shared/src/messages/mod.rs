use bevy::math::IVec3;
use bevy_ecs::event::Event;
use serde::{Deserialize, Serialize};

use crate::constants::FULL_LIQUID_AMOUNT;
use crate::liquids::LiquidIndex;

/// Lockstep simulation command emitted by the tool.
///
/// The host applies these through its own ordering mechanism; nothing here
/// waits for or observes their effect.
#[derive(Event, Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum LiquidEvent {
    SetCell {
        cell: IVec3,
        liquid: LiquidIndex,
        amount: u8,
    },
    FloodFill {
        cell: IVec3,
        liquid: LiquidIndex,
        amount: u8,
    },
}

impl LiquidEvent {
    pub fn set_cell(cell: IVec3, liquid: LiquidIndex) -> Self {
        LiquidEvent::SetCell {
            cell,
            liquid,
            amount: FULL_LIQUID_AMOUNT,
        }
    }

    pub fn flood_fill(cell: IVec3, liquid: LiquidIndex) -> Self {
        LiquidEvent::FloodFill {
            cell,
            liquid,
            amount: FULL_LIQUID_AMOUNT,
        }
    }

    pub fn cell(&self) -> IVec3 {
        match self {
            LiquidEvent::SetCell { cell, .. } | LiquidEvent::FloodFill { cell, .. } => *cell,
        }
    }

    pub fn liquid(&self) -> LiquidIndex {
        match self {
            LiquidEvent::SetCell { liquid, .. } | LiquidEvent::FloodFill { liquid, .. } => {
                *liquid
            }
        }
    }
}
