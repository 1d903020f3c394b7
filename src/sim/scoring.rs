//! Pass detection
//!
//! Flags slots the player has cleared. This module never touches the score
//! counter: it reports passes and the session applies one point per event.

use super::obstacles::ObstacleSlot;
use crate::config::ScoreLine;

/// Horizontal line the player must cross to pass `slot`
#[inline]
pub fn threshold_x(slot: &ObstacleSlot, line: ScoreLine) -> f32 {
    slot.x() + line.offset(slot.top.size.x)
}

/// Mark newly passed slots and return their indices in slot order.
///
/// A slot is eligible only while `passed == false`, so each pass cycle yields
/// at most one index; respawning re-arms it.
pub fn detect_passes(player_x: f32, slots: &mut [ObstacleSlot], line: ScoreLine) -> Vec<usize> {
    let mut passes = Vec::new();
    for (idx, slot) in slots.iter_mut().enumerate() {
        if !slot.passed && player_x > threshold_x(slot, line) {
            slot.passed = true;
            passes.push(idx);
        }
    }
    passes
}
