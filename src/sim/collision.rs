//! Collision detection between the player and static geometry
//!
//! Axis-aligned overlap only; there is no collision response. The first hit
//! ends the run, so all we report is what the player ran into.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::obstacles::ObstacleSlot;

/// Which part of an obstacle pair was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipePart {
    Top,
    Bottom,
}

/// What the player collided with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollidedWith {
    /// A floor or ceiling body
    Boundary { body_id: u32 },
    /// One pipe of an obstacle slot
    Obstacle {
        slot: usize,
        part: PipePart,
        body_id: u32,
    },
}

/// First body in `others` overlapping `player`, if any
pub fn first_overlap<'a>(player: &Body, others: impl IntoIterator<Item = &'a Body>) -> Option<u32> {
    let bounds = player.bounds();
    others
        .into_iter()
        .find(|other| other.id != player.id && bounds.overlaps(&other.bounds()))
        .map(|other| other.id)
}

/// Check the player against boundaries, then slots in order.
///
/// Several simultaneous overlaps still produce a single result.
pub fn detect(
    player: &Body,
    boundaries: &[Body],
    slots: &[ObstacleSlot],
) -> Option<CollidedWith> {
    if let Some(body_id) = first_overlap(player, boundaries) {
        return Some(CollidedWith::Boundary { body_id });
    }

    let bounds = player.bounds();
    for (slot_idx, slot) in slots.iter().enumerate() {
        for (part, pipe) in [(PipePart::Top, &slot.top), (PipePart::Bottom, &slot.bottom)] {
            if bounds.overlaps(&pipe.bounds()) {
                return Some(CollidedWith::Obstacle {
                    slot: slot_idx,
                    part,
                    body_id: pipe.id,
                });
            }
        }
    }

    None
}
