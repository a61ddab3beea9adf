//! Block types and coordinate helpers

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Material of a single unit cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    Grass,
    Dirt,
    Stone,
    /// Floating decoration; destroyed like everything else
    Fragile,
}

impl BlockType {
    pub const ALL: [BlockType; 4] = [
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Fragile,
    ];

    /// Display color, also used to tint destruction debris
    pub fn color(self) -> [u8; 3] {
        match self {
            BlockType::Grass => [0x4c, 0xaf, 0x50],
            BlockType::Dirt => [0x79, 0x55, 0x48],
            BlockType::Stone => [0x75, 0x75, 0x75],
            BlockType::Fragile => [0xff, 0x98, 0x00],
        }
    }

    /// Single character used by text snapshots
    pub fn glyph(self) -> char {
        match self {
            BlockType::Grass => '"',
            BlockType::Dirt => '#',
            BlockType::Stone => '=',
            BlockType::Fragile => '%',
        }
    }
}

/// Cell containing a world-space point. Cell `b` spans `[b, b + 1)` on each axis.
///
/// # Panics
/// On non-finite input: a NaN or infinite coordinate is a bug upstream.
pub fn cell_at(point: Vec3) -> IVec3 {
    assert!(
        point.is_finite(),
        "cell_at called with non-finite point {point:?}"
    );
    point.floor().as_ivec3()
}

/// Center of a cell in world space
pub fn cell_center(cell: IVec3) -> Vec3 {
    cell.as_vec3() + Vec3::splat(0.5)
}
