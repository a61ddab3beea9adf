//! Sparse voxel storage

use ahash::AHashMap;
use glam::IVec3;

use super::block::BlockType;

/// Sparse map from cell coordinate to block type.
///
/// Most of space is empty, so only occupied cells are stored. Lookups are
/// O(1) amortized.
#[derive(Debug, Default, Clone)]
pub struct VoxelGrid {
    blocks: AHashMap<IVec3, BlockType>,
}

impl VoxelGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block if the cell is free. Returns false (and leaves the
    /// existing block untouched) when the cell is already occupied.
    pub fn put(&mut self, pos: IVec3, block: BlockType) -> bool {
        use std::collections::hash_map::Entry;
        match self.blocks.entry(pos) {
            Entry::Vacant(e) => {
                e.insert(block);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn has(&self, pos: IVec3) -> bool {
        self.blocks.contains_key(&pos)
    }

    pub fn get(&self, pos: IVec3) -> Option<BlockType> {
        self.blocks.get(&pos).copied()
    }

    /// Remove a block. `None` means nothing was there, which is not an error.
    pub fn remove(&mut self, pos: IVec3) -> Option<BlockType> {
        self.blocks.remove(&pos)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All blocks, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, BlockType)> + '_ {
        self.blocks.iter().map(|(pos, block)| (*pos, *block))
    }

    /// Drop every block whose x coordinate falls in `[min_x, max_x)`.
    /// Returns how many were removed.
    pub(crate) fn remove_columns(&mut self, min_x: i32, max_x: i32) -> usize {
        let before = self.blocks.len();
        self.blocks.retain(|pos, _| pos.x < min_x || pos.x >= max_x);
        before - self.blocks.len()
    }
}
