//! Read and write access to a block grid.
//!
//! Generation runs against a level with exclusive (or externally
//! synchronized) access for the duration of a pass, so none of this locks.

use rustc_hash::FxHashMap;
use verdant_registry::blocks::block_state_ext::BlockStateExt;
use verdant_registry::blocks::vanilla;
use verdant_utils::types::UpdateFlags;
use verdant_utils::{BlockPos, BlockStateId};

use crate::config::LevelConfig;

/// Read access to a block grid.
pub trait BlockGetter {
    /// The state at `pos`. Out-of-bounds positions read as air.
    fn get_block_state(&self, pos: &BlockPos) -> BlockStateId;

    /// Whether `pos` lies inside the grid's vertical bounds.
    fn is_in_valid_bounds(&self, pos: &BlockPos) -> bool;

    /// Whether the cell at `pos` is empty space.
    fn is_air(&self, pos: &BlockPos) -> bool {
        self.get_block_state(pos).is_air()
    }
}

/// Write access to a block grid.
pub trait LevelWriter: BlockGetter {
    /// Writes `state` at `pos`, with `flags` controlling how the change
    /// propagates. Returns false when the write is rejected (out of bounds).
    fn set_block(&mut self, pos: BlockPos, state: BlockStateId, flags: UpdateFlags) -> bool;
}

/// An in-memory level that stores only its non-air cells.
pub struct SparseLevel {
    blocks: FxHashMap<BlockPos, BlockStateId>,
    min_y: i32,
    max_y: i32,
}

impl SparseLevel {
    /// Creates an empty level spanning `height` blocks upward from `min_y`.
    #[must_use]
    pub fn new(min_y: i32, height: u32) -> Self {
        Self {
            blocks: FxHashMap::default(),
            min_y,
            max_y: min_y + height as i32,
        }
    }

    /// Creates an empty level with the configured bounds.
    #[must_use]
    pub fn with_config(config: &LevelConfig) -> Self {
        Self::new(config.min_y, config.height)
    }

    /// Number of non-air cells.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Iterates the non-air cells in no particular order.
    pub fn iter_blocks(&self) -> impl Iterator<Item = (&BlockPos, &BlockStateId)> {
        self.blocks.iter()
    }
}

impl BlockGetter for SparseLevel {
    fn get_block_state(&self, pos: &BlockPos) -> BlockStateId {
        self.blocks
            .get(pos)
            .copied()
            .unwrap_or_else(|| vanilla::AIR.default_state())
    }

    fn is_in_valid_bounds(&self, pos: &BlockPos) -> bool {
        (self.min_y..self.max_y).contains(&pos.0.y)
    }
}

impl LevelWriter for SparseLevel {
    fn set_block(&mut self, pos: BlockPos, state: BlockStateId, flags: UpdateFlags) -> bool {
        if !self.is_in_valid_bounds(&pos) {
            return false;
        }

        log::trace!("set {pos} to state {} ({flags:?})", state.0);
        if state.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, state);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_level_reads_air() {
        let level = SparseLevel::new(0, 256);
        assert!(level.is_air(&BlockPos::new(0, 0, 0)));
        assert!(level.is_air(&BlockPos::new(1000, 255, -1000)));
        assert_eq!(level.block_count(), 0);
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let mut level = SparseLevel::new(0, 256);
        let pos = BlockPos::new(3, 10, -4);
        let stone = vanilla::STONE.default_state();

        assert!(level.set_block(pos, stone, UpdateFlags::UPDATE_ALL));
        assert_eq!(level.get_block_state(&pos), stone);
        assert!(!level.is_air(&pos));
        assert_eq!(level.block_count(), 1);

        // Writing air clears the cell.
        assert!(level.set_block(pos, vanilla::AIR.default_state(), UpdateFlags::UPDATE_ALL));
        assert!(level.is_air(&pos));
        assert_eq!(level.block_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_writes_are_rejected() {
        let mut level = SparseLevel::new(0, 128);
        let stone = vanilla::STONE.default_state();

        assert!(!level.set_block(BlockPos::new(0, -1, 0), stone, UpdateFlags::UPDATE_ALL));
        assert!(!level.set_block(BlockPos::new(0, 128, 0), stone, UpdateFlags::UPDATE_ALL));
        assert!(level.set_block(BlockPos::new(0, 127, 0), stone, UpdateFlags::UPDATE_ALL));
        assert_eq!(level.block_count(), 1);
    }

    #[test]
    fn test_bounds_follow_config() {
        let config = LevelConfig {
            seed: 0,
            min_y: -64,
            height: 384,
        };
        let level = SparseLevel::with_config(&config);
        assert!(level.is_in_valid_bounds(&BlockPos::new(0, -64, 0)));
        assert!(level.is_in_valid_bounds(&BlockPos::new(0, 319, 0)));
        assert!(!level.is_in_valid_bounds(&BlockPos::new(0, -65, 0)));
        assert!(!level.is_in_valid_bounds(&BlockPos::new(0, 320, 0)));
    }
}
