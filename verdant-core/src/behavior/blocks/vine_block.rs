//! Vine block behavior.
//!
//! A vine cell carries one boolean flag per horizontal side; a flag is set
//! when the vine clings to the neighbor on that side.

use verdant_registry::blocks::block_state_ext::BlockStateExt;
use verdant_registry::blocks::properties::{BlockStateProperties, Direction};
use verdant_registry::blocks::vanilla;
use verdant_utils::{BlockPos, BlockStateId};

use crate::world::BlockGetter;

/// Attachment rules for the vine decoration.
pub struct VineBlock;

impl VineBlock {
    /// Whether a vine at `pos` can cling on side `direction`: the neighbor
    /// one step that way must present a sturdy face back toward `pos`.
    /// Vines only cling sideways, so vertical directions never attach.
    #[must_use]
    pub fn can_attach(level: &dyn BlockGetter, pos: &BlockPos, direction: Direction) -> bool {
        if !direction.is_horizontal() {
            return false;
        }
        let support = level.get_block_state(&direction.relative(*pos));
        support.is_face_sturdy(direction.opposite())
    }

    /// The vine state clinging on exactly `direction`: that side's flag set,
    /// the other three clear.
    #[must_use]
    pub fn attachment_state(direction: Direction) -> BlockStateId {
        vanilla::VINE
            .default_state()
            .set_value(&BlockStateProperties::NORTH, direction == Direction::North)
            .set_value(&BlockStateProperties::EAST, direction == Direction::East)
            .set_value(&BlockStateProperties::SOUTH, direction == Direction::South)
            .set_value(&BlockStateProperties::WEST, direction == Direction::West)
    }
}
