//! Vine growth: climb a column, clinging to whatever sturdy faces appear.

use verdant_registry::blocks::properties::Plane;
use verdant_utils::BlockPos;
use verdant_utils::random::{Random, RandomSource};
use verdant_utils::types::UpdateFlags;

use crate::behavior::blocks::VineBlock;
use crate::world::LevelWriter;
use crate::worldgen::feature::Feature;

/// Vines never grow at or above this height.
const MAX_GROWTH_Y: i32 = 128;

/// Grows vines up a vertical column.
///
/// The scan climbs one block at a time, attaching a vine to the first
/// sturdy side it finds at each height. A blocked cell does not end the
/// growth: the scan wanders to a nearby column at the same height and tries
/// again, which models organic spread around an obstruction. Wandering is
/// the only branch that consumes randomness, and it never advances the
/// height, so the climb's progress comes solely from air cells.
#[derive(Default)]
pub struct VineFeature;

impl Feature for VineFeature {
    fn place(
        &self,
        level: &mut dyn LevelWriter,
        random: &mut RandomSource,
        origin: BlockPos,
    ) -> bool {
        let mut pos = origin;

        while pos.0.y < MAX_GROWTH_Y {
            if level.is_air(&pos) {
                for direction in Plane::Horizontal.facings().iter().copied() {
                    if VineBlock::can_attach(&*level, &pos, direction) {
                        // First attachable side wins; the rest are not
                        // considered at this height.
                        level.set_block(
                            pos,
                            VineBlock::attachment_state(direction),
                            UpdateFlags::UPDATE_CLIENTS,
                        );
                        break;
                    }
                }
                pos = pos.up();
            } else {
                // Blocked: wander sideways and retry the same height. The
                // draw order (x pair, then z pair) is part of the seed
                // contract.
                let dx = random.next_i32_bounded(4) - random.next_i32_bounded(4);
                let dz = random.next_i32_bounded(4) - random.next_i32_bounded(4);
                pos = pos.offset(dx, 0, dz);
            }
        }

        true
    }
}
