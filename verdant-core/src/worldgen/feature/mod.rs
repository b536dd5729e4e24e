//! Decoration features placed into an existing block grid.

pub mod vines;

use enum_dispatch::enum_dispatch;
use verdant_utils::BlockPos;
use verdant_utils::random::RandomSource;

use crate::world::LevelWriter;
use crate::worldgen::feature::vines::VineFeature;

/// A placeable world decoration.
#[enum_dispatch]
pub trait Feature {
    /// Attempts to place the feature starting at `origin`.
    ///
    /// Placement is best-effort: implementations report success even when
    /// nothing ends up written. The random source is consumed in a fixed
    /// call order so a seed reproduces the same outcome.
    fn place(
        &self,
        level: &mut dyn LevelWriter,
        random: &mut RandomSource,
        origin: BlockPos,
    ) -> bool;
}

/// The available decoration features.
#[allow(missing_docs)]
#[enum_dispatch(Feature)]
pub enum FeatureType {
    Vines(VineFeature),
}
