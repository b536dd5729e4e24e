//! Shared primitives for the Verdant workspace: integer vector math, the
//! axis model, newtype wrappers over raw ids and positions, and the
//! deterministic random sources consumed by world generation.

pub mod math;
pub mod random;
pub mod types;

pub use types::{BlockPos, BlockStateId, Identifier};
