//! Block behaviors: per-block rules layered over the static registry data.

pub mod blocks;
