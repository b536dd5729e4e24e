//! World generation: decoration passes over already-materialized blocks.

pub mod feature;
