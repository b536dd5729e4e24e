//! Core engine pieces: world access, block behaviors, and the decoration
//! features built on the registry's direction model.

pub mod behavior;
pub mod config;
pub mod world;
pub mod worldgen;
