//! Demo driver: build a small level, run the vine decoration pass over it,
//! and report what grew.

use std::path::Path;

use anyhow::Context;
use verdant_core::config::LevelConfig;
use verdant_core::world::{LevelWriter, SparseLevel};
use verdant_core::worldgen::feature::vines::VineFeature;
use verdant_core::worldgen::feature::{Feature, FeatureType};
use verdant_registry::blocks::block_state_ext::BlockStateExt;
use verdant_registry::blocks::vanilla;
use verdant_utils::BlockPos;
use verdant_utils::random::RandomSource;
use verdant_utils::types::UpdateFlags;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = LevelConfig::load_or_default(Path::new("verdant_level.json5"))
        .context("loading level config")?;
    log::info!(
        "level: y in {}..{}, seed {}",
        config.min_y,
        config.min_y + config.height as i32,
        config.seed
    );

    let mut level = SparseLevel::with_config(&config);
    build_demo_terrain(&mut level);
    let terrain_blocks = level.block_count();

    let feature = FeatureType::Vines(VineFeature);
    let mut random = RandomSource::legacy(config.seed);
    for origin in [
        BlockPos::new(0, 64, 0),
        BlockPos::new(2, 62, 1),
        BlockPos::new(-4, 64, -4),
    ] {
        feature.place(&mut level, &mut random, origin);
        log::debug!("vine pass finished from {origin}");
    }

    let vines = level
        .iter_blocks()
        .filter(|(_, state)| std::ptr::eq(state.get_block(), *vanilla::VINE))
        .count();
    log::info!("grew {vines} vines around {terrain_blocks} terrain blocks");

    Ok(())
}

/// A log pillar and a stone slab, enough terrain for the vines to find
/// walls to cling to.
fn build_demo_terrain(level: &mut SparseLevel) {
    let stone = vanilla::STONE.default_state();
    let log = vanilla::OAK_LOG.default_state();

    for y in 60..90 {
        level.set_block(BlockPos::new(1, y, 0), log, UpdateFlags::UPDATE_ALL);
    }
    for x in -6..=-2 {
        for z in -6..=-2 {
            level.set_block(BlockPos::new(x, 64, z), stone, UpdateFlags::UPDATE_ALL);
        }
    }
}
