//! The built-in block set.

use std::sync::LazyLock;

use verdant_utils::Identifier;

use crate::REGISTRY;
use crate::blocks::BlockRef;

/// Empty space.
pub static AIR: LazyLock<BlockRef> = LazyLock::new(|| expect_block("air"));

/// Generic full-cube terrain.
pub static STONE: LazyLock<BlockRef> = LazyLock::new(|| expect_block("stone"));

/// Full-cube tree trunk, the usual vine support.
pub static OAK_LOG: LazyLock<BlockRef> = LazyLock::new(|| expect_block("oak_log"));

/// The climbing decoration, with one connection flag per horizontal side.
pub static VINE: LazyLock<BlockRef> = LazyLock::new(|| expect_block("vine"));

fn expect_block(path: &'static str) -> BlockRef {
    REGISTRY
        .blocks
        .by_key(&Identifier::vanilla_static(path))
        .unwrap_or_else(|| panic!("built-in block `{path}` is not registered"))
}
