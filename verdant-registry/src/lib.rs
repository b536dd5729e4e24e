//! Static registries for the Verdant engine.
//!
//! Everything here is built once at first use and frozen: registration is a
//! startup-only affair, and the resulting tables are shared read-only for
//! the rest of the process.

pub mod blocks;

use std::sync::LazyLock;

use verdant_utils::Identifier;

use crate::blocks::properties::BlockStateProperties;
use crate::blocks::{BlockConfig, BlockDefinition, BlockRegistry};

/// Registries that accept entries until frozen.
pub trait RegistryExt {
    /// Disallows further registration.
    fn freeze(&mut self);
}

/// All static registries.
pub struct Registry {
    /// The block registry.
    pub blocks: BlockRegistry,
}

/// The process-wide registry, bootstrapped on first use and immutable
/// thereafter.
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::bootstrap);

impl Registry {
    fn bootstrap() -> Self {
        let mut blocks = BlockRegistry::new();

        blocks.register(BlockDefinition::new(
            Identifier::vanilla_static("air"),
            BlockConfig {
                is_air: true,
                is_solid: false,
                replaceable: true,
            },
        ));
        blocks.register(BlockDefinition::new(
            Identifier::vanilla_static("stone"),
            BlockConfig {
                is_air: false,
                is_solid: true,
                replaceable: false,
            },
        ));
        blocks.register(BlockDefinition::new(
            Identifier::vanilla_static("oak_log"),
            BlockConfig {
                is_air: false,
                is_solid: true,
                replaceable: false,
            },
        ));
        blocks.register(
            BlockDefinition::new(
                Identifier::vanilla_static("vine"),
                BlockConfig {
                    is_air: false,
                    is_solid: false,
                    replaceable: true,
                },
            )
            .with_properties([
                BlockStateProperties::NORTH,
                BlockStateProperties::EAST,
                BlockStateProperties::SOUTH,
                BlockStateProperties::WEST,
            ]),
        );

        blocks.freeze();
        log::debug!(
            "block registry bootstrapped: {} blocks, {} states",
            blocks.block_count(),
            blocks.state_count()
        );

        Self { blocks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_registers_vanilla_set() {
        assert_eq!(REGISTRY.blocks.block_count(), 4);
        // Three single-state blocks plus 16 vine states.
        assert_eq!(REGISTRY.blocks.state_count(), 19);
    }
}
