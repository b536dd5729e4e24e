//! Blocks and the block registry.
//!
//! Each registered block owns a contiguous range of raw state ids, one per
//! combination of its property values. Resolving an id back to its block and
//! values goes through [`block_state_ext::BlockStateExt`].

pub mod block_state_ext;
pub mod properties;
pub mod vanilla;

use rustc_hash::FxHashMap;
use verdant_utils::{BlockStateId, Identifier};

use crate::RegistryExt;
use crate::blocks::properties::BoolProperty;

/// A reference to a registered block. Registered blocks live for the whole
/// process and are shared read-only.
pub type BlockRef = &'static Block;

/// Static, data-driven block attributes.
#[derive(Debug, Clone, Copy)]
pub struct BlockConfig {
    /// Whether the block is empty space.
    pub is_air: bool,
    /// Whether every face is a full sturdy square that can support
    /// attachments.
    pub is_solid: bool,
    /// Whether placement may overwrite this block.
    pub replaceable: bool,
}

/// A registered block: identity, attributes, and its state-property layout.
pub struct Block {
    /// The block's namespaced key.
    pub key: Identifier,
    /// Static attributes.
    pub config: BlockConfig,
    /// State properties; the first property varies slowest in the id layout.
    properties: Vec<BoolProperty>,
    base_state: BlockStateId,
    state_count: u16,
}

impl Block {
    /// The block's default state: every boolean property `false`.
    #[must_use]
    pub const fn default_state(&self) -> BlockStateId {
        self.base_state
    }

    /// Distance between consecutive values of `property` in the id layout,
    /// or `None` if this block does not carry the property.
    pub(crate) fn property_stride(&self, property: &BoolProperty) -> Option<u16> {
        let mut stride = 1u16;
        for candidate in self.properties.iter().rev() {
            if candidate == property {
                return Some(stride);
            }
            stride *= BoolProperty::VALUE_COUNT;
        }
        None
    }

    /// Whether `state` falls inside this block's assigned id range.
    #[must_use]
    pub fn owns_state(&self, state: BlockStateId) -> bool {
        let offset = state.0.wrapping_sub(self.base_state.0);
        offset < self.state_count
    }
}

/// Everything needed to register a block.
pub struct BlockDefinition {
    key: Identifier,
    config: BlockConfig,
    properties: Vec<BoolProperty>,
}

impl BlockDefinition {
    /// Starts a definition with no state properties.
    #[must_use]
    pub fn new(key: Identifier, config: BlockConfig) -> Self {
        Self {
            key,
            config,
            properties: Vec::new(),
        }
    }

    /// Declares the block's state properties, in layout order.
    #[must_use]
    pub fn with_properties(mut self, properties: impl IntoIterator<Item = BoolProperty>) -> Self {
        self.properties = properties.into_iter().collect();
        self
    }
}

/// The block registry. Accepts registrations until frozen, then serves
/// read-only lookups by key and by state id.
pub struct BlockRegistry {
    by_key: FxHashMap<Identifier, BlockRef>,
    by_state: Vec<BlockRef>,
    allows_registering: bool,
}

impl BlockRegistry {
    pub(crate) fn new() -> Self {
        Self {
            by_key: FxHashMap::default(),
            by_state: Vec::new(),
            allows_registering: true,
        }
    }

    /// Registers a block, assigning it the next contiguous state id range.
    ///
    /// # Panics
    /// Panics if the registry is frozen or the state id space overflows.
    pub fn register(&mut self, definition: BlockDefinition) -> BlockRef {
        assert!(
            self.allows_registering,
            "cannot register `{}` after the registry is frozen",
            definition.key
        );

        let state_count = BoolProperty::VALUE_COUNT.pow(definition.properties.len() as u32);
        let base = u16::try_from(self.by_state.len()).expect("block state id space exhausted");

        let block: BlockRef = Box::leak(Box::new(Block {
            key: definition.key,
            config: definition.config,
            properties: definition.properties,
            base_state: BlockStateId(base),
            state_count,
        }));

        self.by_key.insert(block.key.clone(), block);
        for _ in 0..state_count {
            self.by_state.push(block);
        }

        block
    }

    /// Looks a block up by key.
    #[must_use]
    pub fn by_key(&self, key: &Identifier) -> Option<BlockRef> {
        self.by_key.get(key).copied()
    }

    /// The block owning a raw state id.
    ///
    /// # Panics
    /// Panics if no registered block owns the id; that indicates a corrupted
    /// id, never a recoverable condition.
    #[must_use]
    pub fn block_for_state(&self, state: BlockStateId) -> BlockRef {
        self.by_state
            .get(state.0 as usize)
            .copied()
            .unwrap_or_else(|| panic!("no block owns state id {}", state.0))
    }

    /// Number of registered blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.by_key.len()
    }

    /// Number of assigned state ids.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.by_state.len()
    }
}

impl RegistryExt for BlockRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}
