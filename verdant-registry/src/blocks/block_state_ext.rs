//! Registry-backed accessors on raw block state ids.

use verdant_utils::BlockStateId;

use crate::REGISTRY;
use crate::blocks::BlockRef;
use crate::blocks::properties::{BoolProperty, Direction};

/// Resolves a raw state id into its block and property values.
pub trait BlockStateExt {
    /// The block owning this state.
    fn get_block(self) -> BlockRef;

    /// The value of `property` in this state.
    ///
    /// # Panics
    /// Panics if the block does not carry the property; use
    /// [`Self::try_get_value`] when absence is an expected case.
    fn get_value(self, property: &BoolProperty) -> bool;

    /// The value of `property`, or `None` if the block does not carry it.
    fn try_get_value(self, property: &BoolProperty) -> Option<bool>;

    /// This state with `property` set to `value`.
    ///
    /// # Panics
    /// Panics if the block does not carry the property.
    #[must_use]
    fn set_value(self, property: &BoolProperty, value: bool) -> Self;

    /// Whether this state is empty space.
    fn is_air(self) -> bool;

    /// Whether the face toward `direction` is a full sturdy square that can
    /// support an attachment.
    fn is_face_sturdy(self, direction: Direction) -> bool;
}

impl BlockStateExt for BlockStateId {
    fn get_block(self) -> BlockRef {
        REGISTRY.blocks.block_for_state(self)
    }

    fn get_value(self, property: &BoolProperty) -> bool {
        self.try_get_value(property).unwrap_or_else(|| {
            panic!(
                "block `{}` has no property `{}`",
                self.get_block().key,
                property.name()
            )
        })
    }

    fn try_get_value(self, property: &BoolProperty) -> Option<bool> {
        let block = self.get_block();
        let stride = block.property_stride(property)?;
        let offset = self.0 - block.default_state().0;
        Some((offset / stride) % BoolProperty::VALUE_COUNT == BoolProperty::value_index(true))
    }

    fn set_value(self, property: &BoolProperty, value: bool) -> Self {
        let block = self.get_block();
        let Some(stride) = block.property_stride(property) else {
            panic!(
                "block `{}` has no property `{}`",
                block.key,
                property.name()
            );
        };
        let offset = self.0 - block.default_state().0;
        let current = (offset / stride) % BoolProperty::VALUE_COUNT;
        BlockStateId(self.0 - current * stride + BoolProperty::value_index(value) * stride)
    }

    fn is_air(self) -> bool {
        self.get_block().config.is_air
    }

    fn is_face_sturdy(self, _direction: Direction) -> bool {
        // Every block in this slice is either a full cube or not solid at
        // all, so sturdiness does not depend on the face.
        self.get_block().config.is_solid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::properties::BlockStateProperties;
    use crate::blocks::vanilla;

    #[test]
    fn test_default_state_has_all_flags_clear() {
        let state = vanilla::VINE.default_state();
        for property in [
            BlockStateProperties::NORTH,
            BlockStateProperties::EAST,
            BlockStateProperties::SOUTH,
            BlockStateProperties::WEST,
        ] {
            assert!(!state.get_value(&property));
        }
    }

    #[test]
    fn test_set_value_round_trips() {
        let state = vanilla::VINE
            .default_state()
            .set_value(&BlockStateProperties::EAST, true);

        assert!(state.get_value(&BlockStateProperties::EAST));
        assert!(!state.get_value(&BlockStateProperties::NORTH));
        assert!(!state.get_value(&BlockStateProperties::SOUTH));
        assert!(!state.get_value(&BlockStateProperties::WEST));

        // Setting a flag twice is idempotent, clearing restores the default.
        assert_eq!(state.set_value(&BlockStateProperties::EAST, true), state);
        assert_eq!(
            state.set_value(&BlockStateProperties::EAST, false),
            vanilla::VINE.default_state()
        );
    }

    #[test]
    fn test_set_value_preserves_other_flags() {
        let state = vanilla::VINE
            .default_state()
            .set_value(&BlockStateProperties::NORTH, true)
            .set_value(&BlockStateProperties::WEST, true);

        assert!(state.get_value(&BlockStateProperties::NORTH));
        assert!(state.get_value(&BlockStateProperties::WEST));
        assert!(!state.get_value(&BlockStateProperties::EAST));

        let cleared = state.set_value(&BlockStateProperties::NORTH, false);
        assert!(!cleared.get_value(&BlockStateProperties::NORTH));
        assert!(cleared.get_value(&BlockStateProperties::WEST));
    }

    #[test]
    fn test_state_resolves_to_owning_block() {
        let state = vanilla::VINE
            .default_state()
            .set_value(&BlockStateProperties::SOUTH, true);
        assert!(std::ptr::eq(state.get_block(), *vanilla::VINE));

        assert!(vanilla::AIR.default_state().is_air());
        assert!(!vanilla::VINE.default_state().is_air());
    }

    #[test]
    fn test_try_get_value_on_missing_property() {
        let stone = vanilla::STONE.default_state();
        assert_eq!(stone.try_get_value(&BlockStateProperties::NORTH), None);
    }

    #[test]
    #[should_panic(expected = "has no property")]
    fn test_get_value_panics_on_missing_property() {
        let _ = vanilla::STONE
            .default_state()
            .get_value(&BlockStateProperties::NORTH);
    }

    #[test]
    fn test_face_sturdiness_follows_solidity() {
        for direction in Direction::ALL {
            assert!(vanilla::STONE.default_state().is_face_sturdy(direction));
            assert!(vanilla::OAK_LOG.default_state().is_face_sturdy(direction));
            assert!(!vanilla::AIR.default_state().is_face_sturdy(direction));
            assert!(!vanilla::VINE.default_state().is_face_sturdy(direction));
        }
    }
}
