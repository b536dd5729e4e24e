// Wrapper types making it harder to accidentally use the wrong underlying type.

use std::{
    borrow::Cow,
    fmt::{self, Display},
    str::FromStr,
};

use bitflags::bitflags;
use thiserror::Error;

use crate::math::Vector3;

/// A raw block state id. Using the registry this id can be resolved into a
/// block and its current property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockStateId(pub u16);

/// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// Creates a position from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// Returns this position displaced by the given per-axis deltas.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.0.x + dx, self.0.y + dy, self.0.z + dz)
    }

    /// The position one block above.
    #[must_use]
    pub const fn up(self) -> Self {
        self.offset(0, 1, 0)
    }

    /// The position one block below.
    #[must_use]
    pub const fn down(self) -> Self {
        self.offset(0, -1, 0)
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

bitflags! {
    /// Flags controlling how a block write propagates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct UpdateFlags: u8 {
        /// Notify neighboring blocks so they can update their own shape.
        const NOTIFY_NEIGHBORS = 1;
        /// Send the change to connected clients.
        const UPDATE_CLIENTS = 2;
        /// Suppress the client-side re-render of the changed section.
        const NO_RERENDER = 4;
        /// Re-render on the main thread instead of batching.
        const RERENDER_IMMEDIATE = 8;

        /// Neighbor notification plus client update.
        const UPDATE_ALL = Self::NOTIFY_NEIGHBORS.bits() | Self::UPDATE_CLIENTS.bits();
        /// [`Self::UPDATE_ALL`] with an immediate re-render.
        const UPDATE_ALL_IMMEDIATE = Self::UPDATE_ALL.bits() | Self::RERENDER_IMMEDIATE.bits();
    }
}

/// A namespaced resource name, `namespace:path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The namespace, `verdant` for everything built in.
    pub namespace: Cow<'static, str>,
    /// The path within the namespace.
    pub path: Cow<'static, str>,
}

/// Failure to parse an [`Identifier`] from a string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    /// The input did not contain exactly one `:` separator.
    #[error("expected `namespace:path`, got `{0}`")]
    MissingSeparator(String),
    /// The namespace contained a character outside `[a-z0-9_.-]`.
    #[error("invalid namespace `{0}`")]
    InvalidNamespace(String),
    /// The path contained a character outside `[a-z0-9_./-]`.
    #[error("invalid path `{0}`")]
    InvalidPath(String),
}

impl Identifier {
    /// The namespace of everything shipped with the engine.
    pub const DEFAULT_NAMESPACE: &'static str = "verdant";

    /// Creates an identifier in the default namespace from an owned path.
    #[must_use]
    pub fn vanilla(path: String) -> Self {
        Self {
            namespace: Cow::Borrowed(Self::DEFAULT_NAMESPACE),
            path: Cow::Owned(path),
        }
    }

    /// Creates an identifier in the default namespace from a static path.
    #[must_use]
    pub const fn vanilla_static(path: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(Self::DEFAULT_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    fn valid_namespace(namespace: &str) -> bool {
        namespace
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.'))
    }

    fn valid_path(path: &str) -> bool {
        path.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.' | '/'))
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((namespace, path)) = s.split_once(':') else {
            return Err(IdentifierError::MissingSeparator(s.to_string()));
        };
        if path.contains(':') {
            return Err(IdentifierError::MissingSeparator(s.to_string()));
        }
        if !Self::valid_namespace(namespace) {
            return Err(IdentifierError::InvalidNamespace(namespace.to_string()));
        }
        if !Self::valid_path(path) {
            return Err(IdentifierError::InvalidPath(path.to_string()));
        }
        Ok(Self {
            namespace: Cow::Owned(namespace.to_string()),
            path: Cow::Owned(path.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_pos_offsets() {
        let pos = BlockPos::new(3, 64, -7);
        assert_eq!(pos.up(), BlockPos::new(3, 65, -7));
        assert_eq!(pos.down(), BlockPos::new(3, 63, -7));
        assert_eq!(pos.offset(-1, 0, 2), BlockPos::new(2, 64, -5));
    }

    #[test]
    fn test_update_flags_composites() {
        assert_eq!(UpdateFlags::UPDATE_ALL.bits(), 3);
        assert_eq!(UpdateFlags::UPDATE_ALL_IMMEDIATE.bits(), 11);
        assert!(UpdateFlags::UPDATE_ALL.contains(UpdateFlags::UPDATE_CLIENTS));
        assert!(!UpdateFlags::UPDATE_CLIENTS.contains(UpdateFlags::NOTIFY_NEIGHBORS));
    }

    #[test]
    fn test_identifier_parse() {
        let id: Identifier = "verdant:vine".parse().expect("valid identifier");
        assert_eq!(id, Identifier::vanilla_static("vine"));
        assert_eq!(id.to_string(), "verdant:vine");

        assert!(matches!(
            "vine".parse::<Identifier>(),
            Err(IdentifierError::MissingSeparator(_))
        ));
        assert!(matches!(
            "a:b:c".parse::<Identifier>(),
            Err(IdentifierError::MissingSeparator(_))
        ));
        assert!(matches!(
            "Verdant:vine".parse::<Identifier>(),
            Err(IdentifierError::InvalidNamespace(_))
        ));
        assert!(matches!(
            "verdant:Vine".parse::<Identifier>(),
            Err(IdentifierError::InvalidPath(_))
        ));
    }
}
