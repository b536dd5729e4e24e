//! Block-state properties and the cardinal direction model.
//!
//! [`Direction`] is a closed six-value algebra: every value knows its
//! opposite, axis, sign, and unit vector, and the rotation operators are
//! fixed 4-cycles. All associated data is `const`; the only lookup table is
//! a compile-time name map.

use verdant_utils::BlockPos;
use verdant_utils::math::{Axis, AxisDirection, Vector3};
use verdant_utils::random::{Random, RandomSource};

/// One of the six cardinal block facings.
///
/// The discriminants are the canonical dense indices (down, up, north,
/// south, west, east) that collaborators persist.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards negative Y.
    Down = 0,
    /// Towards positive Y.
    Up = 1,
    /// Towards negative Z.
    North = 2,
    /// Towards positive Z.
    South = 3,
    /// Towards negative X.
    West = 4,
    /// Towards positive X.
    East = 5,
}

static NAME_LOOKUP: phf::Map<&'static str, Direction> = phf::phf_map! {
    "down" => Direction::Down,
    "up" => Direction::Up,
    "north" => Direction::North,
    "south" => Direction::South,
    "west" => Direction::West,
    "east" => Direction::East,
};

impl Direction {
    /// All six directions in canonical index order.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The four horizontal directions in dense horizontal-index order.
    pub const HORIZONTAL: [Direction; 4] = [
        Direction::South,
        Direction::West,
        Direction::North,
        Direction::East,
    ];

    /// Canonical dense index, 0..6.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Dense index among the horizontal directions (south, west, north,
    /// east), `None` for the vertical ones.
    #[must_use]
    pub const fn horizontal_index(self) -> Option<usize> {
        match self {
            Self::South => Some(0),
            Self::West => Some(1),
            Self::North => Some(2),
            Self::East => Some(3),
            Self::Down | Self::Up => None,
        }
    }

    /// The opposite facing.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Stable lowercase name, used wherever a facing is serialized.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        }
    }

    /// Case-insensitive lookup by name. Unknown names yield `None`.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        NAME_LOOKUP.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// The axis this facing's unit vector lies on.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Down | Self::Up => Axis::Y,
            Self::North | Self::South => Axis::Z,
            Self::West | Self::East => Axis::X,
        }
    }

    /// The sign of travel along [`Self::axis`].
    #[must_use]
    pub const fn axis_direction(self) -> AxisDirection {
        match self {
            Self::Up | Self::South | Self::East => AxisDirection::Positive,
            Self::Down | Self::North | Self::West => AxisDirection::Negative,
        }
    }

    /// The unit vector pointing along this facing.
    #[must_use]
    pub const fn unit_vec(self) -> Vector3<i32> {
        match self {
            Self::Down => Vector3::new(0, -1, 0),
            Self::Up => Vector3::new(0, 1, 0),
            Self::North => Vector3::new(0, 0, -1),
            Self::South => Vector3::new(0, 0, 1),
            Self::West => Vector3::new(-1, 0, 0),
            Self::East => Vector3::new(1, 0, 0),
        }
    }

    /// The signed unit component of this facing along `axis`: nonzero only
    /// when `axis` is this facing's own axis.
    #[must_use]
    pub const fn front_offset(self, axis: Axis) -> i32 {
        let unit = self.unit_vec();
        match axis {
            Axis::X => unit.x,
            Axis::Y => unit.y,
            Axis::Z => unit.z,
        }
    }

    /// Whether this facing lies in the horizontal plane.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        self.axis().is_horizontal()
    }

    /// Whether this facing is vertical.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        self.axis().is_vertical()
    }

    /// The plane this facing belongs to.
    #[must_use]
    pub const fn plane(self) -> Plane {
        Plane::of_axis(self.axis())
    }

    /// Rotates this facing 90° clockwise around `axis`.
    ///
    /// Rotating a facing around its own axis is the identity.
    #[must_use]
    pub fn rotate_around(self, axis: Axis) -> Self {
        if self.axis() == axis {
            return self;
        }
        match axis {
            Axis::X => self.rotate_x(),
            Axis::Y => self.rotate_y(),
            Axis::Z => self.rotate_z(),
        }
    }

    /// Rotates 90° clockwise around Y: north → east → south → west → north.
    ///
    /// # Panics
    /// Panics on a vertical facing; callers guard with [`Self::is_horizontal`]
    /// or go through [`Self::rotate_around`].
    #[must_use]
    pub fn rotate_y(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
            _ => panic!("cannot rotate {self:?} around the Y axis"),
        }
    }

    /// Rotates 90° counter-clockwise around Y: north → west → south → east →
    /// north. Inverse of [`Self::rotate_y`].
    ///
    /// # Panics
    /// Panics on a vertical facing.
    #[must_use]
    pub fn rotate_y_ccw(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
            _ => panic!("cannot rotate {self:?} counter-clockwise around the Y axis"),
        }
    }

    /// North → down → south → up → north.
    fn rotate_x(self) -> Self {
        match self {
            Self::North => Self::Down,
            Self::Down => Self::South,
            Self::South => Self::Up,
            Self::Up => Self::North,
            _ => panic!("cannot rotate {self:?} around the X axis"),
        }
    }

    /// East → down → west → up → east.
    fn rotate_z(self) -> Self {
        match self {
            Self::East => Self::Down,
            Self::Down => Self::West,
            Self::West => Self::Up,
            Self::Up => Self::East,
            _ => panic!("cannot rotate {self:?} around the Z axis"),
        }
    }

    /// Facing for an arbitrary integer index, folded into range by the
    /// absolute value of `index % 6`.
    ///
    /// For negative inputs this is NOT a floor modulo: `-1` folds to 1 (up),
    /// not 5. Persisted data depends on these exact values.
    #[must_use]
    pub fn from_index(index: i32) -> Self {
        Self::ALL[(index % Self::ALL.len() as i32).unsigned_abs() as usize]
    }

    /// Horizontal facing for an arbitrary integer index, folded like
    /// [`Self::from_index`] over the south, west, north, east order.
    #[must_use]
    pub fn from_horizontal_index(index: i32) -> Self {
        Self::HORIZONTAL[(index % Self::HORIZONTAL.len() as i32).unsigned_abs() as usize]
    }

    /// Horizontal facing for a heading angle in degrees: 0° is south, 90°
    /// is west.
    #[must_use]
    pub fn from_angle(degrees: f64) -> Self {
        Self::from_horizontal_index(((degrees / 90.0 + 0.5).floor() as i32) & 3)
    }

    /// A uniformly random facing.
    #[must_use]
    pub fn random(random: &mut RandomSource) -> Self {
        Self::ALL[random.next_i32_bounded(Self::ALL.len() as i32) as usize]
    }

    /// The facing whose unit vector points most nearly along `(x, y, z)`.
    ///
    /// Ties resolve to the first candidate in canonical order. The search
    /// seeds on north with the smallest positive score, so the zero vector
    /// (and anything fully ambiguous) deterministically yields north.
    #[must_use]
    pub fn from_vector(x: f32, y: f32, z: f32) -> Self {
        let mut nearest = Self::North;
        let mut best = f32::MIN_POSITIVE;

        for candidate in Self::ALL {
            let unit = candidate.unit_vec();
            let dot = x * unit.x as f32 + y * unit.y as f32 + z * unit.z as f32;
            if dot > best {
                best = dot;
                nearest = candidate;
            }
        }

        nearest
    }

    /// The unique facing along `axis` with the given sign.
    #[must_use]
    pub const fn from_axis_and_sign(axis: Axis, sign: AxisDirection) -> Self {
        match (axis, sign) {
            (Axis::Y, AxisDirection::Negative) => Self::Down,
            (Axis::Y, AxisDirection::Positive) => Self::Up,
            (Axis::Z, AxisDirection::Negative) => Self::North,
            (Axis::Z, AxisDirection::Positive) => Self::South,
            (Axis::X, AxisDirection::Negative) => Self::West,
            (Axis::X, AxisDirection::Positive) => Self::East,
        }
    }

    /// `pos` moved one block along this facing.
    #[must_use]
    pub const fn relative(self, pos: BlockPos) -> BlockPos {
        let unit = self.unit_vec();
        pos.offset(unit.x, unit.y, unit.z)
    }

    /// The side connection flag for a horizontal facing, `None` for a
    /// vertical one.
    #[must_use]
    pub const fn to_connection_property(self) -> Option<BoolProperty> {
        match self {
            Self::North => Some(BlockStateProperties::NORTH),
            Self::East => Some(BlockStateProperties::EAST),
            Self::South => Some(BlockStateProperties::SOUTH),
            Self::West => Some(BlockStateProperties::WEST),
            Self::Down | Self::Up => None,
        }
    }
}

/// Grouping of the six facings into the horizontal and vertical planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    /// The four X/Z-aligned facings.
    Horizontal,
    /// The two Y-aligned facings.
    Vertical,
}

impl Plane {
    /// The facings of this plane.
    ///
    /// The horizontal order (north, east, south, west) is what placement
    /// scans iterate; reordering it changes which side wins a scan.
    #[must_use]
    pub const fn facings(self) -> &'static [Direction] {
        match self {
            Self::Horizontal => &[
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West,
            ],
            Self::Vertical => &[Direction::Up, Direction::Down],
        }
    }

    /// The plane an axis belongs to: X and Z are horizontal, Y is vertical.
    #[must_use]
    pub const fn of_axis(axis: Axis) -> Self {
        if axis.is_vertical() {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Whether `direction` belongs to this plane.
    #[must_use]
    pub fn contains(self, direction: Direction) -> bool {
        direction.plane() == self
    }

    /// A uniformly random facing from this plane.
    #[must_use]
    pub fn random_direction(self, random: &mut RandomSource) -> Direction {
        let facings = self.facings();
        facings[random.next_i32_bounded(facings.len() as i32) as usize]
    }
}

/// A named boolean block-state property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolProperty {
    name: &'static str,
}

impl BoolProperty {
    /// Values per boolean property.
    pub(crate) const VALUE_COUNT: u16 = 2;

    /// Creates a property with the given serialized name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// The property's serialized name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Index of a value in the property's value order (`false`, `true`).
    pub(crate) const fn value_index(value: bool) -> u16 {
        value as u16
    }
}

/// Canonical shared property instances.
pub struct BlockStateProperties;

impl BlockStateProperties {
    /// Connected on the north side.
    pub const NORTH: BoolProperty = BoolProperty::new("north");
    /// Connected on the east side.
    pub const EAST: BoolProperty = BoolProperty::new("east");
    /// Connected on the south side.
    pub const SOUTH: BoolProperty = BoolProperty::new("south");
    /// Connected on the west side.
    pub const WEST: BoolProperty = BoolProperty::new("west");
}
