//! Math primitives for block space.

pub mod axis;
pub mod vector3;

pub use axis::{Axis, AxisDirection};
pub use vector3::Vector3;
