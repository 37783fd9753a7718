use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};
use std::ops;

/// A point in 2D space. Whether this is grid-local space or world space
/// depends on context; see the [grid](crate::grid) module docs. `+x` is right
/// and `+y` is up.
///
/// Subtracting two points gives a [Vector2], and points can be offset by a
/// [Vector2].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl ops::Add<Vector2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Point2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl ops::Sub<Vector2> for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        Point2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl ops::Sub<Point2> for Point2 {
    type Output = Vector2;

    fn sub(self, rhs: Point2) -> Self::Output {
        Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Point2> for nalgebra::Point2<f64> {
    fn from(other: Point2) -> Self {
        nalgebra::Point2::new(other.x, other.y)
    }
}

/// A vector (offset) in 2D space. See [Point2] for a description of the
/// axes.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "<{}, {}>", x, y)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Euclidean length of this vector
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

/// A 3D vector. Only used for mesh normals, since everything else here is
/// flat.
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Serialize, Deserialize,
)]
#[display(fmt = "<{}, {}, {}>", x, y, z)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Points out of the screen, towards the viewer. Every face of a flat
    /// hex mesh has this normal.
    pub const FORWARD: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };
}
