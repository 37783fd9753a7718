use crate::render::unit::{Point2, Vector2};
use nalgebra::{Similarity2, Vector2 as NVector2};
use serde::{Deserialize, Serialize};

/// Placement of a grid within a larger world space: a uniform scale, then a
/// rotation (counter-clockwise, in radians), then a translation. Hosts that
/// draw the grid somewhere other than the world origin use this to convert
/// between world space and grid-local space.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridTransform {
    /// World position of the grid's local origin (the centre of its bounding
    /// box)
    pub translation: Vector2,
    /// Counter-clockwise rotation, in radians
    pub rotation: f64,
    /// Uniform scale factor. Must not be zero, or the transform can't be
    /// inverted.
    pub scale: f64,
}

impl GridTransform {
    pub const IDENTITY: Self = Self {
        translation: Vector2 { x: 0.0, y: 0.0 },
        rotation: 0.0,
        scale: 1.0,
    };

    /// Shorthand for a transform that only moves the grid
    pub fn from_translation(translation: Vector2) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    fn similarity(&self) -> Similarity2<f64> {
        Similarity2::new(
            NVector2::new(self.translation.x, self.translation.y),
            self.rotation,
            self.scale,
        )
    }

    /// Convert a point from world space into the grid's local space
    pub fn to_local(&self, world_point: Point2) -> Point2 {
        self.similarity()
            .inverse_transform_point(&world_point.into())
            .into()
    }

    /// Convert a point from the grid's local space into world space
    pub fn to_world(&self, local_point: Point2) -> Point2 {
        self.similarity()
            .transform_point(&local_point.into())
            .into()
    }
}

impl Default for GridTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
