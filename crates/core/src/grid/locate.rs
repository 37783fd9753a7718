//! Mapping between grid-local space and grid indices.
//!
//! Finding the cell under a point works in two passes. The first treats the
//! grid as a lattice of rectangles, one per cell, each covering the bottom
//! three quarters of its hexagon. That is nearly right, except the two bottom
//! corners of each rectangle lie outside the hexagon and actually belong to
//! the row below. The second pass checks whether the point falls in one of
//! those corner slivers and re-buckets it.
//!
//! ```text
//!          / \
//!        /     \
//!   +--|---------|--+   <- top of the bucket
//!   |  |         |  |
//!   |  |         |  |
//!   |  |         |  |
//!   |\ |         | /|
//!   |  \       /    |
//!   |LEFT  \ /  RIGHT
//!   +-------+-------+   <- bottom of the bucket
//! ```
//!
//! Based on <https://stackoverflow.com/questions/7705228/hexagonal-grids-how-do-you-find-which-hexagon-a-point-is-in>

use crate::{
    grid::{AxialCoordinate, GridGeometry, GridIndex},
    render::unit::Point2,
};

/// Which corner sliver of a rectangular bucket a point fell into, if any.
/// See the module docs for a picture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeCorrection {
    /// The point is inside the hexagon that owns the bucket
    None,
    /// The point is below the hexagon's lower-left edge
    LeftEdge,
    /// The point is below the hexagon's lower-right edge
    RightEdge,
}

impl GridGeometry {
    /// Find the rectangular bucket that a local point falls in, and which of
    /// the bucket's corner slivers (if any) it lies in. A point exactly on a
    /// sloped edge stays in the bucket's own cell. This is the first half of
    /// [Self::point_to_cell]; it's exposed mainly for debugging.
    pub fn locate_bucket(&self, point: Point2) -> (GridIndex, EdgeCorrection) {
        // Shift the point to be relative to the bottom left of the grid
        let from_bottom_left = point + self.extents();

        let grid_height = self.row_height();
        let grid_width = self.inner_diameter();
        let half_width = self.inner_radius();
        // Height of each corner sliver, and the slope of its edge
        let c = 0.5 * self.outer_radius();
        let m = c / half_width;

        // Floor (not truncation) so points below or left of the grid land in
        // negative buckets instead of being folded into row/column 0. The
        // cast saturates for points absurdly far away.
        let row = (from_bottom_left.y / grid_height).floor() as i32;
        let row_is_odd = GridIndex::new(0, row).is_odd_row();

        // Odd rows are shifted right by half a cell
        let x = if row_is_odd {
            from_bottom_left.x - half_width
        } else {
            from_bottom_left.x
        };
        let column = (x / grid_width).floor() as i32;

        // Position of the point relative to the bottom left of its bucket
        let rel_y = from_bottom_left.y - f64::from(row) * grid_height;
        let rel_x = x - f64::from(column) * grid_width;

        let correction = if rel_y < -m * rel_x + c {
            EdgeCorrection::LeftEdge
        } else if rel_y < m * rel_x - c {
            EdgeCorrection::RightEdge
        } else {
            EdgeCorrection::None
        };
        (GridIndex::new(column, row), correction)
    }

    /// Find the `(column, row)` of the cell containing a point in grid-local
    /// space. The grid is treated as infinite here, so this always returns an
    /// index, even for points nowhere near the grid. Indices beyond the range
    /// of `i32` are clamped to it. Use [Self::cell_at] if you want a bounds
    /// check as well.
    pub fn point_to_cell(&self, point: Point2) -> GridIndex {
        let (GridIndex { mut column, mut row }, correction) =
            self.locate_bucket(point);
        let row_is_odd = GridIndex::new(column, row).is_odd_row();

        // Both slivers belong to the row below. Whether the column changes
        // depends on which way the row below is shifted relative to ours.
        match correction {
            EdgeCorrection::None => {}
            EdgeCorrection::LeftEdge => {
                row = row.saturating_sub(1);
                if !row_is_odd {
                    column = column.saturating_sub(1);
                }
            }
            EdgeCorrection::RightEdge => {
                row = row.saturating_sub(1);
                if row_is_odd {
                    column = column.saturating_add(1);
                }
            }
        }

        GridIndex::new(column, row)
    }

    /// Find the cell containing a point in grid-local space. Returns `None`
    /// if the point is outside the grid.
    pub fn cell_at(&self, point: Point2) -> Option<AxialCoordinate> {
        let index = self.point_to_cell(point);
        if self.contains(index) {
            Some(index.to_axial())
        } else {
            None
        }
    }

    /// Get the centre of a cell, in grid-local space. Like
    /// [Self::point_to_cell], this works for any index, not just ones within
    /// the grid.
    pub fn cell_centre(&self, index: impl Into<GridIndex>) -> Point2 {
        let index = index.into();
        let odd = if index.is_odd_row() { 1.0 } else { 0.0 };

        let from_bottom_left = Point2 {
            x: self.inner_radius()
                + f64::from(index.column) * self.inner_diameter()
                + odd * self.inner_radius(),
            y: self.outer_radius() + f64::from(index.row) * self.row_height(),
        };
        from_bottom_left - self.extents()
    }
}

/// Determine which side of the line through `edge_start` and `edge_end` a
/// point lies on. Returns `0.0` if the point is exactly on the line, and
/// `1.0` or `-1.0` for either side (`1.0` is to the left when looking from
/// `edge_start` to `edge_end`).
pub fn side_of_line(edge_start: Point2, edge_end: Point2, point: Point2) -> f64 {
    let determinant = (edge_end.x - edge_start.x) * (point.y - edge_start.y)
        - (edge_end.y - edge_start.y) * (point.x - edge_start.x);
    if determinant == 0.0 {
        0.0
    } else {
        determinant.signum()
    }
}

/// Check if a point falls within a convex polygon, given its vertices in
/// order (e.g. the output of [hex_vertices](crate::hex_vertices)). Points on
/// an edge count as inside.
pub fn hex_contains(vertices: &[Point2], point: Point2) -> bool {
    let len = vertices.len();
    let mut expected_side = 0.0;
    for i in 0..len {
        let side = side_of_line(vertices[i], vertices[(i + 1) % len], point);
        if side == 0.0 {
            continue;
        }
        if expected_side == 0.0 {
            expected_side = side;
        } else if side != expected_side {
            return false;
        }
    }
    true
}
