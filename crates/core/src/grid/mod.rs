//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! Hexmap uses three different coordinate systems.
//!
//! ### Axial Coordinates
//!
//! Axial coordinates address cells. Each coordinate has two integer
//! components: `y` is the row, and `x` is a column that leans with the rows,
//! so that stepping one row up keeps `x` on a straight diagonal line. This is
//! a two-axis variant of the cube system described by [Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial).
//! Adjacency is trivial in this system: every neighbour is one of six fixed
//! offsets away (see [AxialDirection]).
//!
//! ### Grid Indices
//!
//! Grid indices are the `(column, row)` pair of a cell within a rectangular
//! block of cells. Rows run bottom to top, columns left to right, and every
//! odd row is shifted right by half a cell:
//!
//! ```text
//!  row 2    / \ / \ / \
//!          | 0 | 1 | 2 |
//!  row 1  / \ / \ / \ / \
//!           | 0 | 1 | 2 |
//!  row 0  \ / \ / \ / \ /
//!         | 0 | 1 | 2 |
//!          \ / \ / \ /
//! ```
//!
//! Converting between the two only involves the row:
//! `x = column - floor(row / 2)` and `column = x + floor(y / 2)`. Floor
//! division (rather than truncation) keeps the axial directions pointing at
//! the geometrically adjacent cell even for negative rows, which matters
//! because point lookups are defined on an infinite grid.
//!
//! ### Local Space
//!
//! Local space is the continuous 2D plane the grid is drawn on. The origin is
//! the centre of the grid's bounding box, `+x` points right and `+y` points
//! up. Cells are pointy-top: each cell has a vertex directly above its centre.
//! A [GridTransform] maps local space to and from whatever world space the
//! host uses.
//!
//! Use [GridGeometry::point_to_cell] and [GridGeometry::cell_centre] to move
//! between local space and grid indices.

mod axial;
mod data_structure;
mod geometry;
mod locate;
mod transform;

pub use self::{
    axial::*, data_structure::*, geometry::*, locate::*, transform::*,
};
