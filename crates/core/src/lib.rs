//! Hexmap is a small toolkit for pointy-top hexagonal grids laid out in offset
//! rows. It covers the math that sits between a continuous 2D space and a
//! rectangular block of hex cells: addressing cells, finding the cell that
//! contains an arbitrary point, finding the centre of a cell, and building
//! flat fan meshes for rendering. Anything to do with scenes, input or assets
//! is left to whatever host embeds this crate.
//!
//! ```
//! use hexmap::{GridConfig, GridGeometry, Point2};
//!
//! let config = GridConfig {
//!     outer_radius: 1.0,
//!     cells_wide: 3,
//!     cells_high: 3,
//! };
//! let geometry = GridGeometry::new(&config).unwrap();
//! let cell = geometry.cell_at(Point2 { x: 0.0, y: 0.0 });
//! println!("{:?}", cell);
//! ```
//!
//! See [GridConfig] for details on how the grid layout can be customized.

#[macro_use]
mod util;

mod config;
pub mod grid;
pub mod render;

pub use crate::{
    config::GridConfig,
    grid::{
        hex_contains, side_of_line, AxialCoordinate, AxialDirection,
        EdgeCorrection, GeometryCache, GridGeometry, GridIndex, GridTransform,
        HexGrid,
    },
    render::{
        grid_mesh::GridMesh,
        mesh::{hex_vertices, HexFanMesh},
        unit::{Point2, Vector2, Vector3},
    },
};
