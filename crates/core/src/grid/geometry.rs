use crate::{
    grid::{AxialCoordinate, GridIndex},
    render::unit::Vector2,
    GridConfig,
};
use anyhow::Context;
use fnv::FnvHashMap;
use log::debug;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Ratio between the inner radius (centre to side midpoint) and the outer
/// radius (centre to vertex) of a regular hexagon. This is `sqrt(3) / 2`.
pub const OUTER_TO_INNER_RADIUS: f64 = 0.866_025_403_784_438_6;

/// All the layout constants of a grid, derived from a [GridConfig]. These are
/// pure functions of the config and are never stored anywhere else, so
/// if the config changes, build a new geometry. Geometries are small and
/// `Copy`, so pass them around freely.
///
/// Dimensions refer to grid-local space, where the origin is the centre of
/// the grid's bounding box. See the [grid](crate::grid) module docs.
///
/// A geometry (de)serializes as its [GridConfig]. Deserializing validates the
/// config and recomputes everything else, the same as [Self::new].
#[cfg_attr(feature = "bevy", derive(bevy_ecs::system::Resource))]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridConfig", into = "GridConfig")]
pub struct GridGeometry {
    config: GridConfig,
    inner_radius: f64,
    size: Vector2,
}

impl GridGeometry {
    /// Compute the geometry for a grid configuration. Returns an error if the
    /// config is invalid.
    pub fn new(config: &GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;

        let inner_radius = config.outer_radius * OUTER_TO_INNER_RADIUS;
        let inner_diameter = inner_radius * 2.0;
        let outer_diameter = config.outer_radius * 2.0;

        // Odd rows are shifted right by half a cell, which makes the whole
        // grid wider as soon as there's more than one row
        let row_offset = if config.cells_high > 1 {
            inner_radius
        } else {
            0.0
        };
        let width = inner_diameter * f64::from(config.cells_wide) + row_offset;
        // Rows overlap by a quarter of a cell's height
        let height = outer_diameter
            + config.outer_radius * 1.5 * f64::from(config.cells_high - 1);

        let geometry = Self {
            config: *config,
            inner_radius,
            size: Vector2 {
                x: width,
                y: height,
            },
        };
        debug!("Computed grid geometry {:?}", geometry);
        Ok(geometry)
    }

    /// The config that this geometry was derived from
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Distance from the centre of a cell to one of its vertices
    pub fn outer_radius(&self) -> f64 {
        self.config.outer_radius
    }

    /// Distance between two opposite vertices of a cell, i.e. the height of
    /// a single (pointy-top) cell
    pub fn outer_diameter(&self) -> f64 {
        self.config.outer_radius * 2.0
    }

    /// Distance from the centre of a cell to the midpoint of one of its sides
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Distance between two opposite sides of a cell, i.e. the width of a
    /// single cell. This is also the distance between the centres of two
    /// adjacent cells.
    pub fn inner_diameter(&self) -> f64 {
        self.inner_radius * 2.0
    }

    /// Vertical distance between the centres of two consecutive rows
    pub fn row_height(&self) -> f64 {
        self.config.outer_radius * 1.5
    }

    pub fn cells_wide(&self) -> u16 {
        self.config.cells_wide
    }

    pub fn cells_high(&self) -> u16 {
        self.config.cells_high
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        usize::from(self.config.cells_wide) * usize::from(self.config.cells_high)
    }

    /// Width and height of the grid's bounding box
    pub fn size(&self) -> Vector2 {
        self.size
    }

    /// Half the size of the bounding box. Since local space is centred on the
    /// bounding box, the bottom-left corner of the grid is at `-extents`.
    pub fn extents(&self) -> Vector2 {
        self.size / 2.0
    }

    /// Does the grid have a cell at this index?
    pub fn contains(&self, index: GridIndex) -> bool {
        index.column >= 0
            && index.column < i32::from(self.config.cells_wide)
            && index.row >= 0
            && index.row < i32::from(self.config.cells_high)
    }

    /// Does the grid have a cell at this coordinate?
    pub fn contains_coordinate(&self, coordinate: AxialCoordinate) -> bool {
        coordinate
            .checked_grid_index()
            .map_or(false, |index| self.contains(index))
    }
}

impl TryFrom<GridConfig> for GridGeometry {
    type Error = anyhow::Error;

    fn try_from(config: GridConfig) -> anyhow::Result<Self> {
        Self::new(&config)
    }
}

impl From<GridGeometry> for GridConfig {
    fn from(geometry: GridGeometry) -> Self {
        geometry.config
    }
}

/// Memoizes geometries by config, for hosts that re-derive the layout on
/// every frame. Keyed on the exact bits of the radius, so two configs only
/// share an entry when they are identical.
#[derive(Clone, Debug, Default)]
pub struct GeometryCache {
    geometries: FnvHashMap<(u64, u16, u16), GridGeometry>,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the geometry for a config, computing it if this is the first time
    /// we've seen the config. Invalid configs are never cached.
    pub fn get(&mut self, config: &GridConfig) -> anyhow::Result<GridGeometry> {
        let key = (
            config.outer_radius.to_bits(),
            config.cells_wide,
            config.cells_high,
        );
        if let Some(geometry) = self.geometries.get(&key) {
            return Ok(*geometry);
        }

        let geometry = GridGeometry::new(config)?;
        self.geometries.insert(key, geometry);
        Ok(geometry)
    }

    /// Number of distinct configs cached
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub fn clear(&mut self) {
        self.geometries.clear();
    }
}
