use crate::{
    grid::{AxialCoordinate, GridGeometry, GridIndex, GridTransform},
    render::unit::Point2,
    GridConfig,
};
use anyhow::ensure;
use log::{info, trace};
use serde::{Deserialize, Serialize};

/// A rectangular block of hex cells, each holding a `T`, owned in one flat
/// vector. Cells are stored row by row starting from the bottom left, so the
/// storage order matches [GridIndex] order: all of row 0 left to right, then
/// all of row 1, and so on.
///
/// Cells are addressed by [AxialCoordinate]. Any lookup outside the grid just
/// returns `None`; there are no invalid coordinates, only missing cells.
///
/// Deserializing validates the layout and rejects any cell list whose length
/// doesn't match it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "HexGridData<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct HexGrid<T> {
    geometry: GridGeometry,
    /// Placement of the grid in world space
    transform: GridTransform,
    cells: Vec<T>,
}

/// Unchecked form of a [HexGrid], as it appears in serialized data
#[derive(Deserialize)]
#[serde(rename = "HexGrid")]
struct HexGridData<T> {
    geometry: GridGeometry,
    #[serde(default)]
    transform: GridTransform,
    cells: Vec<T>,
}

impl<T> TryFrom<HexGridData<T>> for HexGrid<T> {
    type Error = anyhow::Error;

    fn try_from(data: HexGridData<T>) -> anyhow::Result<Self> {
        ensure!(
            data.cells.len() == data.geometry.cell_count(),
            "grid has {} cells, but its layout needs {}",
            data.cells.len(),
            data.geometry.cell_count()
        );
        Ok(Self {
            geometry: data.geometry,
            transform: data.transform,
            cells: data.cells,
        })
    }
}

impl<T> HexGrid<T> {
    /// Initialize a new grid. Returns an error if the config is invalid.
    ///
    /// ## Arguments
    ///
    /// - `config`: Layout of the grid
    /// - `initializer`: Function called to initialize each cell, based on its
    ///   position
    pub fn new(
        config: &GridConfig,
        initializer: impl Fn(AxialCoordinate) -> T,
    ) -> anyhow::Result<Self> {
        let geometry = GridGeometry::new(config)?;
        let cells: Vec<T> = Self::coordinates_for(&geometry)
            .map(initializer)
            .collect();
        debug_assert_eq!(cells.len(), geometry.cell_count());
        info!(
            "Created {}x{} hex grid with {} cells",
            geometry.cells_wide(),
            geometry.cells_high(),
            cells.len()
        );

        Ok(Self {
            geometry,
            transform: GridTransform::IDENTITY,
            cells,
        })
    }

    /// Place this grid in world space. By default, grid-local space and world
    /// space are the same.
    pub fn with_transform(mut self, transform: GridTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn transform(&self) -> &GridTransform {
        &self.transform
    }

    /// Every coordinate in a grid of the given geometry, in storage order
    fn coordinates_for(
        geometry: &GridGeometry,
    ) -> impl Iterator<Item = AxialCoordinate> {
        let cells_wide = i32::from(geometry.cells_wide());
        let cells_high = i32::from(geometry.cells_high());
        (0..cells_high).flat_map(move |row| {
            (0..cells_wide)
                .map(move |column| AxialCoordinate::from_grid_indices(column, row))
        })
    }

    /// Get the position of a coordinate within the flat storage vector, or
    /// `None` if the coordinate is outside the grid
    fn storage_index(&self, coordinate: AxialCoordinate) -> Option<usize> {
        let GridIndex { column, row } = coordinate.checked_grid_index()?;
        if self.geometry.contains(GridIndex::new(column, row)) {
            // Both are non-negative because we just bounds-checked them
            Some(
                row as usize * usize::from(self.geometry.cells_wide())
                    + column as usize,
            )
        } else {
            None
        }
    }

    /// Does the grid have a cell at this coordinate?
    pub fn contains(&self, coordinate: AxialCoordinate) -> bool {
        self.geometry.contains_coordinate(coordinate)
    }

    pub fn get(&self, coordinate: AxialCoordinate) -> Option<&T> {
        let index = self.storage_index(coordinate)?;
        self.cells.get(index)
    }

    pub fn get_mut(&mut self, coordinate: AxialCoordinate) -> Option<&mut T> {
        let index = self.storage_index(coordinate)?;
        self.cells.get_mut(index)
    }

    /// Get the cells adjacent to a coordinate, along with their coordinates.
    /// Neighbours that would fall outside the grid are skipped, so this
    /// yields anywhere from 0 to 6 items, in the order of
    /// [AxialDirection::CLOCKWISE](crate::AxialDirection::CLOCKWISE).
    pub fn neighbours(
        &self,
        coordinate: AxialCoordinate,
    ) -> impl Iterator<Item = (AxialCoordinate, &T)> {
        coordinate
            .neighbours()
            .filter_map(move |adj| Some((adj, self.get(adj)?)))
    }

    /// Every coordinate in the grid, in storage order
    pub fn coordinates(&self) -> impl Iterator<Item = AxialCoordinate> {
        Self::coordinates_for(&self.geometry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AxialCoordinate, &T)> {
        self.coordinates().zip(self.cells.iter())
    }

    pub fn iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (AxialCoordinate, &mut T)> {
        Self::coordinates_for(&self.geometry).zip(self.cells.iter_mut())
    }

    /// Map this grid into a new grid of the same layout by applying the given
    /// mapping function over each cell
    pub fn map<U>(self, f: impl Fn(T) -> U) -> HexGrid<U> {
        HexGrid {
            geometry: self.geometry,
            transform: self.transform,
            cells: self.cells.into_iter().map(f).collect(),
        }
    }

    /// Get the number of cells in the grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`, since a valid config has at least one cell. Provided
    /// for parity with [Self::len].
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Find the cell under a point in grid-local space
    pub fn cell_at(&self, local_point: Point2) -> Option<AxialCoordinate> {
        self.geometry.cell_at(local_point)
    }

    /// Find the cell under a point in world space, as positioned by this
    /// grid's transform
    pub fn cell_at_world(&self, world_point: Point2) -> Option<AxialCoordinate> {
        let local_point = self.transform.to_local(world_point);
        let cell = self.geometry.cell_at(local_point);
        if cell.is_none() {
            trace!("No cell at world point {}", world_point);
        }
        cell
    }

    /// Get the centre of a cell in world space
    pub fn cell_centre_world(&self, coordinate: AxialCoordinate) -> Point2 {
        self.transform
            .to_world(self.geometry.cell_centre(coordinate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AxialDirection, Vector2};
    use assert_approx_eq::assert_approx_eq;
    use serde_test::{assert_de_tokens, assert_de_tokens_error, Token};

    fn grid(cells_wide: u16, cells_high: u16) -> HexGrid<GridIndex> {
        HexGrid::new(
            &GridConfig {
                outer_radius: 1.0,
                cells_wide,
                cells_high,
            },
            AxialCoordinate::to_grid_index,
        )
        .unwrap()
    }

    #[test]
    fn test_len() {
        assert_eq!(grid(1, 1).len(), 1);
        assert_eq!(grid(3, 3).len(), 9);
        assert_eq!(grid(5, 2).len(), 10);
        assert!(!grid(1, 1).is_empty());
    }

    #[test]
    fn test_invalid_config() {
        let config = GridConfig {
            cells_wide: 0,
            ..Default::default()
        };
        assert!(HexGrid::new(&config, |_| ()).is_err());
    }

    #[test]
    fn test_get() {
        let mut grid = grid(4, 3);
        for (coordinate, index) in grid.iter() {
            assert_eq!(coordinate.to_grid_index(), *index);
        }
        assert_eq!(
            grid.get(AxialCoordinate::from_grid_indices(3, 2)),
            Some(&GridIndex::new(3, 2))
        );
        assert_eq!(grid.get(AxialCoordinate::from_grid_indices(4, 0)), None);
        assert_eq!(grid.get(AxialCoordinate::from_grid_indices(0, -1)), None);
        assert_eq!(grid.get(AxialCoordinate::new(i32::MAX, 2)), None);
        assert_eq!(grid.get(AxialCoordinate::new(i32::MIN, -1)), None);

        let coordinate = AxialCoordinate::from_grid_indices(1, 1);
        *grid.get_mut(coordinate).unwrap() = GridIndex::new(-5, -5);
        assert_eq!(grid.get(coordinate), Some(&GridIndex::new(-5, -5)));
    }

    #[test]
    fn test_storage_order() {
        let grid = grid(2, 2);
        let indices: Vec<GridIndex> =
            grid.coordinates().map(GridIndex::from).collect();
        assert_eq!(
            indices,
            vec![
                GridIndex::new(0, 0),
                GridIndex::new(1, 0),
                GridIndex::new(0, 1),
                GridIndex::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_neighbours() {
        let grid = grid(3, 3);

        // The middle cell is surrounded
        let middle = AxialCoordinate::from_grid_indices(1, 1);
        let neighbours: Vec<GridIndex> =
            grid.neighbours(middle).map(|(_, index)| *index).collect();
        assert_eq!(
            neighbours,
            vec![
                GridIndex::new(2, 2), // up right
                GridIndex::new(2, 1), // right
                GridIndex::new(2, 0), // down right
                GridIndex::new(1, 0), // down left
                GridIndex::new(0, 1), // left
                GridIndex::new(1, 2), // up left
            ]
        );

        // The bottom left corner only has two
        let corner = AxialCoordinate::from_grid_indices(0, 0);
        let neighbours: Vec<GridIndex> =
            grid.neighbours(corner).map(|(_, index)| *index).collect();
        assert_eq!(neighbours, vec![GridIndex::new(0, 1), GridIndex::new(1, 0)]);
    }

    #[test]
    fn test_neighbours_are_adjacent() {
        // Every axial neighbour should be exactly one cell width away, which
        // also holds for the negative rows outside the grid
        let geometry = *grid(1, 1).geometry();
        for column in -4..4 {
            for row in -4..4 {
                let coordinate = AxialCoordinate::from_grid_indices(column, row);
                let centre = geometry.cell_centre(coordinate);
                for direction in AxialDirection::CLOCKWISE {
                    let neighbour = coordinate.neighbour(*direction);
                    let distance =
                        (geometry.cell_centre(neighbour) - centre).length();
                    assert_approx_eq!(distance, geometry.inner_diameter());
                }
            }
        }
    }

    /// Tokens for a serialized 2x1 grid, minus the transform
    fn grid_tokens(outer_radius: f64, cells: &[u8]) -> Vec<Token> {
        let mut tokens = vec![
            Token::Struct {
                name: "HexGrid",
                len: 3,
            },
            Token::Str("geometry"),
            Token::Struct {
                name: "GridConfig",
                len: 3,
            },
            Token::Str("outer_radius"),
            Token::F64(outer_radius),
            Token::Str("cells_wide"),
            Token::U16(2),
            Token::Str("cells_high"),
            Token::U16(1),
            Token::StructEnd,
            Token::Str("cells"),
            Token::Seq {
                len: Some(cells.len()),
            },
        ];
        tokens.extend(cells.iter().map(|cell| Token::U8(*cell)));
        tokens.push(Token::SeqEnd);
        tokens.push(Token::StructEnd);
        tokens
    }

    #[test]
    fn test_deserialize() {
        let grid = HexGrid::new(
            &GridConfig {
                outer_radius: 1.0,
                cells_wide: 2,
                cells_high: 1,
            },
            |coordinate| coordinate.x() as u8 + 3,
        )
        .unwrap();
        assert_de_tokens(&grid, &grid_tokens(1.0, &[3, 4]));
    }

    #[test]
    fn test_deserialize_invalid() {
        assert_de_tokens_error::<HexGrid<u8>>(
            &grid_tokens(1.0, &[3]),
            "grid has 1 cells, but its layout needs 2",
        );
        assert_de_tokens_error::<HexGrid<u8>>(
            &grid_tokens(1.0, &[3, 4, 5]),
            "grid has 3 cells, but its layout needs 2",
        );
        assert_de_tokens_error::<HexGrid<u8>>(
            &grid_tokens(-1.0, &[3, 4]),
            "invalid grid config",
        );
    }

    #[test]
    fn test_map() {
        let grid = grid(2, 3).map(|index| index.row);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(AxialCoordinate::from_grid_indices(1, 2)), Some(&2));
    }

    #[test]
    fn test_iter_mut() {
        let mut grid = grid(2, 2).map(|_| 0);
        for (coordinate, value) in grid.iter_mut() {
            *value = coordinate.column() + 10 * coordinate.y();
        }
        assert_eq!(grid.get(AxialCoordinate::from_grid_indices(1, 1)), Some(&11));
    }

    #[test]
    fn test_world_space() {
        let grid = grid(3, 3)
            .with_transform(GridTransform::from_translation(Vector2 { x: 100.0, y: 50.0 }));

        assert_eq!(grid.cell_at_world(Point2 { x: 0.0, y: 0.0 }), None);
        let middle = AxialCoordinate::from_grid_indices(1, 1);
        assert_eq!(grid.cell_at_world(Point2 { x: 100.0, y: 50.0 }), Some(middle));

        for coordinate in grid.coordinates() {
            let centre = grid.cell_centre_world(coordinate);
            assert_eq!(grid.cell_at_world(centre), Some(coordinate));
            assert_eq!(
                grid.cell_at(grid.transform().to_local(centre)),
                Some(coordinate)
            );
        }
    }
}
