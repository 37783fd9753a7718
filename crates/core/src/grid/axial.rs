//! Basic integer units of the grid: axial coordinates, the six directions
//! between adjacent cells, and rectangular grid indices. See the parent
//! module documentation for how these systems relate.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops;
use strum::{EnumIter, IntoEnumIterator};

/// The address of a single cell, in axial coordinates. Cells are just
/// addresses: any coordinate is valid to construct, and whether it falls
/// within a particular grid is a separate bounds check (see
/// [GridGeometry::contains_coordinate](crate::GridGeometry::contains_coordinate)).
///
/// Arithmetic operators panic on overflow (in every build profile) instead of
/// wrapping. Use the `checked_*` methods if you need to handle that.
#[cfg_attr(feature = "bevy", derive(bevy_ecs::component::Component))]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct AxialCoordinate {
    x: i32,
    y: i32,
}

impl AxialCoordinate {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The axial column. This leans with the rows, so it is **not** the same
    /// as the column in a rectangular layout. See [Self::column] for that.
    pub fn x(self) -> i32 {
        self.x
    }

    /// The row of this cell. Row 0 is the bottom of the grid.
    pub fn y(self) -> i32 {
        self.y
    }

    /// Convert a column and row index in a rectangular grid layout to an
    /// axial coordinate. Indices start at the bottom left of the layout.
    ///
    /// The row is halved with floor division, so negative rows differ from
    /// truncating division: `from_grid_indices(0, -1)` is `(1, -1)`, not
    /// `(0, -1)`. Rows `>= 0` are the same either way.
    pub fn from_grid_indices(column: i32, row: i32) -> Self {
        match column.checked_sub(row.div_euclid(2)) {
            Some(x) => Self::new(x, row),
            None => panic!(
                "axial coordinate overflow: grid index [{}, {}]",
                column, row
            ),
        }
    }

    /// The column index of this cell in a rectangular grid layout. This is
    /// always the inverse of [Self::from_grid_indices]. Panics if the column
    /// doesn't fit in an `i32`; see [Self::checked_grid_index].
    pub fn column(self) -> i32 {
        match self.checked_column() {
            Some(column) => column,
            None => panic!("axial coordinate overflow: column of {}", self),
        }
    }

    fn checked_column(self) -> Option<i32> {
        self.x.checked_add(self.y.div_euclid(2))
    }

    /// The `(column, row)` index of this cell in a rectangular grid layout
    pub fn to_grid_index(self) -> GridIndex {
        GridIndex::new(self.column(), self.y)
    }

    /// Like [Self::to_grid_index], but `None` for the handful of coordinates
    /// near the edge of the `i32` range whose column can't be represented
    pub fn checked_grid_index(self) -> Option<GridIndex> {
        Some(GridIndex::new(self.checked_column()?, self.y))
    }

    /// Get the coordinate one step away in the given direction
    pub fn neighbour(self, direction: AxialDirection) -> Self {
        self + direction.offset()
    }

    /// Get an iterator of all the coordinates directly adjacent to this one.
    /// The iterator always contains exactly 6 values, in the order of
    /// [AxialDirection::CLOCKWISE].
    pub fn neighbours(self) -> impl Iterator<Item = AxialCoordinate> {
        AxialDirection::iter().map(move |dir| self.neighbour(dir))
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(Self::new(self.x.checked_sub(rhs.x)?, self.y.checked_sub(rhs.y)?))
    }

    pub fn checked_mul(self, scale: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_mul(scale)?, self.y.checked_mul(scale)?))
    }

    /// Component-wise division, truncating toward zero. `None` on division by
    /// zero or overflow.
    pub fn checked_div(self, scale: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_div(scale)?, self.y.checked_div(scale)?))
    }
}

impl ops::Add for AxialCoordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match self.checked_add(rhs) {
            Some(sum) => sum,
            None => panic!("axial coordinate overflow: {} + {}", self, rhs),
        }
    }
}

impl ops::Sub for AxialCoordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        match self.checked_sub(rhs) {
            Some(difference) => difference,
            None => panic!("axial coordinate overflow: {} - {}", self, rhs),
        }
    }
}

impl ops::Neg for AxialCoordinate {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl ops::Mul<i32> for AxialCoordinate {
    type Output = Self;

    fn mul(self, scale: i32) -> Self {
        match self.checked_mul(scale) {
            Some(product) => product,
            None => panic!("axial coordinate overflow: {} * {}", self, scale),
        }
    }
}

impl ops::Div<i32> for AxialCoordinate {
    type Output = Self;

    fn div(self, scale: i32) -> Self {
        match self.checked_div(scale) {
            Some(quotient) => quotient,
            None => panic!("invalid axial coordinate division: {} / {}", self, scale),
        }
    }
}

/// The `(column, row)` index of a cell within a rectangular grid layout. This
/// is what [GridGeometry::point_to_cell](crate::GridGeometry::point_to_cell)
/// produces, since that algorithm works on rectangular buckets. Indices may be
/// negative or beyond the edge of any particular grid.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}]", column, row)]
pub struct GridIndex {
    pub column: i32,
    pub row: i32,
}

impl GridIndex {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Is this row shifted right by half a cell? Uses the non-negative
    /// remainder, so row `-1` is odd.
    pub fn is_odd_row(self) -> bool {
        self.row.rem_euclid(2) == 1
    }

    pub fn to_axial(self) -> AxialCoordinate {
        AxialCoordinate::from_grid_indices(self.column, self.row)
    }
}

impl From<AxialCoordinate> for GridIndex {
    fn from(coordinate: AxialCoordinate) -> Self {
        coordinate.to_grid_index()
    }
}

impl From<GridIndex> for AxialCoordinate {
    fn from(index: GridIndex) -> Self {
        index.to_axial()
    }
}

/// The 6 directions in which cells line up side-to-side. Each direction
/// points from the centre of a cell to the centre of one of its neighbours
/// (or equivalently, to the midpoint of one of its sides).
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AxialDirection {
    UpRight,
    Right,
    DownRight,
    DownLeft,
    Left,
    UpLeft,
}

impl AxialDirection {
    /// All directions, clockwise starting from up-right. This is also the
    /// iteration order of the enum.
    pub const CLOCKWISE: &'static [Self] = &[
        Self::UpRight,
        Self::Right,
        Self::DownRight,
        Self::DownLeft,
        Self::Left,
        Self::UpLeft,
    ];

    /// Get an offset that would move a coordinate one cell in this direction
    pub fn offset(self) -> AxialCoordinate {
        match self {
            Self::UpRight => AxialCoordinate::new(0, 1),
            Self::Right => AxialCoordinate::new(1, 0),
            Self::DownRight => AxialCoordinate::new(1, -1),
            Self::DownLeft => AxialCoordinate::new(0, -1),
            Self::Left => AxialCoordinate::new(-1, 0),
            Self::UpLeft => AxialCoordinate::new(-1, 1),
        }
    }

    /// Get the index of this direction within [Self::CLOCKWISE]
    pub fn clockwise_index(self) -> usize {
        self as usize
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        let len = Self::CLOCKWISE.len();
        Self::CLOCKWISE[(self.clockwise_index() + len / 2) % len]
    }
}
