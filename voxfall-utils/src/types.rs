// Lattice types. Keeping the axes named stops row/column mix-ups at call sites.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A point on the voxel lattice.
///
/// `row` and `column` address the planar grid, `levitation` is the vertical
/// stack index with 0 being the ground layer.
///
/// The derived ordering is lexicographic over `(row, column, levitation)`.
/// Renderers draw blocks in ascending order to get correct layering, so any
/// collection of blocks handed out by the world is kept sorted by it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coordinate {
    /// Planar row.
    pub row: i32,
    /// Planar column.
    pub column: i32,
    /// Vertical stack index.
    pub levitation: i32,
}

/// A planar column key, indexing every block stacked at one row/column.
pub type ColumnKey = (i32, i32);

impl Coordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(row: i32, column: i32, levitation: i32) -> Self {
        Self {
            row,
            column,
            levitation,
        }
    }

    /// Returns this coordinate moved by the given deltas.
    #[must_use]
    pub const fn offset(&self, rows: i32, columns: i32, levitation: i32) -> Self {
        Self::new(
            self.row + rows,
            self.column + columns,
            self.levitation + levitation,
        )
    }

    /// The coordinate directly underneath.
    #[must_use]
    pub const fn below(&self) -> Self {
        self.offset(0, 0, -1)
    }

    /// Same row and column, different levitation.
    #[must_use]
    pub const fn with_levitation(&self, levitation: i32) -> Self {
        Self::new(self.row, self.column, levitation)
    }

    /// The planar column this coordinate stands in.
    #[must_use]
    pub const fn column_key(&self) -> ColumnKey {
        (self.row, self.column)
    }

    /// Squared planar distance to `other`. Levitation is ignored.
    #[must_use]
    pub const fn planar_distance_squared(&self, other: &Self) -> i32 {
        let rows = self.row - other.row;
        let columns = self.column - other.column;
        rows * rows + columns * columns
    }

    /// The eight planar neighbours at the same levitation, row by row.
    #[must_use]
    pub fn surrounding(&self) -> [Self; 8] {
        [
            self.offset(-1, -1, 0),
            self.offset(-1, 0, 0),
            self.offset(-1, 1, 0),
            self.offset(0, -1, 0),
            self.offset(0, 1, 0),
            self.offset(1, -1, 0),
            self.offset(1, 0, 0),
            self.offset(1, 1, 0),
        ]
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.column, self.levitation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_row_column_levitation() {
        let mut coordinates = vec![
            Coordinate::new(1, 0, 0),
            Coordinate::new(0, 2, 0),
            Coordinate::new(0, 1, 5),
            Coordinate::new(0, 1, 2),
        ];
        coordinates.sort();

        assert_eq!(
            coordinates,
            vec![
                Coordinate::new(0, 1, 2),
                Coordinate::new(0, 1, 5),
                Coordinate::new(0, 2, 0),
                Coordinate::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_planar_distance_ignores_levitation() {
        let origin = Coordinate::new(5, 5, 0);
        assert_eq!(origin.planar_distance_squared(&Coordinate::new(5, 5, 9)), 0);
        assert_eq!(origin.planar_distance_squared(&Coordinate::new(6, 5, 1)), 1);
        assert_eq!(origin.planar_distance_squared(&Coordinate::new(3, 6, 0)), 5);
    }

    #[test]
    fn test_surrounding_excludes_self() {
        let center = Coordinate::new(2, 2, 1);
        let surrounding = center.surrounding();

        assert!(!surrounding.contains(&center));
        assert!(surrounding.iter().all(|c| c.levitation == 1));
        assert!(
            surrounding
                .iter()
                .all(|c| (c.row - 2).abs() <= 1 && (c.column - 2).abs() <= 1)
        );
    }
}
