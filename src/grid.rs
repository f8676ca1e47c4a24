//! A fixed-size square board of cell states using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Cells are
//! addressed by [`Coordinate`] with `x` as the column and `y` as the row.
//! Every access is bounds checked; out-of-range coordinates are reported as
//! [`GridError::OutOfBounds`] instead of panicking.

use core::fmt;

use crate::common::CellStatus;

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside `[0, N)` on either axis.
    OutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { x, y } => write!(f, "OutOfBounds: x={}, y={}", x, y),
        }
    }
}

/// A board position. Signed so that untrusted input and neighbor offsets can
/// be represented before they are bounds checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by `(dx, dy)`, or `None` if either axis overflows.
    /// The result may be off the board.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The eight compass offsets, as `(dx, dy)`.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),  // N
    (0, 1),   // S
    (1, 0),   // E
    (-1, 0),  // W
    (1, -1),  // NE
    (-1, -1), // NW
    (1, 1),   // SE
    (-1, 1),  // SW
];

/// An `N×N` matrix of [`CellStatus`], every cell `Empty` on creation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<const N: usize> {
    cells: [[CellStatus; N]; N],
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Grid<N> {
    /// Create a new grid with every cell `Empty`.
    pub const fn new() -> Self {
        Grid {
            cells: [[CellStatus::Empty; N]; N],
        }
    }

    /// Side length of the grid.
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns true if `coord` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        Self::in_bounds(coord)
    }

    #[inline]
    fn in_bounds(coord: Coordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < N && (coord.y as usize) < N
    }

    #[inline]
    fn check_bounds(coord: Coordinate) -> Result<(usize, usize), GridError> {
        if Self::in_bounds(coord) {
            Ok((coord.x as usize, coord.y as usize))
        } else {
            Err(GridError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            })
        }
    }

    /// Gets the cell at `coord`.
    pub fn get(&self, coord: Coordinate) -> Result<CellStatus, GridError> {
        let (x, y) = Self::check_bounds(coord)?;
        Ok(self.cells[y][x])
    }

    /// Writes `status` at `coord`. Out-of-bounds writes are refused and leave
    /// the grid untouched.
    pub fn set(&mut self, coord: Coordinate, status: CellStatus) -> Result<(), GridError> {
        let (x, y) = Self::check_bounds(coord)?;
        self.cells[y][x] = status;
        Ok(())
    }

    /// The up-to-8 in-bounds neighbors of `coord`, each with its current value.
    pub fn neighbors(&self, coord: Coordinate) -> impl Iterator<Item = (Coordinate, CellStatus)> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dx, dy)| {
            let n = coord.offset(dx, dy)?;
            self.get(n).ok().map(|status| (n, status))
        })
    }

    /// Iterates over every coordinate of the grid in row-major order.
    pub fn coordinates() -> impl Iterator<Item = Coordinate> {
        (0..N as i32).flat_map(|y| (0..N as i32).map(move |x| Coordinate::new(x, y)))
    }

    /// Iterates over every cell with its coordinate in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, CellStatus)> + '_ {
        Self::coordinates().map(move |c| (c, self.cells[c.y as usize][c.x as usize]))
    }

    /// Number of cells currently holding `status`.
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&s| s == status)
            .count()
    }
}

impl<const N: usize> fmt::Debug for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}> {{", N)?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = match cell {
                    CellStatus::Empty => '.',
                    CellStatus::Ship => 'S',
                    CellStatus::Miss => 'o',
                    CellStatus::Shot => 'x',
                    CellStatus::Killed => '#',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
