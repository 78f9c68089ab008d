// src/cave/grid.rs

use std::fmt;

use crate::cave::Cell;
use crate::error::{CaveError, Result};

/// Relative positions of the 8-connected Moore neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size 2D array of cells.
///
/// Storage is column-major (`x` outer, `y` inner) to match the scan order
/// every operation on the grid uses. Dimensions never change once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell `Dead`.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Cell::Dead)
    }

    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width * height],
        }
    }

    /// Builds a grid from text rows, one line per `y`, one glyph per `x`.
    ///
    /// Glyphs are those of [`Cell::glyph`]. Blank lines and surrounding
    /// whitespace are ignored.
    ///
    /// ```
    /// use cave_gen::cave::{Cell, Grid};
    ///
    /// let grid = Grid::from_ascii("##\n.@").unwrap();
    /// assert_eq!(grid.get(1, 1).unwrap(), Cell::Player);
    /// ```
    pub fn from_ascii(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        let mut grid = Grid::new(width, height);

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(CaveError::MalformedGrid(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, glyph) in row.chars().enumerate() {
                let cell = match glyph {
                    '.' => Cell::Dead,
                    '#' => Cell::Alive,
                    '$' => Cell::Treasure,
                    '@' => Cell::Player,
                    other => {
                        return Err(CaveError::MalformedGrid(format!(
                            "unknown glyph '{}' at ({}, {})",
                            other, x, y
                        )))
                    }
                };
                grid.put(x, y, cell);
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Reads the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        self.check_bounds(x, y)?;
        Ok(self.at(x, y))
    }

    /// Overwrites the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<()> {
        self.check_bounds(x, y)?;
        self.put(x, y, cell);
        Ok(())
    }

    /// Counts the alive cells around `(x, y)`, treating positions off the
    /// map as alive. Result is in `0..=8`.
    pub fn count_alive_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 || nx as usize >= self.width || ny as usize >= self.height {
                count += 1;
            } else if self.at(nx as usize, ny as usize).is_alive() {
                count += 1;
            }
        }
        count
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Position of the first `Player` cell in scan order, if any.
    pub fn player_position(&self) -> Option<(usize, usize)> {
        self.positions().find(|&(x, y)| self.at(x, y) == Cell::Player)
    }

    /// All coordinates in scan order: `x` outer, `y` inner.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| (x, y)))
    }

    // Unchecked accessors for callers that iterate within bounds.
    pub(crate) fn at(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    pub(crate) fn put(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(CaveError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.at(x, y).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
