//! The working grid passed between pipeline stages.
//!
//! A flat row-major buffer of [`Cell`]s; `(x, y)` lives at `y * width + x`.
//! Stages take the grid by value and hand back a new one, so no two stages
//! ever hold it at once.

use std::fmt;
use std::str::FromStr;

use crate::GridParseError;

/// State of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Floor,
}

impl Cell {
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    pub fn is_floor(self) -> bool {
        self == Cell::Floor
    }

    fn to_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => '.',
        }
    }
}

/// Fixed-size wall/floor grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell set to `cell`
    pub fn filled(width: u32, height: u32, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width as usize * height as usize],
        }
    }

    /// Create a grid from a row-major cell buffer.
    ///
    /// Returns `None` if `cells` does not hold exactly `width * height` cells.
    pub fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Cell at `(x, y)`. Panics if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Cell at a signed coordinate, `None` outside the grid
    #[inline]
    pub fn get_checked(&self, x: i64, y: i64) -> Option<Cell> {
        if self.in_bounds(x, y) {
            Some(self.cells[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Set the cell at `(x, y)`. Panics if out of bounds.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    pub fn is_border(&self, x: u32, y: u32) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    /// Force every border cell to [`Cell::Wall`]
    pub fn enforce_border_walls(&mut self) {
        let (w, h) = (self.width, self.height);
        if w == 0 || h == 0 {
            return;
        }
        for x in 0..w {
            self.set(x, 0, Cell::Wall);
            self.set(x, h - 1, Cell::Wall);
        }
        for y in 0..h {
            self.set(0, y, Cell::Wall);
            self.set(w - 1, y, Cell::Wall);
        }
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn floor_count(&self) -> usize {
        self.count(Cell::Floor)
    }

    /// `true` when no floor cell remains
    pub fn is_all_wall(&self) -> bool {
        self.cells.iter().all(|c| c.is_wall())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1) as usize) {
            let line: String = row.iter().map(|c| c.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parse rows of `#` (wall) and `.` (floor). Blank lines and surrounding
    /// whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(GridParseError::Empty);
        };
        let width = first.chars().count();

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row_idx, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridParseError::Ragged {
                    row: row_idx,
                    expected: width,
                    found,
                });
            }
            for c in row.chars() {
                cells.push(match c {
                    '#' => Cell::Wall,
                    '.' => Cell::Floor,
                    other => return Err(GridParseError::UnknownCell(other)),
                });
            }
        }

        Ok(Self {
            width: width as u32,
            height: rows.len() as u32,
            cells,
        })
    }
}
