//! Matrix module - fixed-size 2D grids of cell values
//!
//! Used both for the arena and for piece shapes. Storage is a flat row-major
//! vector (`y * width + x`), rows outer, so every row has the same length.

use crate::types::{Cell, RotationDir, EMPTY};

/// Rectangular grid of cell values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Matrix {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Matrix {
    /// Create a `width x height` matrix filled with empty cells
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// The 0x0 matrix
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same length.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), width, "row {} has length {}, expected {}", y, row.len(), width);
            cells.extend_from_slice(row);
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Copy out as a vector of rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// True for a matrix with no cells (e.g. an unknown piece)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Cell at `(x, y)`, or `None` outside the matrix
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write a cell. Returns false if `(x, y)` is outside the matrix.
    pub fn set(&mut self, x: i32, y: i32, value: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Row `y` as a slice
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = y * self.width;
        &mut self.cells[start..start + self.width]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks_exact(0) panics, and a zero-width matrix has no cells anyway.
        let chunk = self.width.max(1);
        self.cells.chunks_exact(chunk)
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate `(x, y, value)` for every non-empty cell
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != EMPTY)
            .map(move |(i, &v)| ((i % width) as i32, (i / width) as i32, v))
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: Cell) {
        self.cells.fill(value);
    }

    /// Transposed copy (`width` and `height` swap)
    pub fn transposed(&self) -> Matrix {
        let mut out = Matrix::new(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                out.cells[x * out.width + y] = self.cells[y * self.width + x];
            }
        }
        out
    }

    /// Transpose in place.
    ///
    /// Square matrices swap `m[y][x]` with `m[x][y]` for `x < y`; anything else
    /// is replaced by [`Matrix::transposed`].
    pub fn transpose(&mut self) {
        if !self.is_square() {
            *self = self.transposed();
            return;
        }
        let n = self.width;
        for y in 0..n {
            for x in 0..y {
                self.cells.swap(y * n + x, x * n + y);
            }
        }
    }

    /// Reverse the cells of every row (horizontal mirror)
    pub fn reverse_rows(&mut self) {
        if self.width == 0 {
            return;
        }
        for row in self.cells.chunks_exact_mut(self.width) {
            row.reverse();
        }
    }

    /// Reverse the order of the rows (vertical mirror)
    pub fn reverse_row_order(&mut self) {
        let (w, h) = (self.width, self.height);
        for y in 0..h / 2 {
            let (top, bottom) = self.cells.split_at_mut((h - 1 - y) * w);
            top[y * w..(y + 1) * w].swap_with_slice(&mut bottom[..w]);
        }
    }

    /// Rotated copy, for any shape. The result is `height x width`.
    pub fn rotated(&self, dir: RotationDir) -> Matrix {
        let (w, h) = (self.width, self.height);
        let mut out = Matrix::new(h, w);
        for y in 0..h {
            for x in 0..w {
                let v = self.cells[y * w + x];
                let (nx, ny) = match dir {
                    RotationDir::Clockwise => (h - 1 - y, x),
                    RotationDir::CounterClockwise => (y, w - 1 - x),
                };
                out.cells[ny * out.width + nx] = v;
            }
        }
        out
    }

    /// Rotate 90° in place.
    ///
    /// Square matrices are transposed in place and then mirrored: each row is
    /// reversed for clockwise, the row order is reversed for counter-clockwise.
    /// Rectangular matrices go through [`Matrix::rotated`].
    pub fn rotate(&mut self, dir: RotationDir) {
        if !self.is_square() {
            *self = self.rotated(dir);
            return;
        }
        self.transpose();
        match dir {
            RotationDir::Clockwise => self.reverse_rows(),
            RotationDir::CounterClockwise => self.reverse_row_order(),
        }
    }
}
