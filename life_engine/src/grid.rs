// grid.rs - Life grid with an always-dead padding ring

use rand::Rng;

/// Device units per cell: a 10-unit filled square plus a 2-unit gutter.
pub const CELL_SIZE: i32 = 12;
/// Side of the filled square inside a cell.
pub const CELL_FILL: i32 = 10;

/// Logical grid dimension for a client dimension in device units.
/// The +1 leaves one row/column of slack before the next resize
/// forces a reallocation.
pub fn cells_for_client(px: i32) -> usize {
    (px.max(0) / CELL_SIZE + 1) as usize
}

/// Live/dead cell matrix. Storage is a flat buffer of
/// `(cell_width + 2) * (cell_height + 2)` cells; the outer ring is
/// never written by any operation, so neighbor counting at the edges
/// needs no bounds checks.
pub struct Grid {
    cell_width: usize,
    cell_height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(cell_width: usize, cell_height: usize) -> Self {
        Self {
            cell_width,
            cell_height,
            cells: vec![false; (cell_width + 2) * (cell_height + 2)],
        }
    }

    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    pub fn cell_height(&self) -> usize {
        self.cell_height
    }

    // Valid for x in -1..=cell_width and y in -1..=cell_height.
    fn idx(&self, x: isize, y: isize) -> usize {
        debug_assert!(x >= -1 && x <= self.cell_width as isize);
        debug_assert!(y >= -1 && y <= self.cell_height as isize);
        ((y + 1) * (self.cell_width as isize + 2) + (x + 1)) as usize
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.idx(x as isize, y as isize)]
    }

    /// Flips the cell at `(x, y)`. Out-of-range coordinates are
    /// rejected and leave the grid untouched.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        if x >= self.cell_width || y >= self.cell_height {
            return false;
        }
        let i = self.idx(x as isize, y as isize);
        self.cells[i] = !self.cells[i];
        true
    }

    /// Advances the whole grid by one generation.
    ///
    /// The next generation is computed into a fresh buffer so no cell
    /// observes another cell's updated state. A live cell survives with
    /// 3 or 4 live neighbors; a dead cell births with exactly 3.
    pub fn step(&mut self) {
        let mut next = vec![false; self.cells.len()];
        for y in 0..self.cell_height as isize {
            for x in 0..self.cell_width as isize {
                let mut live = 0;
                for j in y - 1..=y + 1 {
                    for i in x - 1..=x + 1 {
                        if (i, j) != (x, y) && self.cells[self.idx(i, j)] {
                            live += 1;
                        }
                    }
                }
                next[self.idx(x, y)] = if self.cells[self.idx(x, y)] {
                    live == 3 || live == 4
                } else {
                    live == 3
                };
            }
        }
        self.cells = next;
    }

    /// Replaces the grid with one of the given logical dimensions,
    /// carrying over the overlapping region. Newly exposed cells start
    /// dead; the padding ring is never copied into.
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        let mut next = vec![false; (new_width + 2) * (new_height + 2)];
        let copy_w = self.cell_width.min(new_width);
        let copy_h = self.cell_height.min(new_height);
        for y in 0..copy_h {
            for x in 0..copy_w {
                next[(y + 1) * (new_width + 2) + (x + 1)] = self.get(x, y);
            }
        }
        self.cells = next;
        self.cell_width = new_width;
        self.cell_height = new_height;
    }

    /// Each logical cell becomes live independently with the given
    /// probability.
    pub fn randomize(&mut self, probability: f64) {
        let mut rng = rand::thread_rng();
        for y in 0..self.cell_height {
            for x in 0..self.cell_width {
                let alive = rng.gen_bool(probability);
                let i = self.idx(x as isize, y as isize);
                self.cells[i] = alive;
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}
