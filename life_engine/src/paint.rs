// paint.rs - Pointer-to-cell mapping and drag painting

use crate::grid::{Grid, CELL_FILL, CELL_SIZE};

/// Maps a client-area position to the logical cell under it. Returns
/// `None` when the position falls in a gutter or outside the grid.
pub fn hit_cell(px: i32, py: i32, grid: &Grid) -> Option<(usize, usize)> {
    if px < 0 || py < 0 {
        return None;
    }
    if px % CELL_SIZE >= CELL_FILL || py % CELL_SIZE >= CELL_FILL {
        return None;
    }
    let (x, y) = ((px / CELL_SIZE) as usize, (py / CELL_SIZE) as usize);
    if x < grid.cell_width() && y < grid.cell_height() {
        Some((x, y))
    } else {
        None
    }
}

/// In-progress paint drag. Pointer motion is resampled every ~2 device
/// units along the line from the previous position, and a cell toggles
/// only when a sample enters it from outside any valid cell, so
/// dwelling inside one cell never re-toggles it.
pub struct PaintDrag {
    prev: (f32, f32),
    in_cell: bool,
}

impl PaintDrag {
    /// Starts a drag at the press position. The press itself already
    /// toggled the cell under the pointer, so the drag begins "inside".
    pub fn begin(x: f32, y: f32) -> Self {
        Self {
            prev: (x, y),
            in_cell: true,
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32, grid: &mut Grid) {
        let (dx, dy) = (x - self.prev.0, y - self.prev.1);
        let dist = (dx * dx + dy * dy).sqrt() / 2.0;
        let steps = dist.ceil() as i32;
        if steps > 0 {
            let (step_x, step_y) = (dx / dist, dy / dist);
            let (mut px, mut py) = self.prev;
            for _ in 0..steps {
                px += step_x;
                py += step_y;
                self.sample(px as i32, py as i32, grid);
            }
        }
        self.prev = (x, y);
    }

    fn sample(&mut self, px: i32, py: i32, grid: &mut Grid) {
        match hit_cell(px, py, grid) {
            Some((x, y)) => {
                if !self.in_cell {
                    grid.toggle(x, y);
                    self.in_cell = true;
                }
            }
            None => self.in_cell = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_cell_maps_squares_and_rejects_gutters() {
        let grid = Grid::new(10, 10);
        assert_eq!(hit_cell(0, 0, &grid), Some((0, 0)));
        assert_eq!(hit_cell(9, 9, &grid), Some((0, 0)));
        assert_eq!(hit_cell(10, 5, &grid), None);
        assert_eq!(hit_cell(5, 11, &grid), None);
        assert_eq!(hit_cell(12, 12, &grid), Some((1, 1)));
        assert_eq!(hit_cell(25, 37, &grid), Some((2, 3)));
    }

    #[test]
    fn hit_cell_rejects_out_of_grid_positions() {
        let grid = Grid::new(10, 10);
        assert_eq!(hit_cell(-3, 5, &grid), None);
        assert_eq!(hit_cell(5, -1, &grid), None);
        // (10, 0) would be the slack column outside the logical grid.
        assert_eq!(hit_cell(120, 0, &grid), None);
    }

    #[test]
    fn dwelling_in_one_cell_does_not_retoggle() {
        let mut grid = Grid::new(10, 10);
        grid.toggle(0, 0);
        let mut drag = PaintDrag::begin(5.0, 5.0);
        drag.move_to(8.0, 5.0, &mut grid);
        drag.move_to(6.0, 7.0, &mut grid);
        assert!(grid.get(0, 0));
    }

    #[test]
    fn crossing_a_gutter_toggles_the_next_cell_once() {
        let mut grid = Grid::new(10, 10);
        grid.toggle(0, 0);
        let mut drag = PaintDrag::begin(5.0, 5.0);
        // Straight horizontal drag across the gutter into cell (1, 0).
        drag.move_to(17.0, 5.0, &mut grid);
        assert!(grid.get(1, 0));
        // Keep moving inside (1, 0): no further toggles.
        drag.move_to(20.0, 5.0, &mut grid);
        assert!(grid.get(1, 0));
    }

    #[test]
    fn long_drag_toggles_each_cell_on_the_way() {
        let mut grid = Grid::new(10, 10);
        grid.toggle(0, 0);
        let mut drag = PaintDrag::begin(5.0, 5.0);
        drag.move_to(53.0, 5.0, &mut grid);
        for x in 0..=4 {
            assert!(grid.get(x, 0), "cell ({x}, 0) should be live");
        }
        assert!(!grid.get(5, 0));
    }

    #[test]
    fn leaving_the_grid_resets_the_entry_state() {
        let mut grid = Grid::new(10, 10);
        grid.toggle(0, 0);
        let mut drag = PaintDrag::begin(5.0, 5.0);
        // Out past the left edge, then back into the same cell.
        drag.move_to(-6.0, 5.0, &mut grid);
        drag.move_to(5.0, 5.0, &mut grid);
        assert!(!grid.get(0, 0));
    }

    #[test]
    fn zero_length_move_is_a_no_op() {
        let mut grid = Grid::new(10, 10);
        let mut drag = PaintDrag::begin(5.0, 5.0);
        drag.move_to(5.0, 5.0, &mut grid);
        let mut any = false;
        for y in 0..10 {
            for x in 0..10 {
                any |= grid.get(x, y);
            }
        }
        assert!(!any);
    }
}
