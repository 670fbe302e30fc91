/// A toroidal Game-of-Life grid.
///
/// Cell state lives in two parallel row-major buffers: `cells` is the
/// authoritative generation, `scratch` is write-only while a step is in
/// flight and is fully overwritten before it is promoted.
#[derive(Clone)]
pub struct Grid {
    width: usize,
    height: usize,

    cells: Vec<bool>,
    scratch: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
            scratch: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// Flip a single cell of the current generation. The scratch buffer is not
    /// touched; it is rewritten in full by the next `step`.
    pub fn toggle(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.cells[idx] = !self.cells[idx];
    }

    /// Kill every cell, in both buffers.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.scratch.fill(false);
    }

    /// Count the live cells among the 8 neighbors of `(x, y)`, wrapping
    /// around the grid edges.
    ///
    /// All 8 offsets are probed regardless of grid size, so on a 1-wide axis
    /// a cell wraps to itself and is counted through the wrap.
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let nx = (x as i32 + dx).rem_euclid(self.width as i32) as usize;
                let ny = (y as i32 + dy).rem_euclid(self.height as i32) as usize;

                if self.is_alive(nx, ny) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Advance the whole grid by one generation.
    ///
    /// Every next state is computed into `scratch` from the current buffer
    /// only, then promoted in one copy. Updating in place would let later
    /// cells see already-updated neighbors within the same generation.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let n = self.live_neighbors(x, y);
                let idx = self.index(x, y);

                self.scratch[idx] = n == 3 || (self.cells[idx] && n == 2);
            }
        }

        self.cells.copy_from_slice(&self.scratch);
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::Grid;

    #[test]
    fn rule_exhaustive_3x3() {
        // On a 3x3 torus the 8 neighbors of the center are exactly the 8
        // other cells, so every neighborhood configuration is reachable.
        for bits in 0u32..512 {
            let mut grid = Grid::new(3, 3);
            for i in 0..9 {
                grid.set(i % 3, i / 3, bits & (1 << i) != 0);
            }

            let alive = bits & (1 << 4) != 0;
            let n = (bits & !(1 << 4)).count_ones();
            let expect = n == 3 || (alive && n == 2);

            grid.step();

            assert_eq!(grid.is_alive(1, 1), expect, "bits {bits:#011b}");
        }
    }

    #[test]
    fn wraps_around_corners() {
        let mut grid = Grid::new(8, 6);
        grid.set(7, 5, true);

        assert_eq!(grid.live_neighbors(0, 0), 1);
    }

    #[test]
    fn wraps_around_edges() {
        let mut grid = Grid::new(8, 6);
        grid.set(7, 2, true);
        grid.set(3, 5, true);

        assert_eq!(grid.live_neighbors(0, 2), 1);
        assert_eq!(grid.live_neighbors(3, 0), 1);
    }

    #[test]
    fn blinker_oscillates() {
        let mut grid = Grid::new(8, 6);
        grid.set(2, 2, true);
        grid.set(3, 2, true);
        grid.set(4, 2, true);

        grid.step();

        let vertical = [(3, 1), (3, 2), (3, 3)];
        for y in 0..6 {
            for x in 0..8 {
                assert_eq!(grid.is_alive(x, y), vertical.contains(&(x, y)));
            }
        }

        grid.step();

        let horizontal = [(2, 2), (3, 2), (4, 2)];
        for y in 0..6 {
            for x in 0..8 {
                assert_eq!(grid.is_alive(x, y), horizontal.contains(&(x, y)));
            }
        }
    }

    #[test]
    fn step_reads_only_the_previous_generation() {
        // Compare against next states derived cell-by-cell from a pre-step
        // snapshot, walking the cells in reverse. Any in-place update in
        // `step` would disagree with the snapshot for some cell.
        let mut grid = Grid::new(5, 5);
        for (x, y) in [(1, 1), (2, 1), (3, 1), (3, 2), (2, 3)] {
            grid.set(x, y, true);
        }

        let before = grid.clone();
        grid.step();

        for y in (0..5).rev() {
            for x in (0..5).rev() {
                let n = before.live_neighbors(x, y);
                let expect = n == 3 || (before.is_alive(x, y) && n == 2);

                assert_eq!(grid.is_alive(x, y), expect, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn degenerate_1x1_cell_counts_itself() {
        let mut grid = Grid::new(1, 1);
        grid.set(0, 0, true);

        // All 8 probes wrap back to the only cell.
        assert_eq!(grid.live_neighbors(0, 0), 8);

        grid.step();
        assert!(!grid.is_alive(0, 0));
    }

    #[test]
    fn clear_then_step_stays_dead() {
        let mut grid = Grid::new(8, 6);
        for x in 0..8 {
            grid.set(x, 3, true);
        }

        grid.clear();
        grid.step();

        for y in 0..6 {
            for x in 0..8 {
                assert!(!grid.is_alive(x, y));
            }
        }
    }

    #[test]
    fn toggle_flips() {
        let mut grid = Grid::new(4, 4);

        grid.toggle(2, 1);
        assert!(grid.is_alive(2, 1));

        grid.toggle(2, 1);
        assert!(!grid.is_alive(2, 1));
    }

    proptest! {
        #[test]
        fn step_applies_the_rule_everywhere(
            (w, h, cells) in (1usize..8, 1usize..8).prop_flat_map(|(w, h)| {
                proptest::collection::vec(any::<bool>(), w * h)
                    .prop_map(move |cells| (w, h, cells))
            })
        ) {
            let mut grid = Grid::new(w, h);
            for (i, &alive) in cells.iter().enumerate() {
                grid.set(i % w, i / w, alive);
            }

            let before = grid.clone();
            grid.step();

            for y in 0..h {
                for x in 0..w {
                    let n = before.live_neighbors(x, y);
                    let expect = n == 3 || (before.is_alive(x, y) && n == 2);

                    prop_assert_eq!(grid.is_alive(x, y), expect);
                }
            }
        }
    }
}
