//! Food entity - spawns on a random free cell

use std::collections::VecDeque;

use rand::Rng;

use super::grid::{Grid, Position, contains_cell};

/// Random draws per board cell before falling back to a scan
const ATTEMPTS_PER_CELL: usize = 4;

/// The single piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Food on a random cell outside `occupied`
    pub fn new<R: Rng + ?Sized>(grid: &Grid, occupied: &VecDeque<Position>, rng: &mut R) -> Self {
        let mut food = Self::at(Position::new(0, 0));
        food.place_randomly(grid, occupied, rng);
        food
    }

    /// Food at a fixed cell
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move to a uniformly random cell not in `occupied`.
    ///
    /// Sampling is bounded; once the budget runs out the first free cell in
    /// row order is taken. Returns `false` and stays put when no cell is free.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        occupied: &VecDeque<Position>,
        rng: &mut R,
    ) -> bool {
        let n = grid.cell_count();
        for _ in 0..grid.total_cells() * ATTEMPTS_PER_CELL {
            let cell = Position::new(rng.gen_range(0..n), rng.gen_range(0..n));
            if !contains_cell(occupied, cell) {
                self.position = cell;
                return true;
            }
        }

        match grid.cells().find(|cell| !contains_cell(occupied, *cell)) {
            Some(cell) => {
                self.position = cell;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_placement_avoids_occupied() {
        let grid = Grid::new(30, 18, 75);
        let occupied: VecDeque<Position> =
            [Position::new(6, 9), Position::new(5, 9), Position::new(4, 9)].into();
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::at(Position::new(0, 0));

        for _ in 0..500 {
            assert!(food.place_randomly(&grid, &occupied, &mut rng));
            assert!(grid.contains(food.position()));
            assert!(!contains_cell(&occupied, food.position()));
        }
    }

    #[test]
    fn test_last_free_cell_is_found() {
        let grid = Grid::new(10, 10, 0);
        let free = Position::new(3, 7);
        let occupied: VecDeque<Position> = grid.cells().filter(|cell| *cell != free).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let food = Food::new(&grid, &occupied, &mut rng);
        assert_eq!(food.position(), free);
    }

    #[test]
    fn test_full_board_leaves_food_in_place() {
        let grid = Grid::new(10, 10, 0);
        let occupied: VecDeque<Position> = grid.cells().collect();
        let mut rng = StdRng::seed_from_u64(1);
        let mut food = Food::at(Position::new(2, 2));

        assert!(!food.place_randomly(&grid, &occupied, &mut rng));
        assert_eq!(food.position(), Position::new(2, 2));
    }
}
