//! Board geometry: cells, positions and the pixel mapping

use super::direction::Direction;

/// A cell on the board. Valid cells satisfy `0 <= x, y < cell_count`;
/// a head that just left the board sits one step outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Square board of `cell_count` x `cell_count` cells drawn `offset` pixels in
/// from the window edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cell_size: i32,
    cell_count: i32,
    offset: i32,
}

impl Grid {
    pub const fn new(cell_size: i32, cell_count: i32, offset: i32) -> Self {
        Self {
            cell_size,
            cell_count,
            offset,
        }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn cell_count(&self) -> i32 {
        self.cell_count
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn total_cells(&self) -> usize {
        (self.cell_count * self.cell_count) as usize
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.cell_count).contains(&pos.x) && (0..self.cell_count).contains(&pos.y)
    }

    pub fn cell_origin(&self, pos: Position) -> (f32, f32) {
        (
            (self.offset + pos.x * self.cell_size) as f32,
            (self.offset + pos.y * self.cell_size) as f32,
        )
    }

    pub fn board_extent(&self) -> f32 {
        (self.cell_size * self.cell_count) as f32
    }

    pub fn window_size(&self) -> (f32, f32) {
        let side = (2 * self.offset) as f32 + self.board_extent();
        (side, side)
    }

    // row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let n = self.cell_count;
        (0..n).flat_map(move |y| (0..n).map(move |x| Position::new(x, y)))
    }
}

/// Linear scan, O(n) per call.
pub fn contains_cell<'a>(cells: impl IntoIterator<Item = &'a Position>, target: Position) -> bool {
    cells.into_iter().any(|cell| *cell == target)
}
