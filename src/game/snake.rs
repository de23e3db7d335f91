//! Snake entity

use std::collections::VecDeque;

use super::direction::Direction;
use super::grid::{Position, contains_cell};

/// Body the snake starts with and returns to after a crash, head first
pub const START_BODY: [Position; 3] = [
    Position::new(6, 9),
    Position::new(5, 9),
    Position::new(4, 9),
];

pub const START_DIRECTION: Direction = Direction::Right;

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments (head is front, tail is back); never empty
    body: VecDeque<Position>,
    direction: Direction,
    grow_pending: bool,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            body: START_BODY.into_iter().collect(),
            direction: START_DIRECTION,
            grow_pending: false,
        }
    }

    /// Snake over an explicit body, head first. Overlaps are kept; an empty body is `None`.
    pub fn from_body(body: impl IntoIterator<Item = Position>, direction: Direction) -> Option<Self> {
        let body: VecDeque<Position> = body.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self {
            body,
            direction,
            grow_pending: false,
        })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grow_pending(&self) -> bool {
        self.grow_pending
    }

    /// Refuses a reversal and returns false
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    // No bounds or overlap checks here; GameState does those after the move
    pub fn update(&mut self) {
        self.body.push_front(self.head().step(self.direction));
        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop_back();
        }
    }

    pub fn request_growth(&mut self) {
        self.grow_pending = true;
    }

    pub fn head_hits_body(&self) -> bool {
        contains_cell(self.body.iter().skip(1), self.head())
    }

    pub fn reset(&mut self) {
        self.body = START_BODY.into_iter().collect();
        self.direction = START_DIRECTION;
        self.grow_pending = false;
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake() {
        let snake = Snake::new();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 9));
        assert_eq!(snake.direction(), Direction::Right);
        assert!(!snake.grow_pending());
    }

    #[test]
    fn test_update_keeps_length() {
        let mut snake = Snake::new();
        snake.update();
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.body().iter().copied().collect::<Vec<_>>(),
            vec![Position::new(7, 9), Position::new(6, 9), Position::new(5, 9)]
        );
    }

    #[test]
    fn test_growth_is_one_shot() {
        let mut snake = Snake::new();
        snake.request_growth();
        snake.update();
        assert_eq!(snake.len(), 4);
        assert!(!snake.grow_pending());
        assert_eq!(*snake.body().back().unwrap(), Position::new(4, 9));

        snake.update();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_head_follows_direction() {
        let mut snake = Snake::new();
        for dir in [Direction::Down, Direction::Left, Direction::Up, Direction::Right] {
            let before = snake.head();
            assert!(snake.turn(dir));
            snake.update();
            assert_eq!(snake.head(), before.step(dir));
        }
    }

    #[test]
    fn test_reversal_rejected() {
        let mut snake = Snake::new();
        assert!(!snake.turn(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);

        assert!(snake.turn(Direction::Up));
        assert!(!snake.turn(Direction::Down));
        assert_eq!(snake.direction(), Direction::Up);

        // Same heading again is not a reversal
        assert!(snake.turn(Direction::Up));
    }

    #[test]
    fn test_head_hits_body() {
        assert!(!Snake::new().head_hits_body());

        let snake = Snake::from_body(
            [
                Position::new(6, 9),
                Position::new(5, 9),
                Position::new(4, 9),
                Position::new(6, 9),
            ],
            Direction::Right,
        )
        .unwrap();
        assert!(snake.head_hits_body());
    }

    #[test]
    fn test_reset_restores_start() {
        let mut snake = Snake::new();
        snake.turn(Direction::Down);
        snake.request_growth();
        snake.update();
        snake.update();

        snake.reset();
        assert_eq!(snake, Snake::new());
    }

    #[test]
    fn test_empty_body_rejected() {
        assert!(Snake::from_body(Vec::new(), Direction::Up).is_none());
    }
}
