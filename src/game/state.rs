//! Game state and the per-tick update

use rand::rngs::StdRng;
use tracing::{debug, warn};

use super::cue::{Cue, CueSink};
use super::direction::Direction;
use super::food::Food;
use super::grid::Grid;
use super::snake::Snake;

/// What ended the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Tail,
}

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Idle,
    Moved,
    Ate,
    Crashed(Collision),
}

/// Snake, food, scores and the RNG feeding food placement
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Food,
    running: bool,
    score: u32,
    high_score: u32,
    rng: StdRng,
}

impl GameState {
    pub fn new(grid: Grid, high_score: u32, mut rng: StdRng) -> Self {
        let snake = Snake::new();
        let food = Food::new(&grid, snake.body(), &mut rng);
        Self::from_parts(grid, snake, food, high_score, rng)
    }

    pub fn from_parts(grid: Grid, snake: Snake, food: Food, high_score: u32, rng: StdRng) -> Self {
        Self {
            grid,
            snake,
            food,
            running: true,
            score: 0,
            high_score,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn change_direction(&mut self, direction: Direction) -> bool {
        self.snake.turn(direction)
    }

    pub fn resume(&mut self) {
        if !self.running {
            debug!("Game resumed");
        }
        self.running = true;
    }

    /// Advance one tick: move, then check food, walls and tail in that order.
    pub fn update(&mut self, cues: &mut impl CueSink) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        self.snake.update();
        cues.play(Cue::Move);

        let mut tick = Tick::Moved;
        if self.snake.head() == self.food.position() {
            self.eat(cues);
            tick = Tick::Ate;
        }

        if !self.grid.contains(self.snake.head()) {
            self.game_over(Collision::Wall, cues);
            return Tick::Crashed(Collision::Wall);
        }

        if self.snake.head_hits_body() {
            self.game_over(Collision::Tail, cues);
            return Tick::Crashed(Collision::Tail);
        }

        tick
    }

    fn eat(&mut self, cues: &mut impl CueSink) {
        self.relocate_food();
        self.snake.request_growth();
        self.score += 1;
        self.high_score = self.high_score.max(self.score);
        cues.play(Cue::Eat);
        debug!(score = self.score, high_score = self.high_score, "Food eaten");
    }

    fn game_over(&mut self, collision: Collision, cues: &mut impl CueSink) {
        debug!(?collision, score = self.score, "Game over");
        self.snake.reset();
        self.relocate_food();
        self.running = false;
        self.score = 0;
        cues.play(Cue::Wall);
    }

    fn relocate_food(&mut self) {
        if !self.food.place_randomly(&self.grid, self.snake.body(), &mut self.rng) {
            warn!("No free cell left for food");
        }
    }
}
