//! Screen flow: intro, then play, driven one frame at a time

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::game::{CueSink, Direction, GameState, Grid, Tick, TickTimer};
use crate::highscore::ScoreStore;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Playing,
}

/// Player intent for one frame, already decoded from keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Start,
    Quit,
    Steer(Direction),
}

/// Whether the main loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns the game, its tick timer and the score store for the life of the process
pub struct Session<S> {
    screen: Screen,
    state: GameState,
    timer: TickTimer,
    store: S,
    saved_high_score: u32,
}

impl<S: ScoreStore> Session<S> {
    /// Load the stored high score and set up a new game behind the intro screen
    pub fn start(grid: Grid, tick_interval: f64, store: S, rng: StdRng) -> Self {
        let high_score = store.load();
        info!(high_score, "Loaded high score");
        Self::new(GameState::new(grid, high_score, rng), TickTimer::new(tick_interval), store)
    }

    pub fn new(state: GameState, timer: TickTimer, store: S) -> Self {
        Self {
            screen: Screen::Intro,
            saved_high_score: state.high_score(),
            state,
            timer,
            store,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one frame at time `now` (seconds): tick if due, apply inputs in
    /// order, then persist a new high score.
    pub fn frame(&mut self, now: f64, inputs: &[Input], cues: &mut impl CueSink) -> Flow {
        let flow = match self.screen {
            Screen::Intro => self.intro_frame(inputs),
            Screen::Playing => self.play_frame(now, inputs, cues),
        };
        self.persist_high_score();
        flow
    }

    fn intro_frame(&mut self, inputs: &[Input]) -> Flow {
        for input in inputs {
            match input {
                Input::Start => {
                    debug!("Leaving intro screen");
                    self.screen = Screen::Playing;
                    break;
                }
                Input::Quit => return Flow::Exit,
                Input::Steer(_) => {}
            }
        }
        Flow::Continue
    }

    fn play_frame(&mut self, now: f64, inputs: &[Input], cues: &mut impl CueSink) -> Flow {
        if self.timer.triggered(now) {
            if let Tick::Crashed(collision) = self.state.update(cues) {
                debug!(?collision, "Round over, waiting for a direction key");
            }
        }

        for input in inputs {
            match *input {
                Input::Steer(direction) => {
                    if self.state.change_direction(direction) {
                        self.state.resume();
                    }
                }
                Input::Quit => return Flow::Exit,
                Input::Start => {}
            }
        }
        Flow::Continue
    }

    fn persist_high_score(&mut self) {
        let high_score = self.state.high_score();
        if high_score != self.saved_high_score {
            self.store.save(high_score);
            self.saved_high_score = high_score;
        }
    }
}
