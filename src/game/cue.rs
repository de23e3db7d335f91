//! Sound cues requested by the game core

/// A fire-and-forget sound request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// The snake advanced one cell
    Move,
    /// Food was eaten
    Eat,
    /// The snake crashed into a wall or itself
    Wall,
}

/// Receiver for cues; playback lives outside the core
pub trait CueSink {
    fn play(&mut self, cue: Cue);
}

impl CueSink for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}
