//! Best score bridge
//!
//! The simulation raises `score.best` itself when a round ends; this wires
//! that up to a [`ScoreStore`]. The store is read once when the bridge is
//! created and written only on `NewBest` events, so a round that ends on a
//! record produces exactly one write.

use crate::persistence::ScoreStore;
use crate::sim::{GameEvent, GameState};

/// Owns the score store for a session
#[derive(Debug)]
pub struct HighScore<S: ScoreStore> {
    store: S,
    best: u32,
}

impl<S: ScoreStore> HighScore<S> {
    /// Read the persisted best once
    pub fn load(store: S) -> Self {
        let best = store.get();
        log::info!("Best score loaded: {}", best);
        Self { store, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Seed a fresh session with the persisted best
    pub fn apply_to(&self, state: &mut GameState) {
        state.score.best = state.score.best.max(self.best);
    }

    /// React to the events of one tick
    ///
    /// Returns true if a new best was written.
    pub fn observe(&mut self, events: &[GameEvent]) -> bool {
        let mut wrote = false;
        for event in events {
            if let GameEvent::NewBest { score } = *event {
                if score > self.best {
                    self.best = score;
                    self.store.set(score);
                    wrote = true;
                }
            }
        }
        wrote
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
