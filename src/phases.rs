//! Phase policies built from per-player board signals.

use alloc::vec::Vec;

use crate::session::SessionPhase;
use crate::signal::{combine_all, combine_any, Derived, Signal};

/// A player's board as seen by the setup phase.
pub trait PlayerBoard {
    /// Emits `true` once the board is set up.
    fn ready(&self) -> Signal<bool>;
}

/// A player's board as seen by the battle phase.
pub trait PlayerPhaseState: PlayerBoard {
    /// Emits `true` once the board has lost.
    fn defeated(&self) -> Signal<bool>;
}

/// Setup phase: complete while every board is ready.
pub struct StartPhase {
    completion: Derived<bool>,
}

impl StartPhase {
    pub fn new(boards: &[&dyn PlayerBoard]) -> Self {
        let ready: Vec<Signal<bool>> = boards.iter().map(|board| board.ready()).collect();
        Self {
            completion: combine_all(&ready),
        }
    }
}

impl SessionPhase for StartPhase {
    fn completion(&self) -> Signal<bool> {
        self.completion.signal().clone()
    }
}

/// Battle phase: complete as soon as any board is defeated.
pub struct BattlePhase {
    completion: Derived<bool>,
}

impl BattlePhase {
    pub fn new(boards: &[&dyn PlayerPhaseState]) -> Self {
        let defeated: Vec<Signal<bool>> =
            boards.iter().map(|board| board.defeated()).collect();
        Self {
            completion: combine_any(&defeated),
        }
    }
}

impl SessionPhase for BattlePhase {
    fn completion(&self) -> Signal<bool> {
        self.completion.signal().clone()
    }
}
