use core::fmt;
use rand::Rng;

use crate::signal::Signal;

/// Unique player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Draw a fresh identifier from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PlayerId(rng.random())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// A participant in a game. Players start active and go inactive when they
/// leave.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    active: Signal<bool>,
}

impl Player {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_id(PlayerId::random(rng))
    }

    pub fn with_id(id: PlayerId) -> Self {
        Self {
            id,
            active: Signal::new(true),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Emits `false` when the player leaves.
    pub fn active(&self) -> Signal<bool> {
        self.active.clone()
    }

    pub fn is_active(&self) -> bool {
        self.active.current()
    }

    pub(crate) fn exit(&self, reason: &str) {
        log::info!("player {} left: {}", self.id, reason);
        self.active.emit(false);
    }
}
