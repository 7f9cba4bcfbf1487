use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::{fmt, str::FromStr};
use rand::Rng;

use crate::{
    arena::Arena,
    auto_grid::AutoGrid,
    common::GameError,
    config::{default_fleet, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, NUM_PLAYERS},
    player::{Player, PlayerId},
    signal::{Signal, Subscription},
};

/// Unique game identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(pub u64);

impl GameId {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        GameId(rng.random())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Vessels are being placed.
    Setup,
    /// Every grid is ready.
    Action,
    /// A player abandoned the game. Terminal.
    Ended,
}

impl GamePhase {
    pub fn name(self) -> &'static str {
        match self {
            GamePhase::Setup => "Setup",
            GamePhase::Action => "Action",
            GamePhase::Ended => "Ended",
        }
    }

    fn for_readiness(ready: bool) -> Self {
        if ready {
            GamePhase::Action
        } else {
            GamePhase::Setup
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GamePhase {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Setup" => Ok(GamePhase::Setup),
            "Action" => Ok(GamePhase::Action),
            "Ended" => Ok(GamePhase::Ended),
            other => Err(GameError::UnknownPhase(other.to_string())),
        }
    }
}

/// A game: the arena, its players, the phase derived from arena readiness and
/// the history of player actions.
pub struct Game {
    id: GameId,
    phase: Signal<GamePhase>,
    arena_subscription: Subscription,
    arena: Arena,
    players: Vec<Player>,
    actions: Vec<String>,
}

impl Game {
    /// Bind `arena` to a new game. The phase starts at `Action` if the arena is
    /// already ready, else `Setup`.
    pub fn new(id: GameId, arena: Arena, players: Vec<Player>) -> Self {
        let phase = GamePhase::for_readiness(arena.is_ready());
        Self::restore(id, arena, players, Vec::new(), phase)
    }

    /// Rebuild a live game with an explicit phase, which wins over the one
    /// the arena's readiness would give.
    pub fn restore(
        id: GameId,
        arena: Arena,
        players: Vec<Player>,
        actions: Vec<String>,
        phase: GamePhase,
    ) -> Self {
        let phase = Signal::new(phase);
        let target = phase.clone();
        let arena_subscription = arena.ready().subscribe(move |ready: &bool| {
            let current = target.current();
            if current == GamePhase::Ended {
                return;
            }
            let next = GamePhase::for_readiness(*ready);
            if next != current {
                log::info!("game phase {} -> {}", current, next);
                target.emit(next);
            }
        });
        Self {
            id,
            phase,
            arena_subscription,
            arena,
            players,
            actions,
        }
    }

    /// A default game: two players, each with a randomly laid out grid of
    /// the standard fleet.
    pub fn create<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let mut grids = Vec::with_capacity(NUM_PLAYERS);
        for _ in 0..NUM_PLAYERS {
            let grid = AutoGrid::new(
                DEFAULT_GRID_WIDTH,
                DEFAULT_GRID_HEIGHT,
                default_fleet(),
                &mut *rng,
            )?;
            grids.push(grid.into_inner());
        }
        let arena = Arena::new(grids)?;
        let players = (0..NUM_PLAYERS).map(|_| Player::new(&mut *rng)).collect();
        let game = Self::new(GameId::random(rng), arena, players);
        log::info!("created game {} in phase {}", game.id, game.phase());
        Ok(game)
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn phase(&self) -> GamePhase {
        self.phase.current()
    }

    /// Emits on every phase change.
    pub fn phase_signal(&self) -> Signal<GamePhase> {
        self.phase.clone()
    }

    /// A game is active until it has ended.
    pub fn is_active(&self) -> bool {
        self.phase() != GamePhase::Ended
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// History of player actions, oldest first.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn record_action(&mut self, action: impl Into<String>) {
        self.actions.push(action.into());
    }

    /// `player` leaves the game, which ends it for good.
    pub fn abandon(&mut self, player: PlayerId) -> Result<(), GameError> {
        let member = self.player(player).ok_or(GameError::NotAPlayer(player))?;
        member.exit("abandoned the game");
        self.actions.push(format!("Player {} abandoned the game", player));
        if self.phase() != GamePhase::Ended {
            log::info!("game {} ended", self.id);
            self.phase.emit(GamePhase::Ended);
        }
        Ok(())
    }

    /// Stop following the arena and dispose it. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.arena_subscription.dispose();
        self.arena.dispose();
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("id", &self.id)
            .field("phase", &self.phase())
            .field("players", &self.players)
            .field("actions", &self.actions)
            .field("arena", &self.arena)
            .finish()
    }
}
