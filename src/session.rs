//! Game session: walks an ordered list of phases, moving on whenever the
//! current one signals completion.

use alloc::{rc::Rc, vec::Vec};
use core::cell::{Cell, RefCell};

use crate::common::GameError;
use crate::signal::{Signal, Subscription};

/// A unit of game progression.
pub trait SessionPhase {
    /// Emits `true` when the phase is over.
    fn completion(&self) -> Signal<bool>;
}

struct SessionState {
    phases: Vec<Rc<dyn SessionPhase>>,
    cursor: Cell<usize>,
    active: Signal<bool>,
    subscription: RefCell<Option<Subscription>>,
}

impl SessionState {
    /// Observe the phase under the cursor, skipping phases that are already
    /// complete. Deactivates the session once the phases run out.
    fn observe(state: &Rc<Self>) {
        loop {
            let index = state.cursor.get();
            let Some(phase) = state.phases.get(index) else {
                log::info!("game session completed after {} phases", state.phases.len());
                state.active.emit(false);
                return;
            };
            let completion = phase.completion();
            if completion.current() {
                state.cursor.set(index + 1);
                continue;
            }

            let weak = Rc::downgrade(state);
            let subscription = completion.subscribe(move |completed: &bool| {
                if !*completed {
                    return;
                }
                if let Some(state) = weak.upgrade() {
                    SessionState::advance(&state);
                }
            });
            *state.subscription.borrow_mut() = Some(subscription);
            return;
        }
    }

    fn advance(state: &Rc<Self>) {
        let previous = state.subscription.borrow_mut().take();
        drop(previous);
        let next = state.cursor.get() + 1;
        state.cursor.set(next);
        log::info!("game session advanced to phase {}", next);
        SessionState::observe(state);
    }
}

/// Sequencer over a fixed, non-empty list of phases. Traversal is forward
/// only.
pub struct GameSession {
    state: Rc<SessionState>,
}

impl GameSession {
    /// Start a session on the first of `phases`.
    pub fn new(phases: Vec<Rc<dyn SessionPhase>>) -> Result<Self, GameError> {
        if phases.is_empty() {
            return Err(GameError::NoPhases);
        }
        let state = Rc::new(SessionState {
            phases,
            cursor: Cell::new(0),
            active: Signal::new(true),
            subscription: RefCell::new(None),
        });
        SessionState::observe(&state);
        Ok(Self { state })
    }

    /// The phase being played, or `None` once every phase completed.
    pub fn current_phase(&self) -> Option<Rc<dyn SessionPhase>> {
        self.state.phases.get(self.state.cursor.get()).cloned()
    }

    /// Index of the phase being played.
    pub fn current_index(&self) -> Option<usize> {
        let index = self.state.cursor.get();
        (index < self.state.phases.len()).then_some(index)
    }

    pub fn phases(&self) -> &[Rc<dyn SessionPhase>] {
        &self.state.phases
    }

    /// Emits `false` when the last phase completes.
    pub fn active(&self) -> Signal<bool> {
        self.state.active.clone()
    }

    pub fn is_active(&self) -> bool {
        self.state.active.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestPhase {
        state: Signal<bool>,
    }

    impl TestPhase {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                state: Signal::new(false),
            })
        }

        fn completed(&self) {
            self.state.emit(true);
        }
    }

    impl SessionPhase for TestPhase {
        fn completion(&self) -> Signal<bool> {
            self.state.clone()
        }
    }

    fn session_of(phases: &[&Rc<TestPhase>]) -> Result<GameSession, GameError> {
        let phases: Vec<Rc<dyn SessionPhase>> = phases
            .iter()
            .map(|phase| {
                let phase: Rc<dyn SessionPhase> = (*phase).clone();
                phase
            })
            .collect();
        GameSession::new(phases)
    }

    fn is_current(session: &GameSession, phase: &Rc<TestPhase>) -> bool {
        let phase: Rc<dyn SessionPhase> = phase.clone();
        session
            .current_phase()
            .is_some_and(|current| Rc::ptr_eq(&current, &phase))
    }

    #[test]
    fn session_without_phases_is_rejected() {
        assert!(matches!(GameSession::new(Vec::new()), Err(GameError::NoPhases)));
    }

    #[test]
    fn session_begins_on_first_phase() {
        let setup = TestPhase::new();
        let complete = TestPhase::new();
        let session = session_of(&[&setup, &complete]).unwrap();
        assert!(is_current(&session, &setup));
        assert_eq!(session.current_index(), Some(0));
        assert!(session.is_active());
    }

    #[test]
    fn session_progresses_once_current_phase_is_complete() {
        let start = TestPhase::new();
        let end = TestPhase::new();
        let session = session_of(&[&start, &end]).unwrap();

        start.completed();
        assert!(is_current(&session, &end));
        assert!(session.is_active());
        assert_eq!(start.state.subscriber_count(), 0);
    }

    #[test]
    fn session_terminates_when_all_phases_are_complete() {
        let first = TestPhase::new();
        let second = TestPhase::new();
        let session = session_of(&[&first, &second]).unwrap();
        let active = Rc::new(Cell::new(true));
        let sink = Rc::clone(&active);
        let _sub = session.active().subscribe(move |a| sink.set(*a));

        first.completed();
        assert!(active.get());
        second.completed();
        assert!(!active.get());
        assert!(session.current_phase().is_none());
        assert_eq!(session.current_index(), None);
    }

    #[test]
    fn earlier_phase_completing_again_does_not_advance() {
        let first = TestPhase::new();
        let second = TestPhase::new();
        let third = TestPhase::new();
        let session = session_of(&[&first, &second, &third]).unwrap();

        first.completed();
        first.completed();
        assert!(is_current(&session, &second));
    }

    #[test]
    fn already_complete_phase_is_skipped() {
        let done = TestPhase::new();
        done.completed();
        let next = TestPhase::new();
        let session = session_of(&[&done, &next]).unwrap();
        assert!(is_current(&session, &next));
    }
}
