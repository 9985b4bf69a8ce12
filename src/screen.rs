//! Screen-level controller wiring the session to its collaborators

use tracing::info;

use crate::state::{TimerSession, TimerState};
use crate::store::DurationStore;

/// Leave-screen callback, e.g. back to the duration entry screen.
pub trait Navigator {
    fn leave_timer(&mut self);
}

/// The countdown screen: a session plus the duration store and navigator
/// it collaborates with.
pub struct TimerScreen<S: DurationStore, N: Navigator> {
    session: TimerSession,
    store: S,
    navigator: N,
}

impl<S: DurationStore, N: Navigator> TimerScreen<S, N> {
    /// Enter the timer screen.
    ///
    /// Reads the configured duration from the store. When it is zero there
    /// is nothing to count down: the navigator is invoked immediately and no
    /// session is created.
    pub fn enter(store: S, mut navigator: N) -> Result<Option<Self>, String> {
        let configured_ms = store.configured_ms()?;
        if configured_ms == 0 {
            info!("no configured duration, leaving timer screen");
            navigator.leave_timer();
            return Ok(None);
        }

        info!("entering timer screen with {} ms configured", configured_ms);
        Ok(Some(Self {
            session: TimerSession::new(configured_ms),
            store,
            navigator,
        }))
    }

    pub fn session(&self) -> &TimerSession {
        &self.session
    }

    pub fn state(&self) -> TimerState {
        self.session.state()
    }

    /// Forward the action intent (start/pause/resume) to the session.
    pub fn on_action(&mut self) {
        self.session.on_action();
    }

    /// Await the next tick of the running countdown.
    pub async fn next_tick(&mut self) -> Option<u64> {
        self.session.next_tick().await
    }

    /// Dismiss the timer: cancel any countdown, clear the stored duration,
    /// and leave the screen.
    pub fn dismiss(mut self) -> Result<(), String> {
        info!("dismissing timer");
        self.session.reset();
        self.store.clear()?;
        self.navigator.leave_timer();
        Ok(())
    }

    /// Leave the screen without clearing the stored duration.
    pub fn leave(mut self) {
        self.session.reset();
        self.navigator.leave_timer();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::store::MemoryStore;

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        left: Rc<Cell<bool>>,
    }

    impl Navigator for RecordingNavigator {
        fn leave_timer(&mut self) {
            self.left.set(true);
        }
    }

    /// Store double that stays observable after the screen takes ownership.
    #[derive(Clone, Default)]
    struct SharedStore {
        configured_ms: Rc<Cell<u64>>,
    }

    impl DurationStore for SharedStore {
        fn configured_ms(&self) -> Result<u64, String> {
            Ok(self.configured_ms.get())
        }

        fn set_configured_ms(&mut self, ms: u64) -> Result<(), String> {
            self.configured_ms.set(ms);
            Ok(())
        }
    }

    #[test]
    fn zero_duration_navigates_away_without_a_session() {
        let navigator = RecordingNavigator::default();
        let left = navigator.left.clone();

        let screen = TimerScreen::enter(MemoryStore::new(0), navigator)
            .expect("enter should succeed");

        assert!(screen.is_none());
        assert!(left.get());
    }

    #[test]
    fn configured_duration_builds_an_idle_session() {
        let navigator = RecordingNavigator::default();
        let left = navigator.left.clone();

        let screen = TimerScreen::enter(MemoryStore::new(90_000), navigator)
            .expect("enter should succeed")
            .expect("expected a session");

        assert!(!left.get());
        assert_eq!(screen.state(), TimerState::Stopped);
        assert_eq!(screen.session().configured_ms(), 90_000);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_clears_store_and_leaves() {
        let navigator = RecordingNavigator::default();
        let left = navigator.left.clone();
        let store = SharedStore::default();
        store.configured_ms.set(5_000);
        let stored = store.configured_ms.clone();

        let mut screen = TimerScreen::enter(store, navigator)
            .expect("enter should succeed")
            .expect("expected a session");

        screen.on_action();
        assert_eq!(screen.next_tick().await, Some(5));

        screen.dismiss().expect("dismiss should succeed");
        assert_eq!(stored.get(), 0);
        assert!(left.get());
    }

    #[test]
    fn leave_keeps_the_stored_duration() {
        let navigator = RecordingNavigator::default();
        let left = navigator.left.clone();
        let store = SharedStore::default();
        store.configured_ms.set(5_000);
        let stored = store.configured_ms.clone();

        let screen = TimerScreen::enter(store, navigator)
            .expect("enter should succeed")
            .expect("expected a session");

        screen.leave();
        assert_eq!(stored.get(), 5_000);
        assert!(left.get());
    }
}
