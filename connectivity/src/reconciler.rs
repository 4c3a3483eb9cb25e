//! Drives [`ConnectivityState`] from network signals on the tokio runtime.

use std::sync::{Arc, Mutex, MutexGuard};

use ballot_types::NetworkStatus;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::ConnectivityConfig;
use crate::signal::NetworkSignal;
use crate::state::ConnectivityState;

/// Owns the connectivity state for one client session.
///
/// Must be used from within a tokio runtime: online signals spawn a task
/// that performs the delayed stages. At most one such task is pending; any
/// new signal aborts it, and a generation check under the state lock stops
/// a stage that was already running from landing after the new signal.
pub struct ConnectivityReconciler {
    shared: Arc<Shared>,
    config: ConnectivityConfig,
    pending: Option<JoinHandle<()>>,
}

struct Shared {
    state: watch::Sender<ConnectivityState>,
    /// Bumped by every signal. Staged transitions carry the generation they
    /// were issued under and are dropped once it is stale.
    generation: Mutex<u64>,
}

impl Shared {
    fn lock_generation(&self) -> MutexGuard<'_, u64> {
        self.generation.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Start a new generation and apply its immediate transition.
    fn begin(&self, transition: impl FnOnce(&mut ConnectivityState)) -> u64 {
        let mut generation = self.lock_generation();
        *generation += 1;
        self.modify(transition);
        *generation
    }

    /// Apply a staged transition unless a newer signal has arrived.
    fn apply_if_current(
        &self,
        issued: u64,
        transition: impl FnOnce(&mut ConnectivityState),
    ) -> bool {
        let generation = self.lock_generation();
        if *generation != issued {
            return false;
        }
        self.modify(transition);
        true
    }

    fn modify(&self, transition: impl FnOnce(&mut ConnectivityState)) {
        self.state.send_if_modified(|state| {
            let before = *state;
            transition(state);
            if *state != before {
                debug!(
                    is_online = state.is_online,
                    is_reconnecting = state.is_reconnecting,
                    visible = state.visible,
                    phase = %state.phase(),
                    "connectivity state changed"
                );
                true
            } else {
                false
            }
        });
    }

    fn invalidate(&self) {
        *self.lock_generation() += 1;
    }
}

impl ConnectivityReconciler {
    /// Create a reconciler starting from a known online/offline status.
    pub fn new(online: bool, config: ConnectivityConfig) -> Self {
        let (state, _) = watch::channel(ConnectivityState::initial(online));
        info!(online, "connectivity tracking started");
        Self {
            shared: Arc::new(Shared {
                state,
                generation: Mutex::new(0),
            }),
            config,
            pending: None,
        }
    }

    /// Create a reconciler whose initial state is read from `status`.
    pub fn from_status(status: &impl NetworkStatus, config: ConnectivityConfig) -> Self {
        Self::new(status.is_online(), config)
    }

    /// Current state snapshot.
    pub fn state(&self) -> ConnectivityState {
        *self.shared.state.borrow()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ConnectivityState> {
        self.shared.state.subscribe()
    }

    /// Whether a staged online transition is still in flight.
    pub fn has_pending_transition(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Apply a network signal, cancelling any staged transition.
    pub fn handle(&mut self, signal: NetworkSignal) {
        self.cancel_pending();
        match signal {
            NetworkSignal::Offline => {
                info!("network offline");
                self.shared.begin(ConnectivityState::go_offline);
            }
            NetworkSignal::Online => {
                info!("network online, reconnecting");
                let issued = self.shared.begin(ConnectivityState::begin_reconnect);
                let shared = Arc::clone(&self.shared);
                let reconnect_delay = self.config.reconnect_delay();
                let settle_delay = self.config.settle_delay();
                self.pending = Some(tokio::spawn(async move {
                    tokio::time::sleep(reconnect_delay).await;
                    if !shared.apply_if_current(issued, ConnectivityState::mark_online) {
                        return;
                    }
                    tokio::time::sleep(settle_delay).await;
                    if shared.apply_if_current(issued, ConnectivityState::settle) {
                        info!("connection stable");
                    }
                }));
            }
        }
    }

    /// Process signals until the channel closes, then let the last staged
    /// transition finish. Returns the final state.
    pub async fn run(mut self, mut signals: mpsc::Receiver<NetworkSignal>) -> ConnectivityState {
        while let Some(signal) = signals.recv().await {
            self.handle(signal);
        }
        if let Some(task) = self.pending.take() {
            let _ = task.await;
        }
        debug!("signal source closed");
        self.state()
    }

    /// Cancel any staged transition, leaving the state as it is now.
    pub fn shutdown(&mut self) {
        self.cancel_pending();
        self.shared.invalidate();
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            if !task.is_finished() {
                debug!("cancelling staged connectivity transition");
            }
            task.abort();
        }
    }
}

impl Drop for ConnectivityReconciler {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConnectivityPhase;
    use std::time::Duration;

    /// Let spawned tasks run up to their next await point.
    async fn drain() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    async fn advance(ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
        drain().await;
    }

    #[tokio::test(start_paused = true)]
    async fn offline_applies_immediately() {
        let mut reconciler = ConnectivityReconciler::new(true, ConnectivityConfig::default());
        reconciler.handle(NetworkSignal::Offline);

        let state = reconciler.state();
        assert!(!state.is_online);
        assert!(state.visible);
        assert!(!reconciler.has_pending_transition());
    }

    #[tokio::test(start_paused = true)]
    async fn online_is_staged() {
        let mut reconciler = ConnectivityReconciler::new(false, ConnectivityConfig::default());
        reconciler.handle(NetworkSignal::Online);
        drain().await;
        assert_eq!(reconciler.state().phase(), ConnectivityPhase::Reconnecting);

        advance(1499).await;
        assert!(!reconciler.state().is_online);

        advance(1).await;
        let state = reconciler.state();
        assert!(state.is_online);
        assert!(state.is_reconnecting);
        assert!(state.visible);

        advance(2000).await;
        let state = reconciler.state();
        assert!(!state.visible);
        assert!(!state.is_reconnecting);
        assert!(!reconciler.has_pending_transition());
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_freezes_state() {
        let mut reconciler = ConnectivityReconciler::new(false, ConnectivityConfig::default());
        reconciler.handle(NetworkSignal::Online);
        drain().await;
        reconciler.shutdown();

        advance(5000).await;
        assert_eq!(reconciler.state().phase(), ConnectivityPhase::Reconnecting);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_each_stage() {
        let mut reconciler = ConnectivityReconciler::new(false, ConnectivityConfig::default());
        let mut rx = reconciler.subscribe();

        reconciler.handle(NetworkSignal::Online);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().phase(), ConnectivityPhase::Reconnecting);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().phase(), ConnectivityPhase::OnlineJustConnected);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().phase(), ConnectivityPhase::OnlineStable);
    }
}
