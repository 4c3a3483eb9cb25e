//! End-to-end flows through the reconciler with a paused tokio clock.

use std::time::Duration;

use ballot_connectivity::{
    ConnectivityConfig, ConnectivityPhase, ConnectivityReconciler, ConnectivityState,
    NetworkSignal,
};
use ballot_nullables::NullNetworkStatus;
use tokio::sync::mpsc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn drain() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

async fn advance(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    drain().await;
}

async fn signal(reconciler: &mut ConnectivityReconciler, signal: NetworkSignal) {
    reconciler.handle(signal);
    drain().await;
}

fn reconciler(online: bool) -> ConnectivityReconciler {
    let status = if online {
        NullNetworkStatus::online()
    } else {
        NullNetworkStatus::offline()
    };
    ConnectivityReconciler::from_status(&status, ConnectivityConfig::default())
}

// ---------------------------------------------------------------------------
// Initial state
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn initial_state_comes_from_network_status() {
    let online = reconciler(true).state();
    assert_eq!(online, ConnectivityState { is_online: true, is_reconnecting: false, visible: false });

    let offline = reconciler(false).state();
    assert_eq!(offline, ConnectivityState { is_online: false, is_reconnecting: false, visible: true });
}

// ---------------------------------------------------------------------------
// Single transitions
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn offline_is_synchronous() {
    let mut r = reconciler(true);
    r.handle(NetworkSignal::Offline);
    let state = r.state();
    assert!(!state.is_online);
    assert!(state.visible);
}

#[tokio::test(start_paused = true)]
async fn online_marks_online_after_1500ms_and_settles_after_2000ms_more() {
    let mut r = reconciler(false);
    signal(&mut r, NetworkSignal::Online).await;
    assert!(r.state().is_reconnecting);
    assert!(!r.state().is_online);

    advance(1500).await;
    assert!(r.state().is_online);
    assert_eq!(r.state().phase(), ConnectivityPhase::OnlineJustConnected);

    advance(1999).await;
    assert!(r.state().visible);

    advance(1).await;
    let state = r.state();
    assert!(!state.visible);
    assert!(!state.is_reconnecting);
    assert_eq!(state.phase(), ConnectivityPhase::OnlineStable);
}

#[tokio::test(start_paused = true)]
async fn custom_delays_are_honoured() {
    let config = ConnectivityConfig { reconnect_delay_ms: 100, settle_delay_ms: 50 };
    let mut r = ConnectivityReconciler::new(false, config);
    signal(&mut r, NetworkSignal::Online).await;

    advance(100).await;
    assert!(r.state().is_online);
    advance(50).await;
    assert_eq!(r.state().phase(), ConnectivityPhase::OnlineStable);
}

// ---------------------------------------------------------------------------
// Rapid toggling
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn offline_during_reconnect_delay_wins() {
    let mut r = reconciler(false);
    signal(&mut r, NetworkSignal::Online).await;
    advance(1000).await;
    signal(&mut r, NetworkSignal::Offline).await;

    advance(10_000).await;
    assert_eq!(r.state(), ConnectivityState::initial(false));
}

#[tokio::test(start_paused = true)]
async fn offline_during_settle_delay_wins() {
    let mut r = reconciler(false);
    signal(&mut r, NetworkSignal::Online).await;
    advance(1600).await;
    assert!(r.state().is_online);

    signal(&mut r, NetworkSignal::Offline).await;
    advance(10_000).await;

    let state = r.state();
    assert!(!state.is_online);
    assert!(state.visible);
    assert!(!state.is_reconnecting);
}

#[tokio::test(start_paused = true)]
async fn online_offline_online_restarts_the_stages() {
    let mut r = reconciler(false);
    signal(&mut r, NetworkSignal::Online).await;
    advance(1000).await;
    signal(&mut r, NetworkSignal::Offline).await;
    advance(200).await;
    signal(&mut r, NetworkSignal::Online).await;

    // The first online signal would have fired here.
    advance(300).await;
    assert!(!r.state().is_online);

    advance(1200).await;
    assert!(r.state().is_online);

    advance(2000).await;
    assert_eq!(r.state().phase(), ConnectivityPhase::OnlineStable);
}

// ---------------------------------------------------------------------------
// Driven by a signal stream
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn run_consumes_signals_and_settles() {
    let r = reconciler(true);
    let mut rx = r.subscribe();
    let (tx, signals) = mpsc::channel(8);
    let session = tokio::spawn(r.run(signals));

    tx.send(NetworkSignal::Offline).await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().phase(), ConnectivityPhase::Offline);

    tx.send(NetworkSignal::Online).await.unwrap();
    drop(tx);

    let final_state = session.await.unwrap();
    assert_eq!(final_state, ConnectivityState::initial(true));
}
