//! Connectivity tracking for the voting client.
//!
//! The host reports network changes as two signals, `online` and
//! `offline`. Going offline shows the connectivity indicator at once.
//! Coming back online is staged: the client first shows "reconnecting",
//! marks itself online after a short delay, and hides the indicator after a
//! further settle delay.
//!
//! Every new signal cancels whatever staged transition is still pending, so
//! rapid toggling can never let an old timer overwrite newer state.
//!
//! [`ConnectivityState`] holds the pure transitions; [`ConnectivityReconciler`]
//! schedules them on the tokio runtime and publishes every change through a
//! `watch` channel.

pub mod config;
pub mod reconciler;
pub mod signal;
pub mod state;

pub use config::ConnectivityConfig;
pub use reconciler::ConnectivityReconciler;
pub use signal::{NetworkSignal, UnknownSignal};
pub use state::{ConnectivityPhase, ConnectivityState};
