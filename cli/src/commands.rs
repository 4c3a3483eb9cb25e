//! Subcommand implementations.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use ballot_connectivity::{
    ConnectivityConfig, ConnectivityReconciler, ConnectivityState, NetworkSignal,
};
use ballot_election::{summarize, ElectionSummary, ElectionTimer};
use ballot_types::{ElectionWindow, FixedNetworkStatus, Timestamp};
use ballot_verification::{check_mismatches, Mismatch, ProfileForm, VerificationData};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Evaluate an election window, at `now` or on the wall clock.
pub fn election_summary(start: Timestamp, end: Timestamp, now: Option<Timestamp>) -> ElectionSummary {
    let window = ElectionWindow::new(start, end);
    if window.is_degenerate() {
        warn!(%start, %end, "election window does not end after it starts");
    }
    match now {
        Some(now) => summarize(&window, now),
        None => ElectionTimer::system().summarize(&window),
    }
}

pub fn print_election(summary: &ElectionSummary, json: bool) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, summary)?;
        writeln!(out)?;
    } else {
        writeln!(out, "status:    {}", summary.status)?;
        writeln!(out, "remaining: {}", summary.remaining)?;
        writeln!(out, "progress:  {}%", summary.progress)?;
    }
    Ok(())
}

/// Load both JSON documents and compare them.
pub fn check_profile(verification: &Path, form: &Path) -> anyhow::Result<Vec<Mismatch>> {
    let verification: VerificationData = read_json(verification)?;
    let form: ProfileForm = read_json(form)?;
    let mismatches = check_mismatches(&verification, &form);
    if mismatches.is_empty() {
        info!("profile matches the extracted document details");
    } else {
        for mismatch in &mismatches {
            info!(field = %mismatch.field, "{mismatch}");
        }
    }
    Ok(mismatches)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Run a connectivity session fed by `online`/`offline` lines on stdin.
///
/// Every state change is written to stdout as a JSON line. The session ends
/// on EOF (after the last staged transition completes) or on Ctrl-C.
pub async fn connectivity_session(start_offline: bool, config: ConnectivityConfig) -> anyhow::Result<()> {
    let reconciler = ConnectivityReconciler::from_status(&FixedNetworkStatus(!start_offline), config);
    let mut changes = reconciler.subscribe();
    print_state(&reconciler.state())?;

    let printer = tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let state = *changes.borrow_and_update();
            if let Err(e) = print_state(&state) {
                warn!("failed to write connectivity state: {e}");
                break;
            }
        }
    });

    let (tx, signals) = mpsc::channel(16);
    let session = tokio::spawn(reconciler.run(signals));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<NetworkSignal>() {
                    Ok(signal) => {
                        if tx.send(signal).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!("{e}"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, ending connectivity session");
                session.abort();
                printer.abort();
                return Ok(());
            }
        }
    }

    drop(tx);
    let final_state = session.await.context("connectivity session panicked")?;
    let _ = printer.await;
    info!(phase = %final_state.phase(), "connectivity session finished");
    Ok(())
}

fn print_state(state: &ConnectivityState) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    let line = serde_json::json!({
        "phase": state.phase(),
        "is_online": state.is_online,
        "is_reconnecting": state.is_reconnecting,
        "visible": state.visible,
    });
    writeln!(out, "{line}")?;
    Ok(())
}
