//! Election timing for the voting client.
//!
//! Every value here is recomputed from an election window and an explicit
//! instant; nothing is cached. Callers that poll or re-render simply call
//! again with a fresh `now` (or through [`ElectionTimer`], which reads a
//! [`Clock`](ballot_types::Clock)).
//!
//! All operations are total: reversed or zero-length windows yield defined
//! output instead of errors.

pub mod engine;
pub mod summary;
pub mod timing;

pub use engine::ElectionTimer;
pub use summary::{summarize, ElectionSummary};
pub use timing::{days_remaining, time_progress, RemainingTime};
