//! Ephemeral stats display state.
//!
//! # Responsibility
//! - Hold the stats currently shown plus the last user-facing error.
//! - Apply upload outcomes with replace-on-success semantics.
//!
//! # Invariants
//! - Stats start at all zero and are only ever replaced wholesale.
//! - A failed upload keeps the previous stats untouched.
//! - The last successful completion to arrive wins; older tickets are not
//!   discarded.
//! - Only the latest ticket ends the busy state or records an error.

use crate::model::stats::{CompletionSummary, StatsResult};
use crate::save::import::{compute_stats_from_bytes, SaveImportError};
use log::{debug, info, warn};
use uuid::Uuid;

/// Identifier issued when an upload starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadTicket {
    id: Uuid,
}

impl UploadTicket {
    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// Stats display state for one session.
#[derive(Debug, Clone, Default)]
pub struct StatsBoard {
    stats: StatsResult,
    last_error: Option<String>,
    busy: bool,
    latest_ticket: Option<UploadTicket>,
}

impl StatsBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> StatsResult {
        self.stats
    }

    pub fn summary(&self) -> CompletionSummary {
        self.stats.summary()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether an upload is in flight; callers should disable re-entry.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Marks an upload as started and clears the previous error.
    pub fn begin_upload(&mut self) -> UploadTicket {
        let ticket = UploadTicket { id: Uuid::new_v4() };
        if let Some(previous) = self.latest_ticket.filter(|_| self.busy) {
            debug!(
                "event=upload_begin module=save status=superseding previous={}",
                previous.id
            );
        }
        self.busy = true;
        self.last_error = None;
        self.latest_ticket = Some(ticket);
        info!("event=upload_begin module=save status=ok ticket={}", ticket.id);
        ticket
    }

    /// Returns whether `ticket` is the most recently issued one.
    ///
    /// Callers wanting latest-request-wins can skip `finish_upload` for
    /// stale tickets.
    pub fn is_latest(&self, ticket: UploadTicket) -> bool {
        self.latest_ticket == Some(ticket)
    }

    /// Applies one upload outcome.
    ///
    /// A stale failure is logged only; the newer upload owns the error slot.
    pub fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        outcome: Result<StatsResult, SaveImportError>,
    ) {
        let stale = !self.is_latest(ticket);
        match outcome {
            Ok(stats) => {
                self.stats = stats;
                self.last_error = None;
                info!(
                    "event=upload_finish module=save status=ok ticket={} stale={}",
                    ticket.id, stale
                );
            }
            Err(err) => {
                if !stale {
                    self.last_error = Some(err.user_message().to_string());
                }
                warn!(
                    "event=upload_finish module=save status=error ticket={} stale={} error={}",
                    ticket.id, stale, err
                );
            }
        }
        if !stale {
            self.busy = false;
        }
    }

    /// Runs a full upload from raw file bytes.
    ///
    /// Returns the applied stats, or the user-facing message on failure.
    pub fn upload_bytes(&mut self, bytes: &[u8]) -> Result<StatsResult, &'static str> {
        let ticket = self.begin_upload();
        let outcome = compute_stats_from_bytes(bytes);
        let reported = match &outcome {
            Ok(stats) => Ok(*stats),
            Err(err) => Err(err.user_message()),
        };
        self.finish_upload(ticket, outcome);
        reported
    }
}
