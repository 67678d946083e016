//! Single-slot state machine for the upload drop zone.
//!
//! The zone is either idle or processing exactly one submission. While busy,
//! further offers are rejected deterministically instead of being queued;
//! `settle` is the only way back to idle and works the same for success and
//! failure, so an error can never leave the zone stuck busy.

use std::path::PathBuf;

use crate::constant::LABEL_BUDGET;
use crate::wire::url_tail;

/// One submission: a link to a WAD file, or a local file. Mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum DropPayload {
    Url(String),
    File { name: String, path: PathBuf },
}

impl DropPayload {
    /// Build a payload from a local path, if it names a file.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self::File { name, path })
    }

    /// The raw label shown while processing: the URL string or the file name.
    pub fn label(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::File { name, .. } => name,
        }
    }

    /// Label used when the server does not report a file name: the tail of
    /// the URL, or the local file's name.
    pub fn fallback_label(&self) -> String {
        match self {
            Self::Url(url) => url_tail(url).to_string(),
            Self::File { name, .. } => name.clone(),
        }
    }
}

#[derive(Debug)]
enum ZoneState {
    Idle,
    Busy { label: String },
}

/// Outcome of offering a payload to the zone.
#[derive(Debug)]
pub enum Offer {
    /// The zone accepted and went busy; dispatch the payload.
    Accepted(DropPayload),
    /// The zone was already busy; the payload is returned untouched.
    Rejected(DropPayload),
}

/// The drop zone itself. Holds no rendering state, only the slot.
#[derive(Debug)]
pub struct DropZone {
    state: ZoneState,
}

impl DropZone {
    pub fn new() -> Self {
        Self {
            state: ZoneState::Idle,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, ZoneState::Busy { .. })
    }

    /// Offer a submission. Accepts only from idle; a busy zone rejects and
    /// stays unchanged.
    pub fn offer(&mut self, payload: DropPayload) -> Offer {
        if self.is_busy() {
            tracing::info!(label = payload.label(), "drop rejected, zone is busy");
            return Offer::Rejected(payload);
        }
        self.state = ZoneState::Busy {
            label: truncate_label(payload.label()),
        };
        Offer::Accepted(payload)
    }

    /// Return to idle. Called once per request, on success and failure alike.
    pub fn settle(&mut self) {
        self.state = ZoneState::Idle;
    }

    /// The truncated label of the in-flight submission.
    pub fn busy_label(&self) -> Option<&str> {
        match &self.state {
            ZoneState::Busy { label } => Some(label),
            ZoneState::Idle => None,
        }
    }
}

impl Default for DropZone {
    fn default() -> Self {
        Self::new()
    }
}

/// First `LABEL_BUDGET` characters, with `...` appended when truncated.
pub fn truncate_label(label: &str) -> String {
    let mut truncated: String = label.chars().take(LABEL_BUDGET).collect();
    if label.chars().count() > LABEL_BUDGET {
        truncated.push_str("...");
    }
    truncated
}
