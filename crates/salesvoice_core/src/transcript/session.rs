//! Transcript session state machine.
//!
//! # Responsibility
//! - Fold incremental recognizer updates into one finished command string.
//! - Track whether the recognizer is currently listening.
//!
//! # Invariants
//! - Each update replaces the current text; recognizers report the full best
//!   transcription so far, not a delta.
//! - Updates received while not listening are ignored.
//! - A final update or a failure always ends listening.

use log::{debug, warn};

/// One recognizer callback payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptUpdate {
    pub text: String,
    pub is_final: bool,
}

impl TranscriptUpdate {
    pub fn partial(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Listening state plus the latest transcription.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptSession {
    text: String,
    listening: bool,
}

impl TranscriptSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears previous text and starts listening.
    pub fn start(&mut self) {
        self.text.clear();
        self.listening = true;
        debug!("event=transcript_start module=transcript status=ok");
    }

    /// Applies one recognizer update.
    ///
    /// Returns the finished command when `update.is_final` is set.
    pub fn apply(&mut self, update: TranscriptUpdate) -> Option<String> {
        if !self.listening {
            debug!("event=transcript_update module=transcript status=ignored reason=not_listening");
            return None;
        }

        self.text = update.text;
        if !update.is_final {
            return None;
        }

        self.listening = false;
        debug!(
            "event=transcript_final module=transcript status=ok chars={}",
            self.text.chars().count()
        );
        Some(self.text.clone())
    }

    /// Stops listening on a recognizer error, keeping the text heard so far.
    pub fn fail(&mut self) {
        if self.listening {
            warn!("event=transcript_fail module=transcript status=error");
        }
        self.listening = false;
    }

    /// Stops listening at the user's request and returns the current text.
    pub fn stop(&mut self) -> String {
        self.listening = false;
        self.text.clone()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Latest transcription, partial or final.
    pub fn text(&self) -> &str {
        &self.text
    }
}
