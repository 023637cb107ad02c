use sha2::{Digest, Sha256};
use std::time::Instant;

use super::cue::{Cue, CueQueue};
use super::timer::{ms, Deadline};

pub const MAX_PASSWORD_LEN: usize = 20;
pub const ERROR_CLEAR_DELAY_MS: u64 = 1000;

/// SHA-256 of the lock-screen password printed on the sticky note.
const CREDENTIAL_SHA256: &str = "7d7433895939dbfcbac57d6cc81a51d37735de023bdfa8806c954f636f1fd5ee";

/// The password hint shown beside the laptop.
pub const CREDENTIAL_HINT: &str = "A013-2025";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Delete,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Pending,
    Granted,
    Denied,
}

pub fn hash_password(pw: &str) -> String {
    let mut h = Sha256::new();
    h.update(pw.as_bytes());
    hex::encode(h.finalize())
}

pub fn verify_password(pw: &str) -> bool {
    hash_password(pw) == CREDENTIAL_SHA256
}

// ── Gate ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct AuthGate {
    buffer: String,
    error_flag: bool,
    authenticated: bool,
    clear_buffer: Deadline,
}

impl AuthGate {
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn buffer_len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn error_flag(&self) -> bool {
        self.error_flag
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn clear_pending(&self) -> bool {
        self.clear_buffer.is_armed()
    }

    pub fn key(&mut self, key: Key, now: Instant, cues: &mut CueQueue) -> AuthOutcome {
        if self.authenticated {
            return AuthOutcome::Granted;
        }

        // A new keypress supersedes the pending clear.
        if self.clear_buffer.is_armed() {
            self.clear_buffer.cancel();
            self.buffer.clear();
        }

        match key {
            Key::Char(c) if !c.is_control() => {
                self.error_flag = false;
                if self.buffer_len() < MAX_PASSWORD_LEN {
                    self.buffer.push(c);
                }
                cues.push(Cue::KeyPress);
                AuthOutcome::Pending
            }
            Key::Char(_) => AuthOutcome::Pending,
            Key::Delete => {
                self.error_flag = false;
                self.buffer.pop();
                cues.push(Cue::KeyPress);
                AuthOutcome::Pending
            }
            Key::Enter => self.submit(now, cues),
        }
    }

    fn submit(&mut self, now: Instant, cues: &mut CueQueue) -> AuthOutcome {
        if verify_password(&self.buffer) {
            self.authenticated = true;
            self.error_flag = false;
            self.buffer.clear();
            cues.push(Cue::Startup);
            tracing::info!("lock screen: access granted");
            AuthOutcome::Granted
        } else {
            self.error_flag = true;
            self.clear_buffer.arm(now, ms(ERROR_CLEAR_DELAY_MS));
            cues.push(Cue::Error);
            tracing::info!("lock screen: access denied");
            AuthOutcome::Denied
        }
    }

    /// Empties the buffer once the error delay has passed. The error flag is
    /// left for the next keypress to clear.
    pub fn tick(&mut self, now: Instant) {
        if self.clear_buffer.fire(now).is_some() {
            self.buffer.clear();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
