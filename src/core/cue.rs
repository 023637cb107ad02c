use serde::{Deserialize, Serialize};

/// Named audio trigger. The state machine only names the cue; playback,
/// volume and muting belong to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cue {
    Click,
    KeyPress,
    Startup,
    Error,
    WindowOpen,
    WindowClose,
    Ambience,
}

impl Cue {
    pub const ALL: [Cue; 7] = [
        Cue::Click,
        Cue::KeyPress,
        Cue::Startup,
        Cue::Error,
        Cue::WindowOpen,
        Cue::WindowClose,
        Cue::Ambience,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Cue::Click => "click",
            Cue::KeyPress => "keyPress",
            Cue::Startup => "startup",
            Cue::Error => "error",
            Cue::WindowOpen => "windowOpen",
            Cue::WindowClose => "windowClose",
            Cue::Ambience => "ambience",
        }
    }
}

/// FIFO of cues emitted since the last drain.
#[derive(Debug, Clone, Default)]
pub struct CueQueue {
    pending: Vec<Cue>,
}

impl CueQueue {
    pub fn push(&mut self, cue: Cue) {
        self.pending.push(cue);
    }

    pub fn drain(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[Cue] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
