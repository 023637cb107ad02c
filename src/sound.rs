/// PortfolioOS Sound System
///
/// The state machine only names cues. This dispatcher decides whether they
/// are heard: nothing plays while muted or when sound is disabled in the
/// settings. Tones are synthesised with `rodio` when built with
/// `--features sound`; otherwise cues are only traced.

use crate::core::Cue;

// ── Cue catalogue ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f32,
    pub millis: u64,
    pub volume: f32,
}

/// Ambience is a loop, not a tone, so it has no entry here.
pub fn tone_for(cue: Cue) -> Option<Tone> {
    let (freq, millis, volume) = match cue {
        Cue::Click => (1200.0, 25, 0.20),
        Cue::KeyPress => (900.0, 15, 0.15),
        Cue::Startup => (440.0, 450, 0.25),
        Cue::Error => (160.0, 280, 0.30),
        Cue::WindowOpen => (660.0, 90, 0.20),
        Cue::WindowClose => (330.0, 90, 0.20),
        Cue::Ambience => return None,
    };
    Some(Tone { freq, millis, volume })
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

pub struct AudioDispatcher {
    enabled: bool,
    muted: bool,
    ambience_on: bool,
    #[cfg(feature = "sound")]
    backend: Option<playback::Handle>,
}

impl AudioDispatcher {
    pub fn new(enabled: bool, muted: bool) -> Self {
        #[cfg(feature = "sound")]
        let backend = if enabled {
            match playback::Handle::spawn() {
                Ok(handle) => Some(handle),
                Err(err) => {
                    tracing::warn!("audio unavailable: {err:#}");
                    None
                }
            }
        } else {
            None
        };

        Self {
            enabled,
            muted,
            ambience_on: false,
            #[cfg(feature = "sound")]
            backend,
        }
    }

    /// A dispatcher that never plays anything.
    pub fn silent() -> Self {
        Self::new(false, true)
    }

    pub fn is_muted(&self) -> bool {
        self.muted || !self.enabled
    }

    pub fn ambience_playing(&self) -> bool {
        self.ambience_on
    }

    pub fn dispatch(&mut self, cue: Cue) {
        if self.is_muted() {
            return;
        }
        tracing::trace!(cue = cue.name(), "cue");
        match tone_for(cue) {
            Some(tone) => self.play_tone(tone),
            None => self.set_ambience(true),
        }
    }

    pub fn dispatch_all(&mut self, cues: impl IntoIterator<Item = Cue>) {
        for cue in cues {
            self.dispatch(cue);
        }
    }

    /// Unmuting restarts the ambience loop; muting silences it.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        tracing::debug!(muted = self.muted, "mute toggled");
        if self.muted {
            self.set_ambience(false);
        } else {
            self.dispatch(Cue::Ambience);
        }
    }

    #[cfg(feature = "sound")]
    fn play_tone(&mut self, tone: Tone) {
        if let Some(backend) = &self.backend {
            backend.send(playback::Command::Tone(tone));
        }
    }

    #[cfg(not(feature = "sound"))]
    fn play_tone(&mut self, _tone: Tone) {}

    fn set_ambience(&mut self, on: bool) {
        if self.ambience_on == on {
            return;
        }
        self.ambience_on = on;
        #[cfg(feature = "sound")]
        if let Some(backend) = &self.backend {
            backend.send(if on {
                playback::Command::AmbienceOn
            } else {
                playback::Command::AmbienceOff
            });
        }
    }
}

// ── Playback ──────────────────────────────────────────────────────────────────

#[cfg(feature = "sound")]
mod playback {
    use anyhow::{anyhow, Result};
    use rodio::source::SineWave;
    use rodio::{OutputStream, Sink, Source};
    use std::sync::mpsc::{self, Sender};
    use std::time::Duration;

    use super::Tone;

    pub enum Command {
        Tone(Tone),
        AmbienceOn,
        AmbienceOff,
    }

    pub struct Handle {
        tx: Sender<Command>,
    }

    impl Handle {
        /// The output stream is not `Send`, so it lives and dies on its own thread.
        pub fn spawn() -> Result<Self> {
            let (tx, rx) = mpsc::channel::<Command>();
            let (ready_tx, ready_rx) = mpsc::channel::<Result<(), String>>();

            std::thread::Builder::new()
                .name("audio".into())
                .spawn(move || {
                    let (_stream, handle) = match OutputStream::try_default() {
                        Ok(pair) => {
                            let _ = ready_tx.send(Ok(()));
                            pair
                        }
                        Err(err) => {
                            let _ = ready_tx.send(Err(err.to_string()));
                            return;
                        }
                    };
                    let mut ambience: Option<Sink> = None;
                    for cmd in rx {
                        match cmd {
                            Command::Tone(tone) => {
                                if let Ok(sink) = Sink::try_new(&handle) {
                                    sink.append(
                                        SineWave::new(tone.freq)
                                            .take_duration(Duration::from_millis(tone.millis))
                                            .amplify(tone.volume),
                                    );
                                    sink.detach();
                                }
                            }
                            Command::AmbienceOn => {
                                if ambience.is_none() {
                                    if let Ok(sink) = Sink::try_new(&handle) {
                                        sink.append(SineWave::new(55.0).amplify(0.04));
                                        ambience = Some(sink);
                                    }
                                }
                            }
                            Command::AmbienceOff => {
                                if let Some(sink) = ambience.take() {
                                    sink.stop();
                                }
                            }
                        }
                    }
                })?;

            match ready_rx.recv() {
                Ok(Ok(())) => Ok(Self { tx }),
                Ok(Err(err)) => Err(anyhow!(err)),
                Err(_) => Err(anyhow!("audio thread exited during startup")),
            }
        }

        pub fn send(&self, cmd: Command) {
            if self.tx.send(cmd).is_err() {
                tracing::warn!("audio thread is gone; dropping cue");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cue_but_ambience_has_a_tone() {
        for cue in Cue::ALL {
            assert_eq!(tone_for(cue).is_none(), cue == Cue::Ambience);
        }
    }

    #[test]
    fn unmuting_starts_ambience_and_muting_stops_it() {
        let mut audio = AudioDispatcher {
            enabled: true,
            muted: true,
            ambience_on: false,
            #[cfg(feature = "sound")]
            backend: None,
        };
        audio.toggle_mute();
        assert!(!audio.is_muted());
        assert!(audio.ambience_playing());
        audio.toggle_mute();
        assert!(!audio.ambience_playing());
    }

    #[test]
    fn silent_dispatcher_ignores_cues() {
        let mut audio = AudioDispatcher::silent();
        audio.dispatch(Cue::Ambience);
        assert!(!audio.ambience_playing());
    }
}
