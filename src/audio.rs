//! Note-event consumer seam
//!
//! The simulation only queues [`NoteOn`](crate::sim::NoteOn) messages; turning
//! them into sound is the audio collaborator's job. [`NoteSink`] is the seam:
//! a synth backend implements it and drains the world's events once per tick.
//! [`Patch`] carries the envelope and effect settings the sound should use.

use serde::{Deserialize, Serialize};

use crate::midi_to_freq;
use crate::sim::NoteOn;

/// Synth voice settings for the triangle-wave pluck: a short attack fade,
/// a longer release fade, feedback delay and a reverb tail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    /// Peak amplitude the attack fades up to
    pub amp: f32,
    /// Attack fade time in seconds
    pub attack: f32,
    /// Release fade time in seconds
    pub release: f32,
    /// Delay time in seconds
    pub delay_time: f32,
    /// Delay feedback (0-1)
    pub delay_feedback: f32,
    /// Delay low-pass filter cutoff in Hz
    pub delay_cutoff: f32,
    /// Reverb tail length in seconds
    pub reverb_time: f32,
    /// Reverb decay rate
    pub reverb_decay: f32,
}

impl Default for Patch {
    fn default() -> Self {
        Self {
            amp: 0.5,
            attack: 0.1,
            release: 0.4,
            delay_time: 0.4,
            delay_feedback: 0.5,
            delay_cutoff: 2300.0,
            reverb_time: 1.5,
            reverb_decay: 5.0,
        }
    }
}

/// Consumer of note-on events, implemented by synth backends
pub trait NoteSink {
    fn note_on(&mut self, note: NoteOn, patch: &Patch);

    /// Drain a batch of queued notes, oldest first
    fn play_all(&mut self, notes: Vec<NoteOn>, patch: &Patch) {
        for note in notes {
            self.note_on(note, patch);
        }
    }
}

/// Headless sink that logs each note instead of synthesizing it
#[derive(Debug, Default)]
pub struct LogSink;

impl NoteSink for LogSink {
    fn note_on(&mut self, note: NoteOn, _patch: &Patch) {
        log::info!(
            "tick {}: note {} ({:.1} Hz)",
            note.tick,
            note.pitch,
            midi_to_freq(note.pitch)
        );
    }
}
