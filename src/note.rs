// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::fmt;

const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A single generated note of a job. Owns its own copy of the velocities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// The MIDI note number.
    pitch: u8,
    /// The velocities to sample this note at.
    velocities: Vec<u8>,
    /// Start of the note in milliseconds.
    start_time: u32,
    /// End of the note in milliseconds.
    end_time: u32,
}

impl Note {
    /// Creates a new note, copying the given velocities.
    pub fn new(pitch: u8, velocities: &[u8], start_time: u32, end_time: u32) -> Note {
        Note {
            pitch,
            velocities: velocities.to_vec(),
            start_time,
            end_time,
        }
    }

    /// Gets the MIDI note number.
    pub fn pitch(&self) -> u8 {
        self.pitch
    }

    /// Scientific pitch name, e.g. "C4" for note 60.
    pub fn pitch_name(&self) -> String {
        let octave = i32::from(self.pitch / 12) - 1;
        format!("{}{}", PITCH_CLASSES[usize::from(self.pitch % 12)], octave)
    }

    /// Gets the velocities to sample this note at.
    pub fn velocities(&self) -> &[u8] {
        &self.velocities
    }

    /// Replaces the velocities of this note with a copy of the given list. Values are
    /// not range checked here; the editor checks them before calling this.
    pub fn set_velocities(&mut self, velocities: &[u8]) {
        self.velocities = velocities.to_vec();
    }

    /// The velocities joined by ", ".
    pub fn velocity_string(&self) -> String {
        self.velocities
            .iter()
            .map(|velocity| velocity.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    }

    /// Gets the start of the note in milliseconds.
    pub fn start_time(&self) -> u32 {
        self.start_time
    }

    /// Gets the end of the note in milliseconds.
    pub fn end_time(&self) -> u32 {
        self.end_time
    }
}

/// Renders a list of notes as a fixed-width table.
pub struct NotesTable<'a>(pub &'a [Note]);

impl fmt::Display for NotesTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>4}  {:<4}  {:<24}  {:>10}  {:>8}",
            "Note", "Name", "Velocity", "Start (ms)", "End (ms)"
        )?;
        for note in self.0.iter() {
            writeln!(
                f,
                "{:>4}  {:<4}  {:<24}  {:>10}  {:>8}",
                note.pitch(),
                note.pitch_name(),
                note.velocity_string(),
                note.start_time(),
                note.end_time()
            )?;
        }

        Ok(())
    }
}
