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

//! Editing of a list of jobs.
//!
//! The editor owns the jobs, the factory that names new ones, and the note list of
//! the selected job. Every [`Command`] is applied as one step: the value is checked,
//! the job is changed, and the note list is rebuilt. A rejected command changes
//! nothing. Per-note velocity overrides are the exception: they change the note
//! list only and are lost on the next rebuild.

mod command;
mod error;

use tracing::{debug, info, span, Level, Span};

pub use command::Command;
pub use error::EditorError;

use crate::factory::JobFactory;
use crate::job::{midi_velocities, Job};
use crate::note::Note;
use crate::timing::Timing;

/// Holds the jobs being edited and the selection.
pub struct Editor {
    /// Creates jobs added during the session.
    factory: JobFactory,
    /// The jobs, in display order. Never empty.
    jobs: Vec<Job>,
    /// Index of the selected job.
    current: usize,
    /// The notes of the selected job as of the last command.
    notes: Vec<Note>,
    /// The logging span.
    span: Span,
}

impl Editor {
    /// Creates an editor over the given jobs and selects the first one. An empty list
    /// gets one default job from the factory.
    pub fn new(mut factory: JobFactory, mut jobs: Vec<Job>) -> Editor {
        if jobs.is_empty() {
            jobs.push(factory.create());
        }

        let mut editor = Editor {
            factory,
            jobs,
            current: 0,
            notes: Vec::new(),
            span: span!(Level::INFO, "editor"),
        };
        editor.select(0);
        editor
    }

    /// Applies a command to the editor.
    pub fn apply(&mut self, command: Command) -> Result<(), EditorError> {
        let span = self.span.clone();
        let _enter = span.enter();
        debug!(?command, job = self.current().name(), "Applying command.");

        match command {
            Command::SetName(name) => self.current_mut().set_name(name),
            Command::SetFromNote(note) => self.current_mut().set_from_note(note)?,
            Command::SetToNote(note) => self.current_mut().set_to_note(note)?,
            Command::SetInterval(interval) => {
                let job = self.current_mut();
                job.set_interval(interval);
                job.set_selected_interval(Some(interval));
            }
            Command::SetDuration(duration) => self.current_mut().set_note_duration(duration)?,
            Command::SetDecay(decay) => self.current_mut().set_note_decay(decay)?,
            Command::SetGap(gap) => self.current_mut().set_note_gap(gap)?,
            Command::SetVelocity(velocity) => self.current_mut().set_velocity(velocity)?,
            Command::SetSpecificVelocities(velocities) => {
                self.current_mut().set_specific_velocities(&velocities)?
            }
            Command::SetDistributedVelocities { first, last, count } => self
                .current_mut()
                .set_distributed_velocities(first, last, count)?,
            Command::SetNoteVelocities { index, velocities } => {
                let velocities = midi_velocities(&velocities)?;
                let note = self
                    .notes
                    .get_mut(index)
                    .ok_or(EditorError::NoSuchNote(index))?;
                note.set_velocities(&velocities);
                debug!(index, pitch = note.pitch(), "Changed note velocities.");
                // The override lives on the note list only; rebuilding would drop it.
                return Ok(());
            }
            Command::AddJob { name } => {
                let job = match name {
                    Some(name) => self.factory.create_named(name),
                    None => self.factory.create(),
                };
                info!(job = job.name(), "Added job.");
                self.jobs.push(job);
                self.select(self.jobs.len() - 1);
            }
            Command::Select(index) => {
                let index = if index < self.jobs.len() {
                    index
                } else {
                    self.position(&index.to_string())?
                };
                self.select(index);
            }
            Command::SelectByName(name) => {
                let index = self.position(&name)?;
                self.select(index);
            }
            Command::RemoveJob(index) => {
                if index >= self.jobs.len() {
                    return Err(EditorError::NoSuchJob(index.to_string()));
                }
                if self.jobs.len() == 1 {
                    return Err(EditorError::LastJob);
                }

                let removed = self.jobs.remove(index);
                info!(job = removed.name(), "Removed job.");
                let current = if self.current > index || self.current == self.jobs.len() {
                    self.current - 1
                } else {
                    self.current
                };
                self.select(current);
            }
        }

        self.notes = self.current().notes();
        Ok(())
    }

    /// The selected job.
    pub fn current(&self) -> &Job {
        &self.jobs[self.current]
    }

    /// Index of the selected job.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// All jobs in display order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// The notes of the selected job.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The timing of the selected job.
    pub fn timing(&self) -> Timing {
        Timing::of(self.current())
    }

    fn position(&self, name: &str) -> Result<usize, EditorError> {
        self.jobs
            .iter()
            .position(|job| job.name() == name)
            .ok_or_else(|| EditorError::NoSuchJob(name.to_string()))
    }

    fn current_mut(&mut self) -> &mut Job {
        &mut self.jobs[self.current]
    }

    /// Selects a job, mirrors its interval into the selection, and rebuilds the notes.
    fn select(&mut self, index: usize) {
        self.current = index;
        let job = self.current_mut();
        let interval = job.interval();
        job.set_selected_interval(Some(interval));
        self.notes = self.current().notes();
        debug!(
            index,
            job = self.current().name(),
            notes = self.notes.len(),
            "Selected job."
        );
    }
}
