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
use crate::error::RangeError;
use crate::job::Job;

/// Creates jobs and keeps the count used for default job names ("Job1", "Job2", ...).
/// Every job created through the factory advances the count, named or not.
#[derive(Debug)]
pub struct JobFactory {
    next: u32,
}

impl Default for JobFactory {
    fn default() -> Self {
        JobFactory { next: 1 }
    }
}

impl JobFactory {
    /// Creates a factory whose first default name is "Job1".
    pub fn new() -> JobFactory {
        JobFactory::default()
    }

    /// Creates a job with the next default name and default timing.
    pub fn create(&mut self) -> Job {
        let job = Job::named(format!("Job{}", self.next));
        self.next += 1;
        job
    }

    /// Creates a job with the given name and default timing.
    pub fn create_named(&mut self, name: impl Into<String>) -> Job {
        let job = Job::named(name);
        self.next += 1;
        job
    }

    /// Creates a job with the given name and timing. The count is left alone when the
    /// timing is rejected.
    pub fn create_with(
        &mut self,
        name: impl Into<String>,
        note_duration: i32,
        note_decay: i32,
        note_gap: i32,
    ) -> Result<Job, RangeError> {
        let job = Job::new(name, note_duration, note_decay, note_gap)?;
        self.next += 1;
        Ok(job)
    }

    /// The number of jobs created so far.
    pub fn created(&self) -> u32 {
        self.next - 1
    }
}
