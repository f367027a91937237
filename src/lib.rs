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

//! Sampling jobs: ranges of MIDI notes with timing and velocity parameters.
//!
//! - [`Job`] holds the parameters and generates its [`Note`]s.
//! - [`JobFactory`] creates jobs and hands out default names.
//! - [`Editor`] applies [`Command`]s to a list of jobs.
//! - [`config`] reads and writes YAML job files.

pub mod config;
pub mod editor;
pub mod error;
pub mod factory;
pub mod job;
pub mod note;
pub mod session;
pub mod timing;

pub use editor::{Command, Editor, EditorError};
pub use error::RangeError;
pub use factory::JobFactory;
pub use job::{distribute_velocities, Interval, Job};
pub use note::{Note, NotesTable};
pub use timing::Timing;
