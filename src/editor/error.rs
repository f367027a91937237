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

/// Typed error for editor commands so the front end can tell a rejected value
/// from a bad selection or a typo.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("No job matching '{0}'")]
    NoSuchJob(String),

    #[error("No note at row {0}")]
    NoSuchNote(usize),

    #[error("Cannot remove the only job")]
    LastJob,

    #[error("Unable to parse command: {0}")]
    Parse(String),
}
