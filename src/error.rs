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

/// Raised when a job parameter is out of bounds. A job that rejects a value is left
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Note must be 0...127 (got {0})")]
    Note(i32),

    #[error("Note {field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: i32 },

    #[error("Velocity must be 1...127 (got {0})")]
    Velocity(i32),

    #[error("At least one velocity is required")]
    NoVelocities,

    #[error("Interval must be 1, 3, 6 or 12 semitones (got {0})")]
    Interval(i32),

    #[error("{0}")]
    Distribution(&'static str),
}
