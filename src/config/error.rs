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

/// Typed error for job file load/save failures so callers can distinguish a file
/// that won't parse from a job whose values are out of range.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Job file load/parse error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Job file serialization error: {0}")]
    Serialize(#[from] serde_yml::Error),

    #[error("Job file write error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid job '{job}': {source}")]
    Job {
        job: String,
        #[source]
        source: RangeError,
    },
}
