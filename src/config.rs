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
use std::path::Path;

use tracing::{debug, info};

use crate::factory::JobFactory;
use crate::job::Job;

mod error;
mod job;

pub use error::ConfigError;
pub use job::{JobDefinition, JobFile, Velocities};

/// Loads all jobs from a YAML job file. Unnamed jobs are named by the factory.
pub fn load_jobs(path: &Path, factory: &mut JobFactory) -> Result<Vec<Job>, ConfigError> {
    let jobs = JobFile::deserialize(path)?.to_jobs(factory)?;
    info!(path = %path.display(), jobs = jobs.len(), "Loaded job file.");
    for job in jobs.iter() {
        debug!(job = job.name(), id = %job.id(), "Loaded job.");
    }
    Ok(jobs)
}

/// Saves the given jobs to a YAML job file, replacing its contents.
pub fn save_jobs(path: &Path, jobs: &[Job]) -> Result<(), ConfigError> {
    JobFile::from_jobs(jobs).save(path)
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;
    use crate::job::Interval;

    #[test]
    fn test_load_assets() {
        let mut factory = JobFactory::new();
        let jobs = load_jobs(&PathBuf::from("assets/jobs.yaml"), &mut factory)
            .expect("Parse jobs should have succeeded.");

        assert_eq!(3, jobs.len());
        assert_eq!("Job 1", jobs[0].name());
        assert_eq!("Job 2", jobs[1].name());
        assert_eq!(1200, jobs[1].note_duration());
        assert_eq!(vec![10, 40, 70, 100], jobs[2].velocities());
        assert_eq!(Interval::Six, jobs[2].interval());
        assert_eq!(3, factory.created());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_jobs(
                &PathBuf::from("assets/does-not-exist.yaml"),
                &mut JobFactory::new()
            ),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("jobs.yaml");

        let mut factory = JobFactory::new();
        let mut first = factory.create();
        first.set_from_note(36).unwrap();
        first.set_to_note(84).unwrap();
        first.set_interval(Interval::Twelve);
        first.set_distributed_velocities(20, 120, 2).unwrap();
        let mut second = factory.create_with("Pad", 3000, 2000, 400).unwrap();
        second.set_velocity(64).unwrap();

        save_jobs(&path, &[first.clone(), second.clone()]).expect("save");
        let loaded = load_jobs(&path, &mut JobFactory::new()).expect("load");

        assert_eq!(2, loaded.len());
        assert_eq!(first.to_string(), loaded[0].to_string());
        assert_eq!(second.to_string(), loaded[1].to_string());
    }
}
