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
use std::fs;
use std::path::Path;

use config::{Config, File};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ConfigError;
use crate::error::RangeError;
use crate::factory::JobFactory;
use crate::job::{Interval, Job};

/// A YAML representation of a file of jobs.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct JobFile {
    /// The jobs in this file, in display order.
    #[serde(default)]
    jobs: Vec<JobDefinition>,
}

impl JobFile {
    /// Creates a new job file from definitions.
    pub fn new(jobs: Vec<JobDefinition>) -> JobFile {
        JobFile { jobs }
    }

    /// Creates a job file describing the given jobs.
    pub fn from_jobs(jobs: &[Job]) -> JobFile {
        JobFile {
            jobs: jobs.iter().map(JobDefinition::from_job).collect(),
        }
    }

    /// Deserializes a file from the path into a job file struct.
    pub fn deserialize(path: &Path) -> Result<JobFile, ConfigError> {
        Ok(Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize::<JobFile>()?)
    }

    /// Serialize and save the job file to the given path.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_yaml()?)?;
        info!(path = %path.display(), jobs = self.jobs.len(), "Saved job file.");
        Ok(())
    }

    /// Renders the job file as YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yml::to_string(self)?)
    }

    /// Gets the job definitions.
    pub fn jobs(&self) -> &[JobDefinition] {
        &self.jobs
    }

    /// Builds jobs from every definition. Jobs without a name take the factory's
    /// next default name.
    pub fn to_jobs(&self, factory: &mut JobFactory) -> Result<Vec<Job>, ConfigError> {
        self.jobs
            .iter()
            .enumerate()
            .map(|(index, definition)| {
                definition
                    .to_job(factory)
                    .map_err(|source| ConfigError::Job {
                        job: definition
                            .name
                            .clone()
                            .unwrap_or_else(|| format!("#{}", index + 1)),
                        source,
                    })
            })
            .collect()
    }
}

/// A YAML representation of a job. Omitted fields keep the job defaults.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct JobDefinition {
    /// The name of the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// The first note of the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    from_note: Option<i32>,
    /// The last note of the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    to_note: Option<i32>,
    /// The interval between notes in semitones.
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<i32>,
    /// Note duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<i32>,
    /// Note decay in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    decay: Option<i32>,
    /// Gap between notes in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    gap: Option<i32>,
    /// The velocities to sample at.
    #[serde(skip_serializing_if = "Option::is_none")]
    velocities: Option<Velocities>,
}

/// Velocities are either listed or spread evenly between two values.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Velocities {
    List(Vec<i32>),
    Distributed { first: i32, last: i32, count: i32 },
}

impl JobDefinition {
    /// Creates a definition with only a name set.
    pub fn named(name: &str) -> JobDefinition {
        JobDefinition {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Describes an existing job with every field filled in.
    pub fn from_job(job: &Job) -> JobDefinition {
        JobDefinition {
            name: Some(job.name().to_string()),
            from_note: Some(i32::from(job.from_note())),
            to_note: Some(i32::from(job.to_note())),
            interval: Some(i32::from(job.interval())),
            duration: Some(job.note_duration() as i32),
            decay: Some(job.note_decay() as i32),
            gap: Some(job.note_gap() as i32),
            velocities: Some(Velocities::List(
                job.velocities().into_iter().map(i32::from).collect(),
            )),
        }
    }

    /// Gets the name of the job, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Builds a job from this definition, running every value through the job's
    /// setters.
    pub fn to_job(&self, factory: &mut JobFactory) -> Result<Job, RangeError> {
        let mut job = match &self.name {
            Some(name) => factory.create_named(name.as_str()),
            None => factory.create(),
        };

        if let Some(from_note) = self.from_note {
            job.set_from_note(from_note)?;
        }
        if let Some(to_note) = self.to_note {
            job.set_to_note(to_note)?;
        }
        if let Some(interval) = self.interval {
            job.set_interval(Interval::try_from(interval)?);
        }
        if let Some(duration) = self.duration {
            job.set_note_duration(duration)?;
        }
        if let Some(decay) = self.decay {
            job.set_note_decay(decay)?;
        }
        if let Some(gap) = self.gap {
            job.set_note_gap(gap)?;
        }
        match &self.velocities {
            Some(Velocities::List(velocities)) => job.set_specific_velocities(velocities)?,
            Some(Velocities::Distributed { first, last, count }) => {
                job.set_distributed_velocities(*first, *last, *count)?
            }
            None => {}
        }

        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use config::{Config, File, FileFormat};

    use super::*;

    fn parse(yaml: &str) -> JobFile {
        Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_job_file_deserialize() {
        let file = parse(
            r#"
            jobs:
              - name: Piano soft
                from_note: 40
                to_note: 52
                interval: 3
                duration: 1200
                decay: 400
                gap: 300
                velocities: [30, 60, 90]
              - name: Piano layered
                velocities:
                  first: 10
                  last: 100
                  count: 3
              - to_note: 60
        "#,
        );

        assert_eq!(3, file.jobs().len());
        assert_eq!(Some("Piano soft"), file.jobs()[0].name());
        assert_eq!(
            Some(Velocities::List(vec![30, 60, 90])),
            file.jobs()[0].velocities
        );
        assert_eq!(
            Some(Velocities::Distributed {
                first: 10,
                last: 100,
                count: 3
            }),
            file.jobs()[1].velocities
        );
        assert_eq!(None, file.jobs()[2].name());

        let mut factory = JobFactory::new();
        let jobs = file.to_jobs(&mut factory).expect("valid jobs");

        assert_eq!(
            "Piano soft: from 40 to 52 by 3 semitones, duration 1200 ms, decay 400 ms, gap 300 ms, velocities: 30 60 90 ",
            jobs[0].to_string()
        );
        assert_eq!(vec![10, 40, 70, 100], jobs[1].velocities());
        assert_eq!(40, jobs[1].from_note());
        assert_eq!(120, jobs[1].to_note());
        assert_eq!("Job3", jobs[2].name());
        assert_eq!(60, jobs[2].to_note());
        assert_eq!(vec![90], jobs[2].velocities());
    }

    #[test]
    fn test_empty_job_file() {
        let file = parse("jobs: []");
        assert!(file.to_jobs(&mut JobFactory::new()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_values_name_the_job() {
        for (yaml, expected) in [
            ("jobs:\n  - name: High\n    to_note: 130\n", RangeError::Note(130)),
            ("jobs:\n  - name: Odd\n    interval: 4\n", RangeError::Interval(4)),
            (
                "jobs:\n  - name: Quiet\n    velocities: [0]\n",
                RangeError::Velocity(0),
            ),
            (
                "jobs:\n  - name: Short\n    gap: 0\n",
                RangeError::NotPositive {
                    field: "gap",
                    value: 0,
                },
            ),
        ] {
            match parse(yaml).to_jobs(&mut JobFactory::new()) {
                Err(ConfigError::Job { job, source }) => {
                    assert!(yaml.contains(&job));
                    assert_eq!(expected, source);
                }
                other => panic!("unexpected result {:?}", other),
            }
        }

        match parse("jobs:\n  - from_note: -1\n").to_jobs(&mut JobFactory::new()) {
            Err(ConfigError::Job { job, .. }) => assert_eq!("#1", job),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_from_job() {
        let mut job = Job::named("Keys");
        job.set_from_note(48).unwrap();
        job.set_interval(Interval::Twelve);
        job.set_specific_velocities(&[20, 120]).unwrap();

        let definition = JobDefinition::from_job(&job);
        assert_eq!(Some("Keys"), definition.name());
        assert_eq!(Some(48), definition.from_note);
        assert_eq!(Some(12), definition.interval);
        assert_eq!(Some(Velocities::List(vec![20, 120])), definition.velocities);

        let rebuilt = definition.to_job(&mut JobFactory::new()).unwrap();
        assert_eq!(job.to_string(), rebuilt.to_string());
        assert_ne!(job.id(), rebuilt.id());
    }

    #[test]
    fn test_named_definition() {
        let definition = JobDefinition::named("Only a name");
        let yaml = JobFile::new(vec![definition]).to_yaml().unwrap();
        assert!(yaml.contains("name: Only a name"));
        assert!(!yaml.contains("from_note"));
    }
}
