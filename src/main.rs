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
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};

use clap::{crate_version, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jobsampler::config::{self, JobFile};
use jobsampler::{distribute_velocities, timing, Editor, Job, JobFactory, NotesTable, Timing};

#[derive(Parser)]
#[clap(
    author = "Michael Wilson",
    version = crate_version!(),
    about = "An editor for sampling jobs."
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lists all jobs in a job file.
    Jobs {
        /// The path to the job file.
        path: String,
    },
    /// Prints the notes a job generates.
    Notes {
        /// The path to the job file.
        path: String,
        /// The job to use. Defaults to the first job in the file.
        #[arg(short, long)]
        job: Option<String>,
    },
    /// Draws the note timing of a job.
    Timing {
        /// The path to the job file.
        path: String,
        /// The job to use. Defaults to the first job in the file.
        #[arg(short, long)]
        job: Option<String>,
        /// The width of the timing bar in characters.
        #[arg(short, long, default_value_t = timing::DEFAULT_WIDTH)]
        width: usize,
    },
    /// Spreads velocities evenly between two values.
    Distribute {
        /// The first velocity (1-127).
        first: i32,
        /// The last velocity (1-127).
        last: i32,
        /// The number of steps between first and last.
        count: i32,
    },
    /// Prints a job file with a single default job.
    Template {
        /// The name of the job.
        #[arg(short, long)]
        name: Option<String>,
        /// The note duration in milliseconds.
        #[arg(long, default_value_t = 1000, allow_negative_numbers = true)]
        duration: i32,
        /// The note decay in milliseconds.
        #[arg(long, default_value_t = 500, allow_negative_numbers = true)]
        decay: i32,
        /// The gap between notes in milliseconds.
        #[arg(long, default_value_t = 200, allow_negative_numbers = true)]
        gap: i32,
    },
    /// Edits a job file interactively, one command per line. Type "help" for commands.
    Edit {
        /// The path to the job file. Created on save if it doesn't exist.
        path: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Jobs { path } => {
            let jobs = config::load_jobs(&PathBuf::from(&path), &mut JobFactory::new())?;

            if jobs.is_empty() {
                println!("No jobs found in {}.", path);
                return Ok(());
            }

            println!("Jobs (count: {}):", jobs.len());
            for job in jobs.iter() {
                println!("- {} ({} notes)", job, job.notes().len());
            }
        }
        Commands::Notes { path, job } => {
            let job = find_job(&PathBuf::from(&path), job.as_deref())?;
            let notes = job.notes();

            println!("{} (notes: {}):", job.name(), notes.len());
            print!("{}", NotesTable(&notes));
        }
        Commands::Timing { path, job, width } => {
            let job = find_job(&PathBuf::from(&path), job.as_deref())?;
            let timing = Timing::of(&job);

            println!("{}:", job.name());
            println!("[{}]", timing.render(width));
            println!(
                "duration {} ms, decay {} ms, gap {} ms (cycle {} ms)",
                job.note_duration(),
                job.note_decay(),
                job.note_gap(),
                timing.cycle_ms()
            );
        }
        Commands::Distribute { first, last, count } => {
            let velocities = distribute_velocities(first, last, count)?;
            println!(
                "{}",
                velocities
                    .iter()
                    .map(|velocity| velocity.to_string())
                    .collect::<Vec<String>>()
                    .join(" ")
            );
        }
        Commands::Template {
            name,
            duration,
            decay,
            gap,
        } => {
            let mut factory = JobFactory::new();
            let mut job = match name {
                Some(name) => factory.create_named(name),
                None => factory.create(),
            };
            job.set_note_duration(duration)?;
            job.set_note_decay(decay)?;
            job.set_note_gap(gap)?;
            print!("{}", JobFile::from_jobs(&[job]).to_yaml()?);
        }
        Commands::Edit { path } => {
            let path = PathBuf::from(path);
            let mut factory = JobFactory::new();
            let jobs = if path.exists() {
                config::load_jobs(&path, &mut factory)?
            } else {
                Vec::new()
            };

            let mut editor = Editor::new(factory, jobs);
            jobsampler::session::run(&mut editor, io::stdin().lock(), &mut io::stdout(), &path)?;
        }
    }

    Ok(())
}

/// Loads the job file and picks a job by name, or the first job when no name is given.
fn find_job(path: &Path, name: Option<&str>) -> Result<Job, Box<dyn Error>> {
    let jobs = config::load_jobs(path, &mut JobFactory::new())?;
    let job = match name {
        Some(name) => jobs.into_iter().find(|job| job.name() == name),
        None => jobs.into_iter().next(),
    };

    job.ok_or_else(|| match name {
        Some(name) => format!("no job named '{}' in {}", name, path.display()).into(),
        None => format!("no jobs found in {}", path.display()).into(),
    })
}
