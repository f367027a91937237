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

use uuid::Uuid;

use crate::error::RangeError;
use crate::note::Note;

/// The velocity a new job starts with.
pub const DEFAULT_VELOCITY: u8 = 90;

/// Default note duration in milliseconds.
pub const DEFAULT_NOTE_DURATION: u32 = 1000;

/// Default note decay time in milliseconds.
pub const DEFAULT_NOTE_DECAY: u32 = 500;

/// Default gap between notes in milliseconds.
pub const DEFAULT_NOTE_GAP: u32 = 200;

/// Placeholder time window assigned to every generated note.
const DEFAULT_START_TIME: u32 = 0;
const DEFAULT_END_TIME: u32 = 1000;

const DEFAULT_FROM_NOTE: u8 = 40;
const DEFAULT_TO_NOTE: u8 = 120;

const MAX_NOTE: i32 = 127;
const MIN_VELOCITY: i32 = 1;
const MAX_VELOCITY: i32 = 127;

/// Interval between successive notes of a job, in semitones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interval {
    #[default]
    One,
    Three,
    Six,
    Twelve,
}

impl Interval {
    /// All intervals, smallest first.
    pub const ALL: [Interval; 4] = [
        Interval::One,
        Interval::Three,
        Interval::Six,
        Interval::Twelve,
    ];

    /// The step between notes in semitones.
    pub fn semitones(self) -> u8 {
        match self {
            Interval::One => 1,
            Interval::Three => 3,
            Interval::Six => 6,
            Interval::Twelve => 12,
        }
    }
}

impl TryFrom<i32> for Interval {
    type Error = RangeError;

    fn try_from(semitones: i32) -> Result<Self, Self::Error> {
        Interval::ALL
            .into_iter()
            .find(|interval| i32::from(interval.semitones()) == semitones)
            .ok_or(RangeError::Interval(semitones))
    }
}

impl From<Interval> for i32 {
    fn from(interval: Interval) -> Self {
        i32::from(interval.semitones())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.semitones())
    }
}

/// A sampling job: a range of notes with timing and velocity parameters.
///
/// All mutation goes through the setters, which reject out-of-range values and leave
/// the job untouched when they do. The note list is never cached; call [`Job::notes`]
/// again after changing the job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Unique identifier, fixed at creation.
    id: Uuid,
    /// The display name of the job.
    name: String,
    /// First note of the range.
    from_note: u8,
    /// Last note of the range.
    to_note: u8,
    /// Step between notes.
    interval: Interval,
    /// Note duration in milliseconds.
    note_duration: u32,
    /// Note decay time in milliseconds.
    note_decay: u32,
    /// Gap between notes in milliseconds.
    note_gap: u32,
    /// Velocities each note is sampled at. Never empty.
    velocities: Vec<u8>,
    /// The interval last selected in an editor.
    selected_interval: Option<Interval>,
}

impl Job {
    /// Creates a job with the given name and timing. Range, interval and velocity
    /// start out at their defaults.
    pub fn new(
        name: impl Into<String>,
        note_duration: i32,
        note_decay: i32,
        note_gap: i32,
    ) -> Result<Job, RangeError> {
        Ok(Job::with_timing(
            name,
            positive("duration", note_duration)?,
            positive("decay", note_decay)?,
            positive("gap", note_gap)?,
        ))
    }

    /// Creates a job with the given name and default timing.
    pub fn named(name: impl Into<String>) -> Job {
        Job::with_timing(
            name,
            DEFAULT_NOTE_DURATION,
            DEFAULT_NOTE_DECAY,
            DEFAULT_NOTE_GAP,
        )
    }

    fn with_timing(
        name: impl Into<String>,
        note_duration: u32,
        note_decay: u32,
        note_gap: u32,
    ) -> Job {
        Job {
            id: Uuid::new_v4(),
            name: name.into(),
            from_note: DEFAULT_FROM_NOTE,
            to_note: DEFAULT_TO_NOTE,
            interval: Interval::default(),
            note_duration,
            note_decay,
            note_gap,
            velocities: vec![DEFAULT_VELOCITY],
            selected_interval: None,
        }
    }

    /// Gets the unique identifier of the job.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Gets the name of the job.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name of the job.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Gets the first note of the range.
    pub fn from_note(&self) -> u8 {
        self.from_note
    }

    /// Sets the first note of the range.
    pub fn set_from_note(&mut self, note: i32) -> Result<(), RangeError> {
        self.from_note = midi_note(note)?;
        Ok(())
    }

    /// Gets the last note of the range.
    pub fn to_note(&self) -> u8 {
        self.to_note
    }

    /// Sets the last note of the range.
    pub fn set_to_note(&mut self, note: i32) -> Result<(), RangeError> {
        self.to_note = midi_note(note)?;
        Ok(())
    }

    /// Gets the interval between the notes.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Sets the interval between the notes.
    pub fn set_interval(&mut self, interval: Interval) {
        self.interval = interval;
    }

    /// Gets the interval last selected in an editor, if any.
    pub fn selected_interval(&self) -> Option<Interval> {
        self.selected_interval
    }

    /// Sets the interval last selected in an editor.
    pub fn set_selected_interval(&mut self, interval: Option<Interval>) {
        self.selected_interval = interval;
    }

    /// Gets the note duration in milliseconds.
    pub fn note_duration(&self) -> u32 {
        self.note_duration
    }

    /// Sets the duration of each note in milliseconds.
    pub fn set_note_duration(&mut self, duration: i32) -> Result<(), RangeError> {
        self.note_duration = positive("duration", duration)?;
        Ok(())
    }

    /// Gets the note decay time in milliseconds.
    pub fn note_decay(&self) -> u32 {
        self.note_decay
    }

    /// Sets the decay time of each note in milliseconds.
    pub fn set_note_decay(&mut self, decay: i32) -> Result<(), RangeError> {
        self.note_decay = positive("decay", decay)?;
        Ok(())
    }

    /// Gets the gap between notes in milliseconds.
    pub fn note_gap(&self) -> u32 {
        self.note_gap
    }

    /// Sets the gap between notes in milliseconds.
    pub fn set_note_gap(&mut self, gap: i32) -> Result<(), RangeError> {
        self.note_gap = positive("gap", gap)?;
        Ok(())
    }

    /// Returns a copy of the velocities. Changing the copy does not affect the job.
    pub fn velocities(&self) -> Vec<u8> {
        self.velocities.clone()
    }

    /// Replaces all velocities with the single value given.
    pub fn set_velocity(&mut self, velocity: i32) -> Result<(), RangeError> {
        self.velocities = vec![midi_velocity(velocity)?];
        Ok(())
    }

    /// Replaces all velocities with the given list. Every value must be a valid
    /// velocity and the list must not be empty.
    pub fn set_specific_velocities(&mut self, velocities: &[i32]) -> Result<(), RangeError> {
        self.velocities = midi_velocities(velocities)?;
        Ok(())
    }

    /// Replaces all velocities with an even spread from `first` to `last`. See
    /// [`distribute_velocities`].
    pub fn set_distributed_velocities(
        &mut self,
        first: i32,
        last: i32,
        count: i32,
    ) -> Result<(), RangeError> {
        self.velocities = distribute_velocities(first, last, count)?;
        Ok(())
    }

    /// Generates the notes of this job, from the first note upwards in interval
    /// steps, stopping at the last note. Yields nothing if the range is reversed.
    pub fn notes(&self) -> Vec<Note> {
        (self.from_note..=self.to_note)
            .step_by(usize::from(self.interval.semitones()))
            .map(|pitch| {
                Note::new(
                    pitch,
                    &self.velocities,
                    DEFAULT_START_TIME,
                    DEFAULT_END_TIME,
                )
            })
            .collect()
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: from {} to {} by {} semitones, duration {} ms, decay {} ms, gap {} ms, velocities: ",
            self.name,
            self.from_note,
            self.to_note,
            self.interval,
            self.note_duration,
            self.note_decay,
            self.note_gap,
        )?;
        for velocity in self.velocities.iter() {
            write!(f, "{} ", velocity)?;
        }

        Ok(())
    }
}

/// Computes an ascending velocity spread from `first` to `last`.
///
/// The step is `(last - first) / count`, so the result holds `first` followed by
/// every step that stays at or below `last`. When the range is too narrow for the
/// count the step would be zero; it is raised to one, which walks every value in
/// the range instead.
pub fn distribute_velocities(first: i32, last: i32, count: i32) -> Result<Vec<u8>, RangeError> {
    if first < MIN_VELOCITY {
        return Err(RangeError::Distribution("First velocity must be positive"));
    }
    if first > MAX_VELOCITY {
        return Err(RangeError::Distribution(
            "First velocity can be at most 127",
        ));
    }
    if last < MIN_VELOCITY {
        return Err(RangeError::Distribution("Last velocity must be positive"));
    }
    if last > MAX_VELOCITY {
        return Err(RangeError::Distribution("Last velocity can be at most 127"));
    }
    if first > last {
        return Err(RangeError::Distribution(
            "First velocity must be smaller than last",
        ));
    }
    if count < 1 {
        return Err(RangeError::Distribution("Count must be one or more"));
    }

    let step = ((last - first) / count).max(1);
    let mut velocities = Vec::new();
    let mut velocity = first;
    loop {
        velocities.push(velocity as u8);
        velocity += step;
        if velocity > last {
            break;
        }
    }

    Ok(velocities)
}

fn midi_note(note: i32) -> Result<u8, RangeError> {
    if !(0..=MAX_NOTE).contains(&note) {
        return Err(RangeError::Note(note));
    }
    Ok(note as u8)
}

fn midi_velocity(velocity: i32) -> Result<u8, RangeError> {
    if !(MIN_VELOCITY..=MAX_VELOCITY).contains(&velocity) {
        return Err(RangeError::Velocity(velocity));
    }
    Ok(velocity as u8)
}

/// Checks a non-empty list of velocities.
pub(crate) fn midi_velocities(velocities: &[i32]) -> Result<Vec<u8>, RangeError> {
    if velocities.is_empty() {
        return Err(RangeError::NoVelocities);
    }
    velocities
        .iter()
        .map(|velocity| midi_velocity(*velocity))
        .collect()
}

fn positive(field: &'static str, value: i32) -> Result<u32, RangeError> {
    if value <= 0 {
        return Err(RangeError::NotPositive { field, value });
    }
    Ok(value as u32)
}
