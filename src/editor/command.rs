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
use std::str::FromStr;

use crate::job::Interval;

use super::error::EditorError;

/// An edit to apply to the editor. Job edits target the currently selected job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetName(String),
    SetFromNote(i32),
    SetToNote(i32),
    SetInterval(Interval),
    SetDuration(i32),
    SetDecay(i32),
    SetGap(i32),
    /// Replace all velocities with a single one.
    SetVelocity(i32),
    SetSpecificVelocities(Vec<i32>),
    SetDistributedVelocities { first: i32, last: i32, count: i32 },
    /// Override the velocities of one row of the note list. The job keeps its own
    /// velocities, so the override lasts until the notes are next rebuilt.
    SetNoteVelocities { index: usize, velocities: Vec<i32> },
    /// Create a job and select it. Uses a default name when none is given.
    AddJob { name: Option<String> },
    /// Select by index. An index past the end is tried as a job name instead, so a
    /// job named "7" can still be selected.
    Select(usize),
    SelectByName(String),
    RemoveJob(usize),
}

impl FromStr for Command {
    type Err = EditorError;

    /// Parses a command line such as `from 40`, `velocities 30,60,90` or
    /// `distribute 10 100 3`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "name" => {
                if rest.is_empty() {
                    return Err(EditorError::Parse("name expects a value".into()));
                }
                Ok(Command::SetName(rest.to_string()))
            }
            "from" => Ok(Command::SetFromNote(integer(verb, rest)?)),
            "to" => Ok(Command::SetToNote(integer(verb, rest)?)),
            "interval" => Ok(Command::SetInterval(Interval::try_from(integer(
                verb, rest,
            )?)?)),
            "duration" => Ok(Command::SetDuration(integer(verb, rest)?)),
            "decay" => Ok(Command::SetDecay(integer(verb, rest)?)),
            "gap" => Ok(Command::SetGap(integer(verb, rest)?)),
            "velocity" => Ok(Command::SetVelocity(integer(verb, rest)?)),
            "velocities" => Ok(Command::SetSpecificVelocities(velocity_list(verb, rest)?)),
            "note" => {
                let (index, values) = match rest.split_once(char::is_whitespace) {
                    Some((index, values)) => (index, values),
                    None => (rest, ""),
                };
                let index = index.parse::<usize>().map_err(|_| {
                    EditorError::Parse(format!("note expects a row index, got '{}'", index))
                })?;
                Ok(Command::SetNoteVelocities {
                    index,
                    velocities: velocity_list(verb, values)?,
                })
            }
            "distribute" => {
                let values = rest
                    .split_whitespace()
                    .map(|value| integer(verb, value))
                    .collect::<Result<Vec<i32>, EditorError>>()?;
                match values[..] {
                    [first, last, count] => Ok(Command::SetDistributedVelocities {
                        first,
                        last,
                        count,
                    }),
                    _ => Err(EditorError::Parse(
                        "distribute expects <first> <last> <count>".into(),
                    )),
                }
            }
            "add" => Ok(Command::AddJob {
                name: (!rest.is_empty()).then(|| rest.to_string()),
            }),
            "select" => {
                if rest.is_empty() {
                    return Err(EditorError::Parse(
                        "select expects an index or a name".into(),
                    ));
                }
                Ok(match rest.parse::<usize>() {
                    Ok(index) => Command::Select(index),
                    Err(_) => Command::SelectByName(rest.to_string()),
                })
            }
            "remove" => rest
                .parse::<usize>()
                .map(Command::RemoveJob)
                .map_err(|_| EditorError::Parse(format!("remove expects an index, got '{}'", rest))),
            "" => Err(EditorError::Parse("empty command".into())),
            _ => Err(EditorError::Parse(format!("unknown command '{}'", verb))),
        }
    }
}

fn integer(verb: &str, value: &str) -> Result<i32, EditorError> {
    value
        .parse::<i32>()
        .map_err(|_| EditorError::Parse(format!("{} expects an integer, got '{}'", verb, value)))
}

/// Splits a velocity list on commas and whitespace.
fn velocity_list(verb: &str, values: &str) -> Result<Vec<i32>, EditorError> {
    values
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|value| !value.is_empty())
        .map(|value| integer(verb, value))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::RangeError;

    fn parse(line: &str) -> Command {
        line.parse::<Command>()
            .unwrap_or_else(|e| panic!("expected '{}' to parse: {}", line, e))
    }

    #[test]
    fn test_parse_job_edits() {
        assert_eq!(Command::SetName("Soft piano".into()), parse("name  Soft piano "));
        assert_eq!(Command::SetFromNote(40), parse("from 40"));
        assert_eq!(Command::SetToNote(-3), parse("to -3"));
        assert_eq!(Command::SetInterval(Interval::Six), parse("interval 6"));
        assert_eq!(Command::SetDuration(1200), parse("duration 1200"));
        assert_eq!(Command::SetDecay(400), parse("decay 400"));
        assert_eq!(Command::SetGap(0), parse("gap 0"));
        assert_eq!(Command::SetVelocity(127), parse("velocity 127"));
    }

    #[test]
    fn test_parse_velocities() {
        assert_eq!(
            Command::SetSpecificVelocities(vec![30, 60, 90]),
            parse("velocities 30,60,90")
        );
        assert_eq!(
            Command::SetSpecificVelocities(vec![30, 60, 90]),
            parse("velocities 30, 60 90")
        );
        assert_eq!(Command::SetSpecificVelocities(vec![]), parse("velocities"));
        assert_eq!(
            Command::SetNoteVelocities {
                index: 2,
                velocities: vec![20, 40, 60]
            },
            parse("note 2 20,40, 60")
        );
        assert_eq!(
            Command::SetNoteVelocities {
                index: 0,
                velocities: vec![]
            },
            parse("note 0")
        );
        assert_eq!(
            Command::SetDistributedVelocities {
                first: 10,
                last: 100,
                count: 3
            },
            parse("distribute 10 100 3")
        );
    }

    #[test]
    fn test_parse_job_list_edits() {
        assert_eq!(Command::AddJob { name: None }, parse("add"));
        assert_eq!(
            Command::AddJob {
                name: Some("Bass".into())
            },
            parse("add Bass")
        );
        assert_eq!(Command::Select(2), parse("select 2"));
        assert_eq!(Command::SelectByName("Bass".into()), parse("select Bass"));
        assert_eq!(Command::Select(7), parse("select 7"));
        assert_eq!(Command::RemoveJob(0), parse("remove 0"));
    }

    #[test]
    fn test_parse_errors() {
        for line in [
            "",
            "jump 3",
            "from",
            "from forty",
            "name",
            "distribute 10 100",
            "distribute 10 100 3 4",
            "velocities 10,x",
            "select",
            "remove last",
            "note",
            "note first 10",
            "note 1 10,loud",
        ] {
            assert!(
                matches!(line.parse::<Command>(), Err(EditorError::Parse(_))),
                "expected '{}' to fail to parse",
                line
            );
        }

        assert!(matches!(
            "interval 5".parse::<Command>(),
            Err(EditorError::Range(RangeError::Interval(5)))
        ));
    }
}
