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
use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::config;
use crate::editor::{Command, Editor};
use crate::note::NotesTable;

const HELP: &str = r#"Job edits (apply to the selected job):
  name <text>                       rename the job
  from <note> / to <note>           set the note range (0-127)
  interval <1|3|6|12>               set the step between notes
  duration <ms> / decay <ms> / gap <ms>
  velocity <v>                      use a single velocity (1-127)
  velocities <v>,<v>,...            use the listed velocities
  distribute <first> <last> <count> spread velocities evenly
  note <row> <v>,<v>,...            override the velocities of one row of
                                    the notes table until the next rebuild
Job list:
  add [name]                        add a job and select it
  select <index|name>               select a job (a number past the end
                                    is matched as a name)
  remove <index>                    remove a job
Session:
  list, show, notes, timing, save, help, quit"#;

/// Runs an editing session, reading one command per line from `input` until it ends
/// or `quit` is read. Rejected commands are reported and the session carries on.
/// `save` writes all jobs to `path`.
pub fn run<R: BufRead, W: Write>(
    editor: &mut Editor,
    input: R,
    output: &mut W,
    path: &Path,
) -> io::Result<()> {
    writeln!(output, "{}", editor.current())?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line {
            "quit" | "exit" => break,
            "help" => writeln!(output, "{}", HELP)?,
            "show" => writeln!(output, "{}", editor.current())?,
            "list" => {
                for (index, job) in editor.jobs().iter().enumerate() {
                    let marker = if index == editor.current_index() {
                        '*'
                    } else {
                        ' '
                    };
                    writeln!(output, "{} {}: {}", marker, index, job)?;
                }
            }
            "notes" => write!(output, "{}", NotesTable(editor.notes()))?,
            "timing" => writeln!(output, "{}", editor.timing())?,
            "save" => match config::save_jobs(path, editor.jobs()) {
                Ok(()) => writeln!(output, "Saved {} job(s) to {}.", editor.jobs().len(), path.display())?,
                Err(e) => {
                    warn!(err = %e, "Unable to save job file.");
                    writeln!(output, "error: {}", e)?;
                }
            },
            _ => match line
                .parse::<Command>()
                .and_then(|command| editor.apply(command))
            {
                Ok(()) => writeln!(output, "{}", editor.current())?,
                Err(e) => {
                    warn!(err = %e, line, "Command rejected.");
                    writeln!(output, "error: {}", e)?;
                }
            },
        }
    }

    info!("Editing session finished.");
    Ok(())
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use tempfile::tempdir;

    use super::run;
    use crate::config;
    use crate::editor::Editor;
    use crate::factory::JobFactory;

    fn session(script: &str, path: &std::path::Path) -> (Editor, String) {
        let mut editor = Editor::new(JobFactory::new(), Vec::new());
        let mut output = Vec::new();
        run(&mut editor, Cursor::new(script), &mut output, path).expect("session");
        (editor, String::from_utf8(output).expect("utf-8 output"))
    }

    #[test]
    fn test_session_edits() {
        let dir = tempdir().unwrap();
        let (editor, output) = session(
            "from 40\nto 50\ninterval 6\n# comment\n\ndistribute 10 100 3\nnotes\n",
            &dir.path().join("jobs.yaml"),
        );

        assert_eq!(2, editor.notes().len());
        assert!(output.contains("Job1: from 40 to 50 by 6 semitones"));
        assert!(output.contains("velocities: 10 40 70 100 "));
        assert!(output.contains("10, 40, 70, 100"));
        assert!(!output.contains("error"));
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let dir = tempdir().unwrap();
        let (editor, output) = session(
            "from 200\nfly away\nremove 0\nto 41\n",
            &dir.path().join("jobs.yaml"),
        );

        assert_eq!(3, output.matches("error:").count());
        assert!(output.contains("Note must be 0...127"));
        assert!(output.contains("unknown command 'fly'"));
        assert!(output.contains("Cannot remove the only job"));
        assert_eq!(41, editor.current().to_note());
        assert_eq!(40, editor.current().from_note());
    }

    #[test]
    fn test_session_note_velocities() {
        let dir = tempdir().unwrap();
        let (editor, output) = session(
            "to 42\nvelocity 64\nnote 1 20,110\nnotes\nnote 9 10\n",
            &dir.path().join("jobs.yaml"),
        );

        assert!(output.contains("  41  F2    20, 110"));
        assert!(output.contains("  40  E2    64 "));
        assert!(output.contains("No note at row 9"));
        assert_eq!(&[20, 110], editor.notes()[1].velocities());
        assert_eq!(vec![64], editor.current().velocities());

        let (editor, output) = session(
            "to 42\nnote 1 20,110\nto 43\nnotes\n",
            &dir.path().join("jobs.yaml"),
        );
        assert!(!output.contains("20, 110"));
        assert_eq!(&[90], editor.notes()[1].velocities());
    }

    #[test]
    fn test_session_quit_stops_reading() {
        let dir = tempdir().unwrap();
        let (editor, _) = session("to 50\nquit\nto 60\n", &dir.path().join("jobs.yaml"));
        assert_eq!(50, editor.current().to_note());
    }

    #[test]
    fn test_session_list_and_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.yaml");
        let (_, output) = session("add Bass\nto 52\nlist\ntiming\nsave\n", &path);

        assert!(output.contains("  0: Job1: from 40 to 120"));
        assert!(output.contains("* 1: Bass: from 40 to 52"));
        assert!(output.contains("cycle 1700 ms"));
        assert!(output.contains("Saved 2 job(s)"));

        let jobs = config::load_jobs(&path, &mut JobFactory::new()).expect("saved file");
        assert_eq!(2, jobs.len());
        assert_eq!("Bass", jobs[1].name());
        assert_eq!(52, jobs[1].to_note());
    }
}
