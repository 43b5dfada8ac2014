//! Line-oriented command shell over a [`Session`].

use std::io::{BufRead, Write};

use hanoi_core::peg_from_label;
use serde_json::json;
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::namespace::peg_name;
use crate::session::{MoveOutcome, Session};

const HELP: &str = "\
commands:
  ls [PATH]            list a directory (default /)
  stat PATH            show attributes of a path
  mv SRC DST           move a disc file, e.g. mv /A/0 /C
  move DISC FROM TO    move by number, pegs as letters or indices
  status               show every peg, bottom to top
  help                 show this text
  quit | exit          leave the shell";

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    List(String),
    Stat(String),
    Rename { src: String, dst: String },
    Move { disc: u32, from: usize, to: usize },
    Status,
    Help,
    Quit,
}

/// Parse one command. Blank lines and `#` comments yield None.
pub fn parse_command(line: &str) -> CliResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    let usage = |text: &str| CliError::Usage(format!("{} (usage: {})", line, text));

    let command = match words.as_slice() {
        ["ls"] => Command::List("/".to_string()),
        ["ls", path] => Command::List(path.to_string()),
        ["ls", ..] => return Err(usage("ls [PATH]")),
        ["stat", path] => Command::Stat(path.to_string()),
        ["stat", ..] => return Err(usage("stat PATH")),
        ["mv", src, dst] => Command::Rename {
            src: src.to_string(),
            dst: dst.to_string(),
        },
        ["mv", ..] => return Err(usage("mv SRC DST")),
        ["move", disc, from, to] => Command::Move {
            disc: disc
                .parse()
                .map_err(|_| CliError::Usage(format!("{}: not a disc number", disc)))?,
            from: parse_peg(from)?,
            to: parse_peg(to)?,
        },
        ["move", ..] => return Err(usage("move DISC FROM TO")),
        ["status"] => Command::Status,
        ["help"] => Command::Help,
        ["quit"] | ["exit"] => Command::Quit,
        [other, ..] => return Err(CliError::Usage(format!("unknown command '{}'", other))),
        [] => return Ok(None),
    };

    Ok(Some(command))
}

/// A peg given as a letter (`A`) or an index (`0`).
fn parse_peg(word: &str) -> CliResult<usize> {
    let mut chars = word.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(peg) = peg_from_label(c) {
            return Ok(peg);
        }
    }
    word.parse()
        .map_err(|_| CliError::Usage(format!("{}: not a peg", word)))
}

/// Where commands write and how.
pub struct Shell<W: Write> {
    session: Session,
    out: W,
    json: bool,
}

impl<W: Write> Shell<W> {
    pub fn new(session: Session, out: W, json: bool) -> Shell<W> {
        Shell { session, out, json }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run one command. Returns false when the shell should stop.
    pub fn execute(&mut self, command: Command) -> CliResult<bool> {
        debug!(?command, "executing");

        match command {
            Command::List(path) => {
                let entries = self.session.list(&path)?;
                if self.json {
                    writeln!(self.out, "{}", json!(entries))?;
                } else {
                    for entry in entries {
                        writeln!(self.out, "{}", entry)?;
                    }
                }
            }
            Command::Stat(path) => {
                let attr = self.session.stat(&path)?;
                if self.json {
                    writeln!(self.out, "{}", json!(attr))?;
                } else {
                    writeln!(self.out, "{}", attr)?;
                }
            }
            Command::Rename { src, dst } => {
                let outcome = self.session.rename(&src, &dst)?;
                self.report_move(outcome)?;
            }
            Command::Move { disc, from, to } => {
                let outcome = self.session.move_disc(disc, from, to)?;
                self.report_move(outcome)?;
            }
            Command::Status => {
                if self.json {
                    writeln!(self.out, "{}", json!(self.session.state()))?;
                } else {
                    write!(self.out, "{}", self.session.render())?;
                    let done = if self.session.is_completed() { "yes" } else { "no" };
                    writeln!(self.out, "completed: {}", done)?;
                }
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn report_move(&mut self, outcome: MoveOutcome) -> CliResult<()> {
        let r = outcome.relocation;
        if self.json {
            let report = json!({
                "disc": r.disc,
                "from": peg_name(r.from),
                "to": peg_name(r.to),
                "completed": outcome.just_completed,
            });
            writeln!(self.out, "{}", report)?;
        } else {
            writeln!(self.out, "moved {} from {} to {}", r.disc, peg_name(r.from), peg_name(r.to))?;
        }
        if outcome.just_completed && !self.json {
            writeln!(self.out, "{}", self.session.message())?;
        }
        Ok(())
    }

    /// Parse and run a line. Returns false when the shell should stop.
    pub fn run_line(&mut self, line: &str) -> CliResult<bool> {
        match parse_command(line)? {
            Some(command) => self.execute(command),
            None => Ok(true),
        }
    }

    /// Run `;`-separated commands, stopping at the first error.
    pub fn run_script(&mut self, script: &str) -> CliResult<()> {
        for line in script.split(';') {
            if !self.run_line(line)? {
                break;
            }
        }
        Ok(())
    }

    /// Read commands until EOF or `quit`. Errors are reported on stderr and
    /// the shell keeps going; only I/O failures stop it.
    pub fn run_interactive<R: BufRead>(&mut self, input: R, prompt: bool) -> CliResult<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(self.out, "hanoi> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            match self.run_line(&line?) {
                Ok(true) => {}
                Ok(false) => break,
                Err(CliError::Io(e)) => return Err(CliError::Io(e)),
                Err(e) => {
                    e.log();
                    eprintln!("error: {}", e);
                }
            }
        }
        Ok(())
    }
}
