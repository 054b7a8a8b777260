//! Interactive session: one command per input line

use crate::application::Session;
use crate::cli::run::{execute, Outcome};
use crate::cli::SessionLine;
use crate::domain::display::greeting;
use crate::domain::Clock;
use crate::error::{MoodlogError, Result};
use clap::Parser;
use std::io::{BufRead, Write};

/// Read commands from `input` until `quit` or end of input.
///
/// Lines are split with shell quoting rules, so `"last mon"` is one word.
///
/// Command output goes to `out`; errors go to `err` and the session keeps
/// going. When `prompt` is set a `> ` prompt is written before each line.
pub fn run_session<C, R, W, E>(
    session: &mut Session<C>,
    input: R,
    mut out: W,
    mut err: E,
    prompt: bool,
) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
    E: Write,
{
    let hour = session.journal().clock().hour();
    writeln!(out, "{}! How are you feeling today?", greeting(hour))?;
    writeln!(out, "Type 'help' for commands, 'quit' to leave.")?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(words) = shlex::split(line) else {
            let e = MoodlogError::InvalidCommand(format!("unbalanced quotes in: {}", line));
            writeln!(err, "Error: {}", e.display_with_suggestions())?;
            continue;
        };

        let command = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // Covers both parse errors and help/usage requests
                let rendered = e.render().to_string();
                if e.use_stderr() {
                    write!(err, "{}", rendered)?;
                } else {
                    write!(out, "{}", rendered)?;
                }
                continue;
            }
        };

        tracing::trace!(?command, "session command");
        match execute(session, command) {
            Ok(Outcome::Output(text)) => {
                writeln!(out, "{}", text.trim_end())?;
            }
            Ok(Outcome::Quit) => break,
            Err(e) => {
                writeln!(err, "Error: {}", e.display_with_suggestions())?;
            }
        }
    }

    writeln!(out, "Take care! Entries from this session are not kept.")?;
    Ok(())
}
