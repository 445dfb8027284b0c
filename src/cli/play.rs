//! Play command: an interactive session driven by line commands

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use tracing::debug;

use questlog::config::Config;
use questlog::session::{Session, SessionEvent};
use questlog::LevelUpResult;

use super::render::{self, OutputFormat};

const HELP: &str = "Commands:
  toggle <id>  (t)     check or uncheck a task
  claim        (c)     claim experience once every task is done
  status       (s)     show character and tasks (alias: tasks)
  help         (h, ?)  show this help
  quit         (q)     leave the session";

/// A parsed line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayCommand {
    Toggle(u32),
    Claim,
    Status,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
fn parse_command(line: &str) -> Result<Option<PlayCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb.to_lowercase().as_str() {
        "toggle" | "t" => {
            let id = words
                .next()
                .ok_or_else(|| "toggle needs a task id".to_string())?;
            let id = id
                .parse::<u32>()
                .map_err(|_| format!("Invalid task id: {}", id))?;
            PlayCommand::Toggle(id)
        }
        "claim" | "c" => PlayCommand::Claim,
        "status" | "s" | "tasks" => PlayCommand::Status,
        "help" | "h" | "?" => PlayCommand::Help,
        "quit" | "q" | "exit" => PlayCommand::Quit,
        other => return Err(format!("Unknown command: {} (try `help`)", other)),
    };

    if words.next().is_some() {
        return Err(format!("Too many arguments for `{}`", verb));
    }

    Ok(Some(command))
}

/// Run a session on stdin/stdout
pub fn play_command(config: &Config, json: bool) -> Result<()> {
    let mut session = config.build_session()?;
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut session, stdin.lock(), stdout.lock(), format)
}

/// Read commands from `input` until EOF or `quit`, rendering to `out`.
///
/// Session events are queued by a listener and drained after each command.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut out: W,
    format: OutputFormat,
) -> Result<()> {
    let pending: Rc<RefCell<VecDeque<SessionEvent>>> = Rc::new(RefCell::new(VecDeque::new()));
    let queue = Rc::clone(&pending);
    session.subscribe(move |event| queue.borrow_mut().push_back(event.clone()));

    render::snapshot(&mut out, &session.snapshot(), format)?;
    if format == OutputFormat::Text {
        writeln!(out, "\nType `help` for commands.")?;
    }
    out.flush()?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                render::error(&mut out, &msg, format)?;
                out.flush()?;
                continue;
            }
        };
        debug!(?command, "Play command");

        match command {
            PlayCommand::Toggle(id) => match session.toggle_task(id) {
                Ok(completed) if format == OutputFormat::Text => {
                    if let Some(task) = session.roster().get(id) {
                        let verb = if completed { "Checked" } else { "Unchecked" };
                        writeln!(out, "{}: {}", verb, task.title)?;
                    }
                }
                Ok(_) => {}
                Err(e) => render::error(&mut out, &e.to_string(), format)?,
            },
            PlayCommand::Claim => match session.claim_rewards() {
                Ok(LevelUpResult::NoLevelUp) if format == OutputFormat::Text => {
                    writeln!(out, "Rewards claimed.")?;
                }
                Ok(_) => {}
                Err(e) => render::error(&mut out, &e.to_string(), format)?,
            },
            PlayCommand::Status => render::snapshot(&mut out, &session.snapshot(), format)?,
            PlayCommand::Help => writeln!(out, "{}", HELP)?,
            PlayCommand::Quit => break,
        }

        let events: Vec<SessionEvent> = pending.borrow_mut().drain(..).collect();
        for event in &events {
            render::event(&mut out, event, format)?;
        }
        out.flush()?;
    }

    Ok(())
}
