//! Text and JSON rendering of session state and events

use std::io::{self, Write};

use serde::Serialize;

use questlog::progression::{Character, LevelUp};
use questlog::session::{SessionEvent, SessionSnapshot};

/// Width of the experience bar in characters
const BAR_WIDTH: usize = 20;

/// How the play session writes its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn event<W: Write>(
    out: &mut W,
    event: &SessionEvent,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => json_line(out, event),
        OutputFormat::Text => match event {
            SessionEvent::StatsChanged(snapshot) => snapshot_text(out, snapshot),
            SessionEvent::LeveledUp(level_up) => level_up_banner(out, level_up),
        },
    }
}

pub fn snapshot<W: Write>(
    out: &mut W,
    snapshot: &SessionSnapshot,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => json_line(out, snapshot),
        OutputFormat::Text => snapshot_text(out, snapshot),
    }
}

pub fn error<W: Write>(out: &mut W, message: &str, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => json_line(out, &serde_json::json!({ "error": message })),
        OutputFormat::Text => writeln!(out, "Error: {}", message),
    }
}

fn json_line<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

fn snapshot_text<W: Write>(out: &mut W, snapshot: &SessionSnapshot) -> io::Result<()> {
    stats_text(out, &snapshot.character)?;
    writeln!(out)?;

    for task in &snapshot.tasks {
        let mark = if task.completed { "x" } else { " " };
        writeln!(
            out,
            "  [{}] #{} {} - {} ({})",
            mark,
            task.id,
            task.title,
            task.description,
            task.reward_label()
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "  {}/{} done  >> {} <<",
        snapshot.claim.completed,
        snapshot.claim.total,
        snapshot.claim.label()
    )
}

fn stats_text<W: Write>(out: &mut W, character: &Character) -> io::Result<()> {
    writeln!(
        out,
        "Level {}  STR {}  AGI {}",
        character.level(),
        character.strength(),
        character.agility()
    )?;
    writeln!(
        out,
        "EXP [{}] {}",
        experience_bar(character.progress()),
        character.experience_label()
    )
}

fn level_up_banner<W: Write>(out: &mut W, level_up: &LevelUp) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "*** LEVEL UP! ***")?;
    writeln!(out, "  Level {} -> {}", level_up.old_level, level_up.new_level)?;
    writeln!(out, "  Strength +{}", level_up.strength_gain)?;
    writeln!(out, "  Agility +{}", level_up.agility_gain)?;
    writeln!(out, "  Next level at {} EXP", level_up.experience_to_next)?;
    writeln!(out)
}

fn experience_bar(progress: f32) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * BAR_WIDTH as f32) as usize).min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
