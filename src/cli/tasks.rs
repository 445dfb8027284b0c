//! Tasks command implementation

use anyhow::Result;

use questlog::config::Config;

/// List the configured tasks in display order
pub fn tasks_command(config: &Config) -> Result<()> {
    let roster = config.roster()?;

    if roster.is_empty() {
        println!("No tasks configured.");
        return Ok(());
    }

    println!("Tasks ({}):\n", roster.len());

    for task in roster.tasks() {
        println!("  #{} {} ({})", task.id, task.title, task.reward_label());

        if !task.description.is_empty() {
            println!("    {}", task.description);
        }
    }

    Ok(())
}
