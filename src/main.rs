//! TaskQuest - Local-first to-do tracker with gamification.
//!
//! Main entry point. A thin driver over the library: add, list, and
//! complete tasks, and show stats and achievements.

use anyhow::{bail, Context, Result};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use taskquest::gamification::status::unlocked_themes;
use taskquest::storage::{load_config, Database};
use taskquest::tasks::types::{Priority, Task};
use taskquest::TaskManager;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config().context("failed to load configuration")?;
    let db = Database::open(&config.database_path()).context("failed to open database")?;
    let manager = TaskManager::new(Arc::new(db));
    manager.engine().initialize_catalog()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("add") => add(&manager, &args[1..]),
        Some("list") => list(&manager),
        Some("done") => done(&manager, &args[1..]),
        Some("stats") => stats(&manager),
        Some("achievements") => achievements(&manager),
        Some(other) => bail!("unknown command '{}'\n{}", other, USAGE),
        None => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}

const USAGE: &str = "\
taskquest <command>

commands:
    add <title> [low|medium|high]   create a task
    list                            list pending tasks
    done <id-prefix>                complete a task
    stats                           show points, streak, and tier
    achievements                    show the achievement catalog";

fn add(manager: &TaskManager, args: &[String]) -> Result<()> {
    let Some(title) = args.first() else {
        bail!("usage: taskquest add <title> [low|medium|high]");
    };

    let mut task = Task::new(title.clone());
    if let Some(priority) = args.get(1) {
        task.priority = Priority::from_str(priority)
            .with_context(|| format!("unknown priority '{}'", priority))?;
    }

    manager.create_task(&task)?;
    println!("added {} ({})", task.title, short_id(&task.id));
    Ok(())
}

fn list(manager: &TaskManager) -> Result<()> {
    let tasks = manager.list_tasks(Some(false))?;
    if tasks.is_empty() {
        println!("nothing to do");
        return Ok(());
    }

    for task in tasks {
        let due = task
            .due_date
            .map(|d| format!(" (due {})", d))
            .unwrap_or_default();
        println!(
            "{}  [{}] {}{}",
            short_id(&task.id),
            task.priority,
            task.title,
            due
        );
    }
    Ok(())
}

fn done(manager: &TaskManager, args: &[String]) -> Result<()> {
    let Some(prefix) = args.first() else {
        bail!("usage: taskquest done <id-prefix>");
    };

    let id = resolve_task(manager, prefix)?;
    let unlocked = manager.complete_task(id)?;

    println!("done");
    for achievement in unlocked {
        println!(
            "{} achievement unlocked: {} (+{} points)",
            achievement.icon, achievement.name, achievement.points_reward
        );
    }
    Ok(())
}

fn stats(manager: &TaskManager) -> Result<()> {
    let engine = manager.engine();
    let Some(stats) = engine.user_stats()? else {
        println!("no activity recorded yet");
        return Ok(());
    };

    let tier = engine.current_status()?;
    println!("points:    {}", stats.total_points);
    println!("tier:      {}", tier.name);
    println!("completed: {}", stats.total_tasks_completed);
    println!("today:     {}", stats.daily_task_count);
    println!(
        "streak:    {} (best {})",
        stats.current_streak, stats.max_streak
    );

    let themes: Vec<_> = unlocked_themes(stats.total_points)
        .iter()
        .map(|t| t.name)
        .collect();
    println!("themes:    {}", themes.join(", "));
    Ok(())
}

fn achievements(manager: &TaskManager) -> Result<()> {
    let engine = manager.engine();
    for achievement in engine.achievements()? {
        let status = if achievement.is_unlocked {
            "unlocked".to_string()
        } else {
            format!(
                "{}/{}",
                engine.current_progress(&achievement.id)?,
                achievement.requirement
            )
        };
        println!(
            "{} {:<20} {:<10} {}",
            achievement.icon, achievement.name, status, achievement.description
        );
    }
    Ok(())
}

/// Resolve a task by unambiguous id prefix.
fn resolve_task(manager: &TaskManager, prefix: &str) -> Result<Uuid> {
    let matches: Vec<_> = manager
        .list_tasks(Some(false))?
        .into_iter()
        .filter(|t| t.id.to_string().starts_with(prefix))
        .collect();

    match matches.len() {
        0 => bail!("no pending task matches '{}'", prefix),
        1 => Ok(matches[0].id),
        n => bail!("'{}' is ambiguous ({} matches)", prefix, n),
    }
}

fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}
