use std::env;
use std::process;

use tasktrack::config::{self, Command, Config};
use tasktrack::manager::{TaskError, TaskManager, TaskQuery};
use tasktrack::task::{Task, TaskId};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args: Vec<String> = env::args().collect();
    let cli = config::parse_args(args);

    if cli.help {
        print_help();
        return;
    }

    if cli.version {
        println!("tasktrack {}", VERSION);
        return;
    }

    let config = Config::load(&cli);

    // Default command is List if none specified
    let command = cli.command.clone().unwrap_or(Command::List);

    let result = match command {
        Command::List => cmd_list(&config),
        Command::Add => cmd_add(&config, &cli),
        Command::Done => cmd_done(&config, &cli),
        Command::Reopen => cmd_reopen(&config, &cli),
        Command::Toggle => cmd_toggle(&config, &cli),
        Command::Remove => cmd_remove(&config, &cli),
        Command::Due => cmd_due(&config, &cli),
        Command::Retitle => cmd_retitle(&config, &cli),
        Command::Status => cmd_status(&config, &cli),
        Command::Sort => cmd_sort(&config),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn print_help() {
    println!(
        r#"tasktrack - minimal personal task tracker

USAGE:
    tasktrack [OPTIONS] [COMMAND]

COMMANDS:
    list                    List all tasks (default)
    add <title>             Add a new task
                            Use --desc <TEXT> and --due <YYYY-MM-DD> for details
    done <id>               Mark a task complete
    reopen <id>             Mark a task pending again
    toggle <id>             Flip a task between pending and complete
    remove <id>             Remove a task
    due <id> <YYYY-MM-DD>   Set a task's due date
    retitle <id> <title>    Replace a task's title
    status <pending|complete>  List tasks with the given status
    sort                    List tasks in priority order (most urgent first)

OPTIONS:
    -h, --help           Show this help message
    -V, --version        Show version
    -c, --config <PATH>  Path to config file (default: tasktrack.toml)
    -f, --file <PATH>    Path to tasks file (default: tasks.json)
    --desc <TEXT>        Description for 'add'
    --due <YYYY-MM-DD>   Due date for 'add'

EXAMPLES:
    tasktrack add "Buy milk" --due 2026-09-01
    tasktrack done 1
    tasktrack sort
    tasktrack -f work.json list
"#
    );
}

fn load_manager(config: &Config) -> Result<TaskManager, String> {
    TaskManager::load(&config.tasks_file).map_err(|e| e.to_string())
}

/// One rendered line per task: display form, due date, priority rank.
fn render_task(task: &Task) -> String {
    match task.due_date() {
        Some(due) => {
            let overdue = if task.is_overdue() { ", OVERDUE" } else { "" };
            format!("{} (due {}, {}{})", task, due, task.priority(), overdue)
        }
        None => format!("{} ({})", task, task.priority()),
    }
}

/// Parse the positional id argument for id-taking subcommands.
fn parse_id(cli: &config::CliArgs, usage: &str) -> Result<TaskId, String> {
    let raw = cli.positional.first().ok_or_else(|| usage.to_string())?;
    raw.parse::<TaskId>()
        .map_err(|_| format!("invalid task id: {}", raw))
}

/// List all tasks in insertion order.
fn cmd_list(config: &Config) -> Result<(), String> {
    let mgr = load_manager(config)?;
    match mgr.get_tasks() {
        Ok(tasks) => {
            for task in tasks {
                println!("{}", render_task(task));
            }
            Ok(())
        }
        Err(TaskError::Empty) => {
            println!("{}", TaskError::Empty);
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Add a new task.
fn cmd_add(config: &Config, cli: &config::CliArgs) -> Result<(), String> {
    let title = cli
        .positional
        .first()
        .ok_or("Usage: tasktrack add <title> [--desc TEXT] [--due YYYY-MM-DD]")?;

    let mut mgr = load_manager(config)?;
    let mut task = Task::new(mgr.allocate_id(), title.as_str());
    if let Some(ref desc) = cli.description {
        task.update_description(desc.as_str());
    }
    if let Some(ref due) = cli.due {
        task.set_due_date(due)
            .map_err(|e| format!("invalid due date {:?}: {}", due, e))?;
    }
    task.mark_incomplete();

    let id = mgr.add_task(task).map_err(|e| e.to_string())?;
    println!("Added task #{}: {}", id, title);
    Ok(())
}

/// Mark a task complete.
fn cmd_done(config: &Config, cli: &config::CliArgs) -> Result<(), String> {
    let id = parse_id(cli, "Usage: tasktrack done <id>")?;
    let task = edit_task(config, id, |t| t.mark_complete())?;
    println!("Completed: {}", render_task(&task));
    Ok(())
}

/// Mark a task pending again.
fn cmd_reopen(config: &Config, cli: &config::CliArgs) -> Result<(), String> {
    let id = parse_id(cli, "Usage: tasktrack reopen <id>")?;
    let task = edit_task(config, id, |t| t.mark_incomplete())?;
    println!("Reopened: {}", render_task(&task));
    Ok(())
}

/// Flip a task between pending and complete.
fn cmd_toggle(config: &Config, cli: &config::CliArgs) -> Result<(), String> {
    let id = parse_id(cli, "Usage: tasktrack toggle <id>")?;
    let task = edit_task(config, id, |t| t.toggle_status())?;
    println!("Toggled: {}", render_task(&task));
    Ok(())
}

/// Remove a task.
fn cmd_remove(config: &Config, cli: &config::CliArgs) -> Result<(), String> {
    let id = parse_id(cli, "Usage: tasktrack remove <id>")?;
    let mut mgr = load_manager(config)?;
    let task = mgr.get_task_by_id(id).map_err(|e| e.to_string())?.clone();
    mgr.del_task(&task).map_err(|e| e.to_string())?;
    println!("Removed task #{}: {}", id, task.title());
    Ok(())
}

/// Set a task's due date.
fn cmd_due(config: &Config, cli: &config::CliArgs) -> Result<(), String> {
    let usage = "Usage: tasktrack due <id> <YYYY-MM-DD>";
    let id = parse_id(cli, usage)?;
    let date = cli.positional.get(1).ok_or(usage)?.clone();

    let mut mgr = load_manager(config)?;
    let mut task = mgr.get_task_by_id(id).map_err(|e| e.to_string())?.clone();
    task.set_due_date(&date)
        .map_err(|e| format!("invalid due date {:?}: {}", date, e))?;
    mgr.update_task(task.clone(), &TaskQuery::Id(id))
        .map_err(|e| e.to_string())?;
    println!("Updated: {}", render_task(&task));
    Ok(())
}

/// Replace a task's title.
fn cmd_retitle(config: &Config, cli: &config::CliArgs) -> Result<(), String> {
    let usage = "Usage: tasktrack retitle <id> <title>";
    let id = parse_id(cli, usage)?;
    let title = cli.positional.get(1).ok_or(usage)?.clone();

    let task = edit_task(config, id, |t| t.update_title(title.as_str()))?;
    println!("Updated: {}", render_task(&task));
    Ok(())
}

/// List tasks with a given status.
fn cmd_status(config: &Config, cli: &config::CliArgs) -> Result<(), String> {
    let status = cli
        .positional
        .first()
        .ok_or("Usage: tasktrack status <pending|complete>")?;

    let mgr = load_manager(config)?;
    match mgr.get_task_by_status(status) {
        Ok(tasks) => {
            if tasks.is_empty() {
                println!("No {} tasks.", status.to_lowercase());
            } else {
                for task in tasks {
                    println!("{}", render_task(task));
                }
            }
            Ok(())
        }
        Err(TaskError::Empty) => {
            println!("{}", TaskError::Empty);
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// List tasks in priority order, most urgent first.
fn cmd_sort(config: &Config) -> Result<(), String> {
    let mgr = load_manager(config)?;
    if mgr.is_empty() {
        println!("{}", TaskError::Empty);
        return Ok(());
    }
    for task in mgr.sort_tasks_by_priority() {
        println!("{}", render_task(&task));
    }
    Ok(())
}

/// Fetch a task by id, apply `edit`, and write it back by id.
fn edit_task<F>(config: &Config, id: TaskId, edit: F) -> Result<Task, String>
where
    F: FnOnce(&mut Task),
{
    let mut mgr = load_manager(config)?;
    let mut task = mgr.get_task_by_id(id).map_err(|e| e.to_string())?.clone();
    edit(&mut task);
    mgr.update_task(task.clone(), &TaskQuery::Id(id))
        .map_err(|e| e.to_string())?;
    Ok(task)
}
