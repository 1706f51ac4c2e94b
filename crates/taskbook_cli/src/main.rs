use clap::Parser;
use taskbook_cli::cli::{Cli, Command};
use taskbook_cli::console;
use taskbook_core::config::{self, Palette};
use taskbook_core::error::AppError;
use taskbook_core::model::Task;
use taskbook_core::storage::json_store;
use taskbook_core::store;

fn print_task_json(task: &Task) {
    let json = serde_json::json!({
        "id": task.id,
        "text": task.text,
        "completed": task.completed,
        "created_at": task.created_at,
    });
    println!("{json}");
}

fn print_tasks_json(tasks: &[Task]) {
    let payload: Vec<serde_json::Value> = tasks
        .iter()
        .map(|task| {
            serde_json::json!({
                "id": task.id,
                "text": task.text,
                "completed": task.completed,
                "created_at": task.created_at,
            })
        })
        .collect();
    println!("{}", serde_json::Value::Array(payload));
}

fn print_tasks_plain(tasks: &[Task], palette: &Palette) {
    let lines = store::render_list(tasks);
    if tasks.is_empty() {
        println!("{}", lines[0]);
        return;
    }

    for (task, line) in tasks.iter().zip(&lines) {
        if task.completed {
            println!("{}", palette.mutedize(line));
        } else {
            println!("{}", palette.accentize(line));
        }
    }
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

/// One-shot persisted command: load the store slot, apply one operation,
/// rewrite the slot in full.
fn run_command(cli: Cli) -> Result<(), AppError> {
    let config_load = config::load_config_with_fallback();
    if let Some(err) = &config_load.error {
        eprintln!("WARNING: {err}");
    }
    let theme = cli.theme.clone().or(config_load.config.theme);
    let palette = config::palette_for_theme(theme.as_deref());

    let path = json_store::store_path()?;
    let load = json_store::load_tasks_with_fallback(&path);
    if let Some(err) = &load.error {
        eprintln!("WARNING: {err}; starting with an empty task list");
    }
    let mut tasks = load.tasks;

    match cli.command {
        Command::Add { text } => {
            let text = match text {
                Some(value) if !value.trim().is_empty() => value,
                _ => return Err(AppError::invalid_input("text is required")),
            };

            let task = store::add(&mut tasks, &text)?;
            json_store::save_tasks(&path, &tasks)?;
            if cli.json {
                print_task_json(&task);
            } else {
                println!("Added task: {} ({})", task.text, task.id);
            }
        }
        Command::List => {
            if cli.json {
                print_tasks_json(&tasks);
            } else {
                print_tasks_plain(&tasks, &palette);
            }
        }
        Command::Done { id } => {
            let task = store::mark_done(&mut tasks, id)
                .ok_or_else(|| AppError::not_found(format!("no task with id {id}")))?;
            json_store::save_tasks(&path, &tasks)?;
            if cli.json {
                print_task_json(&task);
            } else {
                println!("Completed task: {} ({})", task.text, task.id);
            }
        }
        Command::Toggle { id } => {
            // Toggle acts on ids taken from list output; an unknown id is a
            // silent no-op rather than an error.
            if let Some(task) = store::toggle(&mut tasks, id) {
                json_store::save_tasks(&path, &tasks)?;
                let state = if task.completed { "completed" } else { "pending" };
                if cli.json {
                    print_task_json(&task);
                } else {
                    println!("Toggled task: {} ({}) -> {}", task.text, task.id, state);
                }
            }
        }
        Command::Delete { id } => {
            // Same silent no-op rule as toggle.
            if let Some(task) = store::delete(&mut tasks, id) {
                json_store::save_tasks(&path, &tasks)?;
                if cli.json {
                    print_task_json(&task);
                } else {
                    println!("Deleted task: {} ({})", task.text, task.id);
                }
            }
        }
        Command::ClearCompleted => {
            let removed = store::clear_completed(&mut tasks);
            json_store::save_tasks(&path, &tasks)?;
            if cli.json {
                println!("{}", serde_json::json!({ "removed": removed }));
            } else {
                println!("Cleared {removed} completed task(s)");
            }
        }
    }

    Ok(())
}

fn main() {
    let mut args = std::env::args_os();
    args.next();
    if args.next().is_none() {
        let config_load = config::load_config_with_fallback();
        if let Some(err) = &config_load.error {
            eprintln!("WARNING: {err}");
        }

        if let Err(err) = console::run(&config_load.config.aliases) {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
        return;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if err.use_stderr() {
                eprintln!("ERROR: {}", normalize_parse_error(err));
                std::process::exit(1);
            }
            // --help and --version render on stdout and exit cleanly.
            print!("{err}");
            return;
        }
    };

    if let Err(err) = run_command(cli) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
