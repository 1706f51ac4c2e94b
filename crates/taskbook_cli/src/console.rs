//! The line-oriented console front end. Holds the task list in memory only;
//! nothing is persisted and the list is lost on exit.

use std::collections::HashMap;
use std::io::{self, BufRead};

use taskbook_core::error::AppError;
use taskbook_core::model::Task;
use taskbook_core::store;

const FAREWELL: &str = "bye";

/// Read-evaluate-print loop over stdin. Aliases map an extra keyword onto
/// one of the built-in commands (e.g. `ls` -> `list`). Returns once the
/// user quits or input ends; both are a graceful exit.
pub fn run(aliases: &HashMap<String, String>) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    let mut input = String::new();
    let mut tasks: Vec<Task> = Vec::new();

    loop {
        input.clear();
        let bytes = stdin_lock
            .read_line(&mut input)
            .map_err(|err| AppError::io(err.to_string()))?;

        if bytes == 0 {
            println!("{FAREWELL}");
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if !handle_line(&mut tasks, aliases, line) {
            break;
        }
    }

    Ok(())
}

/// Dispatch one command line. Returns `false` when the user quit.
fn handle_line(tasks: &mut Vec<Task>, aliases: &HashMap<String, String>, line: &str) -> bool {
    let (keyword_raw, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest),
        None => (line, ""),
    };

    let mut keyword = keyword_raw.to_ascii_lowercase();
    if let Some(target) = aliases.get(&keyword) {
        keyword = target.to_ascii_lowercase();
    }

    match keyword.as_str() {
        "add" => {
            // The argument is the rest of the line, joined with single spaces.
            let text = rest.split_whitespace().collect::<Vec<_>>().join(" ");
            match store::add(tasks, &text) {
                Ok(_) => println!("task added"),
                Err(err) => report(&err),
            }
        }
        "list" => {
            for line in store::render_list(tasks) {
                println!("{line}");
            }
        }
        "done" => match parse_id(rest) {
            Ok(id) => match store::mark_done(tasks, id) {
                Some(task) => println!("task {} done", task.id),
                None => report(&AppError::not_found(format!("no task with id {id}"))),
            },
            Err(err) => report(&err),
        },
        "help" => print_help(),
        "quit" => {
            println!("{FAREWELL}");
            return false;
        }
        _ => report(&AppError::invalid_input(format!(
            "unknown command '{keyword_raw}'"
        ))),
    }

    true
}

fn parse_id(rest: &str) -> Result<u64, AppError> {
    let token = rest
        .split_whitespace()
        .next()
        .ok_or_else(|| AppError::invalid_input("done requires an id"))?;
    token
        .parse::<u64>()
        .map_err(|_| AppError::invalid_input(format!("'{token}' is not a number")))
}

fn report(err: &AppError) {
    eprintln!("ERROR: {err}");
}

fn print_help() {
    println!("commands:");
    println!("  add <text>   add a task");
    println!("  list         list tasks");
    println!("  done <id>    mark a task completed");
    println!("  help         show this message");
    println!("  quit         leave the console");
}
