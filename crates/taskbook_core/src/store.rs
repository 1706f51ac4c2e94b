use crate::error::AppError;
use crate::model::Task;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Line printed by [`render_list`] when the collection is empty.
pub const EMPTY_LIST_MESSAGE: &str = "no tasks";

/// Next id for a collection: one past the highest id ever handed out that is
/// still present, or 1 for an empty collection. Ids are never reused.
pub fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
}

/// Append a new pending task. The text is stored as given; only
/// whitespace-only input is rejected.
pub fn add(tasks: &mut Vec<Task>, text: &str) -> Result<Task, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::invalid_input("text is required"));
    }

    let created_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|err| AppError::invalid_data(err.to_string()))?;

    let task = Task {
        id: next_id(tasks),
        text: text.to_string(),
        completed: false,
        created_at,
    };

    tasks.push(task.clone());
    Ok(task)
}

/// Render one line per task in insertion order, `[x] 3 - text` style.
/// An empty collection renders as the single [`EMPTY_LIST_MESSAGE`] line.
pub fn render_list(tasks: &[Task]) -> Vec<String> {
    if tasks.is_empty() {
        return vec![EMPTY_LIST_MESSAGE.to_string()];
    }

    tasks
        .iter()
        .map(|task| {
            let marker = if task.completed { 'x' } else { ' ' };
            format!("[{marker}] {} - {}", task.id, task.text)
        })
        .collect()
}

/// Mark the matching task completed and return a copy of it. Returns `None`
/// and leaves the collection untouched when no task carries the id.
/// Completing an already-completed task is a successful no-op.
pub fn mark_done(tasks: &mut [Task], id: u64) -> Option<Task> {
    let task = tasks.iter_mut().find(|task| task.id == id)?;
    task.completed = true;
    Some(task.clone())
}

/// Flip the completed flag both ways. `None` when the id is absent.
pub fn toggle(tasks: &mut [Task], id: u64) -> Option<Task> {
    let task = tasks.iter_mut().find(|task| task.id == id)?;
    task.completed = !task.completed;
    Some(task.clone())
}

/// Remove and return the matching task. `None` when the id is absent.
pub fn delete(tasks: &mut Vec<Task>, id: u64) -> Option<Task> {
    let index = tasks.iter().position(|task| task.id == id)?;
    Some(tasks.remove(index))
}

/// Drop every completed task, keeping the rest in order. Returns how many
/// were removed.
pub fn clear_completed(tasks: &mut Vec<Task>) -> usize {
    let before = tasks.len();
    tasks.retain(|task| !task.completed);
    before - tasks.len()
}
