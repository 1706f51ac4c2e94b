use crate::error::AppError;
use crate::model::Task;
use std::path::{Path, PathBuf};

const STORE_FILE_NAME: &str = "tasks.json";

/// Result of a tolerant load: the usable collection plus the error that was
/// swallowed to get there, if any, so the front end can log it.
#[derive(Debug, Clone)]
pub struct StoreLoad {
    pub tasks: Vec<Task>,
    pub error: Option<AppError>,
}

pub fn store_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var("TASKBOOK_STORE_PATH")
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::invalid_data("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata)
            .join("taskbook")
            .join(STORE_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::invalid_data("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("taskbook")
            .join(STORE_FILE_NAME))
    }
}

/// Strict load. A missing file is an empty collection; unreadable or
/// unparseable content is an error.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, AppError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|err| AppError::io(err.to_string()))?;
    let tasks: Vec<Task> =
        serde_json::from_str(&content).map_err(|err| AppError::invalid_data(err.to_string()))?;

    Ok(tasks)
}

/// Tolerant load for the front ends: a corrupt store degrades to an empty
/// collection instead of failing the run, with the original error carried
/// alongside for a warning line.
pub fn load_tasks_with_fallback(path: &Path) -> StoreLoad {
    match load_tasks(path) {
        Ok(tasks) => StoreLoad { tasks, error: None },
        Err(err) => StoreLoad {
            tasks: Vec::new(),
            error: Some(err),
        },
    }
}

/// Rewrite the whole store. The persisted form is a plain JSON array of
/// task objects.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| AppError::io(err.to_string()))?;
    }

    let content =
        serde_json::to_string_pretty(tasks).map_err(|err| AppError::invalid_data(err.to_string()))?;
    std::fs::write(path, content).map_err(|err| AppError::io(err.to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, permissions).map_err(|err| AppError::io(err.to_string()))?;
    }

    Ok(())
}
