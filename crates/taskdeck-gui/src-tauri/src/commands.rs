use taskdeck_gui_shared::{
    TaskCreate, TaskDto, TaskIdArg, TaskUpdateArgs, TasksByPriorityArgs, TasksByStatusArgs,
    UiLogArgs,
};
use tauri::State;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::state::AppState;

fn err_to_string(err: taskdeck_core::error::Error) -> String {
    err.to_string()
}

#[tauri::command]
#[instrument(skip(state), fields(request_id = ?request_id))]
pub async fn tasks_list(
    state: State<'_, AppState>,
    request_id: Option<String>,
) -> Result<Vec<TaskDto>, String> {
    info!(request_id = ?request_id, "tasks_list command invoked");
    let result = state.list();
    if let Err(err) = result.as_ref() {
        error!(request_id = ?request_id, error = %err, "tasks_list command failed");
    }
    result.map_err(err_to_string)
}

#[tauri::command]
#[instrument(skip(state), fields(request_id = ?request_id, completed = args.completed))]
pub async fn tasks_list_by_status(
    state: State<'_, AppState>,
    args: TasksByStatusArgs,
    request_id: Option<String>,
) -> Result<Vec<TaskDto>, String> {
    info!(request_id = ?request_id, completed = args.completed, "tasks_list_by_status command invoked");
    let result = state.list_by_status(args.completed);
    if let Err(err) = result.as_ref() {
        error!(request_id = ?request_id, error = %err, "tasks_list_by_status command failed");
    }
    result.map_err(err_to_string)
}

#[tauri::command]
#[instrument(skip(state), fields(request_id = ?request_id, priority = ?args.priority))]
pub async fn tasks_list_by_priority(
    state: State<'_, AppState>,
    args: TasksByPriorityArgs,
    request_id: Option<String>,
) -> Result<Vec<TaskDto>, String> {
    info!(request_id = ?request_id, priority = ?args.priority, "tasks_list_by_priority command invoked");
    let result = state.list_by_priority(args.priority);
    if let Err(err) = result.as_ref() {
        error!(request_id = ?request_id, error = %err, "tasks_list_by_priority command failed");
    }
    result.map_err(err_to_string)
}

#[tauri::command]
#[instrument(skip(state, args), fields(request_id = ?request_id, title_len = args.title.len()))]
pub async fn task_create(
    state: State<'_, AppState>,
    args: TaskCreate,
    request_id: Option<String>,
) -> Result<Uuid, String> {
    info!(
        request_id = ?request_id,
        title_len = args.title.len(),
        has_description = args.description.is_some(),
        has_due = args.due_date.is_some(),
        "task_create command invoked"
    );
    let result = state.create(args);
    if let Err(err) = result.as_ref() {
        error!(request_id = ?request_id, error = %err, "task_create command failed");
    }
    result.map_err(err_to_string)
}

#[tauri::command]
#[instrument(skip(state, args), fields(request_id = ?request_id, id = %args.id))]
pub async fn task_update(
    state: State<'_, AppState>,
    args: TaskUpdateArgs,
    request_id: Option<String>,
) -> Result<(), String> {
    info!(request_id = ?request_id, id = %args.id, "task_update command invoked");
    let result = state.update(args);
    if let Err(err) = result.as_ref() {
        error!(request_id = ?request_id, error = %err, "task_update command failed");
    }
    result.map_err(err_to_string)
}

#[tauri::command]
#[instrument(skip(state), fields(request_id = ?request_id, id = %args.id))]
pub async fn task_delete(
    state: State<'_, AppState>,
    args: TaskIdArg,
    request_id: Option<String>,
) -> Result<(), String> {
    info!(request_id = ?request_id, id = %args.id, "task_delete command invoked");
    let result = state.delete(args.id);
    if let Err(err) = result.as_ref() {
        error!(request_id = ?request_id, error = %err, "task_delete command failed");
    }
    result.map_err(err_to_string)
}

#[tauri::command]
#[instrument(skip(state), fields(request_id = ?request_id, id = %args.id))]
pub async fn task_toggle(
    state: State<'_, AppState>,
    args: TaskIdArg,
    request_id: Option<String>,
) -> Result<(), String> {
    info!(request_id = ?request_id, id = %args.id, "task_toggle command invoked");
    let result = state.toggle(args.id);
    if let Err(err) = result.as_ref() {
        error!(request_id = ?request_id, error = %err, "task_toggle command failed");
    }
    result.map_err(err_to_string)
}

#[tauri::command]
#[instrument(fields(request_id = ?request_id, event = %args.event))]
pub async fn ui_log(args: UiLogArgs, request_id: Option<String>) -> Result<(), String> {
    info!(request_id = ?request_id, event = %args.event, detail = %args.detail, "ui interaction");
    Ok(())
}
