pub(crate) mod filters;

use taskdeck_gui_shared::{
    PriorityFilter, StatusFilter, TaskCreate, TaskDto, TaskIdArg, TaskUpdateArgs, UiLogArgs,
};
use uuid::Uuid;
use yew::{Callback, Html, function_component, html, use_effect_with, use_state};

use crate::api::{NoArgs, invoke_tauri};
use crate::components::{AddTaskForm, FilterBar, StatsCards, TaskList};

use filters::{task_stats, ui_debug, visible_tasks};

/// Top-level orchestrator: owns the task collection and the two filter
/// selectors, reloads from the backend after every mutation, and derives
/// the visible list and statistics on each render.
#[function_component(App)]
pub fn app() -> Html {
    let tasks = use_state(Vec::<TaskDto>::new);
    let status_filter = use_state(|| StatusFilter::All);
    let priority_filter = use_state(|| PriorityFilter::All);
    let busy = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let refresh_tick = use_state(|| 0_u64);

    {
        let tasks = tasks.clone();
        let error = error.clone();
        use_effect_with(*refresh_tick, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match invoke_tauri::<Vec<TaskDto>, _>("tasks_list", &NoArgs {}).await {
                    Ok(list) => {
                        tracing::debug!(total = list.len(), "loaded tasks");
                        tasks.set(list);
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "tasks_list failed");
                        error.set(Some(format!("Loading tasks failed: {err}")));
                    }
                }
            });

            || ()
        });
    }

    let on_create = {
        let refresh_tick = refresh_tick.clone();
        let busy = busy.clone();
        let error = error.clone();
        Callback::from(move |create: TaskCreate| {
            let refresh_tick = refresh_tick.clone();
            let busy = busy.clone();
            let error = error.clone();
            busy.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                ui_debug("invoke.task_create.begin", "calling tauri command task_create");
                match invoke_tauri::<Uuid, _>("task_create", &create).await {
                    Ok(id) => {
                        tracing::debug!(%id, "task created");
                        error.set(None);
                        refresh_tick.set((*refresh_tick).saturating_add(1));
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "task_create failed");
                        let _ = invoke_tauri::<(), _>(
                            "ui_log",
                            &UiLogArgs {
                                event: "task_create.error".to_string(),
                                detail: err.clone(),
                            },
                        )
                        .await;
                        error.set(Some(err));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_toggle = {
        let refresh_tick = refresh_tick.clone();
        let error = error.clone();
        Callback::from(move |id: Uuid| {
            let refresh_tick = refresh_tick.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match invoke_tauri::<(), _>("task_toggle", &TaskIdArg { id }).await {
                    Ok(()) => {
                        error.set(None);
                        refresh_tick.set((*refresh_tick).saturating_add(1));
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "task_toggle failed");
                        error.set(Some(err));
                    }
                }
            });
        })
    };

    let on_delete = {
        let refresh_tick = refresh_tick.clone();
        let error = error.clone();
        Callback::from(move |id: Uuid| {
            let refresh_tick = refresh_tick.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match invoke_tauri::<(), _>("task_delete", &TaskIdArg { id }).await {
                    Ok(()) => {
                        error.set(None);
                        refresh_tick.set((*refresh_tick).saturating_add(1));
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "task_delete failed");
                        error.set(Some(err));
                    }
                }
            });
        })
    };

    let on_update = {
        let refresh_tick = refresh_tick.clone();
        let error = error.clone();
        Callback::from(move |update: TaskUpdateArgs| {
            let refresh_tick = refresh_tick.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                ui_debug("invoke.task_update.begin", "calling tauri command task_update");
                match invoke_tauri::<(), _>("task_update", &update).await {
                    Ok(()) => {
                        error.set(None);
                        refresh_tick.set((*refresh_tick).saturating_add(1));
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "task_update failed");
                        let _ = invoke_tauri::<(), _>(
                            "ui_log",
                            &UiLogArgs {
                                event: "task_update.error".to_string(),
                                detail: err.clone(),
                            },
                        )
                        .await;
                        error.set(Some(err));
                    }
                }
            });
        })
    };

    let on_status_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |next: StatusFilter| status_filter.set(next))
    };

    let on_priority_change = {
        let priority_filter = priority_filter.clone();
        Callback::from(move |next: PriorityFilter| priority_filter.set(next))
    };

    let on_dismiss_error = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    let visible = visible_tasks(&tasks, *status_filter, *priority_filter);
    let stats = task_stats(&tasks);

    html! {
        <div class="page">
            <header class="masthead">
                <h1>{ "Taskdeck" }</h1>
            </header>

            {
                if let Some(message) = (*error).clone() {
                    html! {
                        <div class="banner error" onclick={on_dismiss_error}>
                            { message }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <StatsCards stats={stats} />

            <section class="panel">
                <div class="header">{ "Add New Task" }</div>
                <AddTaskForm busy={*busy} on_create={on_create} />
            </section>

            <section class="panel">
                <FilterBar
                    status={*status_filter}
                    priority={*priority_filter}
                    on_status_change={on_status_change}
                    on_priority_change={on_priority_change}
                />
            </section>

            <section class="panel">
                <div class="header">{ format!("Tasks ({})", visible.len()) }</div>
                <TaskList
                    tasks={visible}
                    on_toggle={on_toggle}
                    on_delete={on_delete}
                    on_update={on_update}
                />
            </section>
        </div>
    }
}
