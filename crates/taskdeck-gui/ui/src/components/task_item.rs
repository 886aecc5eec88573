use chrono::{DateTime, NaiveDate, Utc};
use taskdeck_gui_shared::{TaskDto, TaskPatch, TaskPriority, TaskUpdateArgs};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{Callback, Html, Properties, TargetCast, function_component, html, use_state};

#[derive(Properties, PartialEq)]
pub struct TaskItemProps {
    pub task: TaskDto,
    pub on_toggle: Callback<uuid::Uuid>,
    pub on_delete: Callback<uuid::Uuid>,
    pub on_update: Callback<TaskUpdateArgs>,
}

#[derive(Clone, PartialEq)]
struct EditDraft {
    title: String,
    description: String,
    priority: TaskPriority,
    due_date: String,
    error: Option<String>,
}

impl EditDraft {
    fn from_task(task: &TaskDto) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority,
            due_date: task.due_date.clone().unwrap_or_default(),
            error: None,
        }
    }
}

/// One task row: checkbox toggle, badges, delete with confirmation, and
/// an inline edit mode holding its draft until save or cancel.
#[function_component(TaskItem)]
pub fn task_item(props: &TaskItemProps) -> Html {
    let draft = use_state(|| Option::<EditDraft>::None);
    let id = props.task.id;

    if let Some(current) = (*draft).clone() {
        return edit_view(props, &draft, current);
    }

    let on_toggle_click = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(id))
    };

    let on_edit_click = {
        let draft = draft.clone();
        let task = props.task.clone();
        Callback::from(move |_| draft.set(Some(EditDraft::from_task(&task))))
    };

    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_| {
            let confirmed = web_sys::window()
                .map(|window| {
                    window
                        .confirm_with_message("Are you sure you want to delete this task?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if confirmed {
                on_delete.emit(id);
            }
        })
    };

    let row_class = if props.task.completed {
        "task-row done"
    } else {
        "task-row"
    };
    let priority_class = match props.task.priority {
        TaskPriority::Low => "badge priority-low",
        TaskPriority::Medium => "badge priority-medium",
        TaskPriority::High => "badge priority-high",
    };

    html! {
        <div class={row_class}>
            <button class="toggle" onclick={on_toggle_click}>
                { if props.task.completed { "✓" } else { "" } }
            </button>
            <div class="task-body">
                <div class="task-title">{ &props.task.title }</div>
                {
                    if let Some(description) = props.task.description.as_ref() {
                        html! { <div class="task-description">{ description }</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="task-meta">
                    <span class={priority_class}>{ props.task.priority.label() }</span>
                    { due_badge(&props.task) }
                    <span class="badge muted">
                        { format!("Created {}", format_created(props.task.created_at)) }
                    </span>
                </div>
            </div>
            <div class="task-actions">
                <button class="action" onclick={on_edit_click}>{ "Edit" }</button>
                <button class="action danger" onclick={on_delete_click}>{ "Delete" }</button>
            </div>
        </div>
    }
}

fn edit_view(
    props: &TaskItemProps,
    draft: &yew::UseStateHandle<Option<EditDraft>>,
    current: EditDraft,
) -> Html {
    let id = props.task.id;

    let on_title_input = {
        let draft = draft.clone();
        let current = current.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = current.clone();
            next.title = input.value();
            next.error = None;
            draft.set(Some(next));
        })
    };

    let on_description_input = {
        let draft = draft.clone();
        let current = current.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = current.clone();
            next.description = input.value();
            draft.set(Some(next));
        })
    };

    let on_priority_change = {
        let draft = draft.clone();
        let current = current.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(parsed) = TaskPriority::parse(&select.value()) {
                let mut next = current.clone();
                next.priority = parsed;
                draft.set(Some(next));
            }
        })
    };

    let on_due_date_input = {
        let draft = draft.clone();
        let current = current.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = current.clone();
            next.due_date = input.value();
            draft.set(Some(next));
        })
    };

    let on_save_click = {
        let draft = draft.clone();
        let current = current.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |_| {
            if current.title.trim().is_empty() {
                let mut next = current.clone();
                next.error = Some("Task title cannot be empty".to_string());
                draft.set(Some(next));
                return;
            }

            // The edit form holds every field, so the patch carries them
            // all; an emptied description or due date clears the field.
            on_update.emit(TaskUpdateArgs {
                id,
                patch: TaskPatch {
                    title: Some(current.title.clone()),
                    description: Some(current.description.clone()),
                    completed: None,
                    priority: Some(current.priority),
                    due_date: Some(current.due_date.clone()),
                },
            });
            draft.set(None);
        })
    };

    let on_cancel_click = {
        let draft = draft.clone();
        Callback::from(move |_| draft.set(None))
    };

    html! {
        <div class="task-row editing">
            <div class="task-body">
                {
                    if let Some(message) = current.error.clone() {
                        html! { <div class="field-error">{ message }</div> }
                    } else {
                        html! {}
                    }
                }
                <input type="text" value={current.title.clone()} oninput={on_title_input} />
                <textarea value={current.description.clone()} oninput={on_description_input} />
                <div class="add-form-row">
                    <select onchange={on_priority_change}>
                        {
                            for [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High]
                                .into_iter()
                                .map(|option| html! {
                                    <option
                                        value={option.as_str()}
                                        selected={current.priority == option}
                                    >
                                        { option.label() }
                                    </option>
                                })
                        }
                    </select>
                    <input type="date" value={current.due_date.clone()} oninput={on_due_date_input} />
                </div>
            </div>
            <div class="task-actions">
                <button class="action" onclick={on_save_click}>{ "Save" }</button>
                <button class="action" onclick={on_cancel_click}>{ "Cancel" }</button>
            </div>
        </div>
    }
}

fn due_badge(task: &TaskDto) -> Html {
    let Some(raw) = task.due_date.as_ref() else {
        return html! {};
    };

    let overdue = !task.completed
        && NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|due| due < Utc::now().date_naive())
            .unwrap_or(false);
    let class = if overdue { "badge overdue" } else { "badge" };

    html! {
        <span class={class}>
            { format!("Due {raw}") }
        </span>
    }
}

fn format_created(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|stamp| stamp.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
