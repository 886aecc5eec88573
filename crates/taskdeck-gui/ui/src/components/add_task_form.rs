use taskdeck_gui_shared::{TaskCreate, TaskPriority};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};
use yew::{Callback, Html, Properties, TargetCast, function_component, html, use_state};

#[derive(Properties, PartialEq)]
pub struct AddTaskFormProps {
    pub busy: bool,
    pub on_create: Callback<TaskCreate>,
}

/// Creation form. Blocks empty titles before they reach the backend and
/// resets itself once a task has been handed off.
#[function_component(AddTaskForm)]
pub fn add_task_form(props: &AddTaskFormProps) -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);
    let priority = use_state(|| TaskPriority::Medium);
    let due_date = use_state(String::new);
    let error = use_state(|| Option::<String>::None);

    let on_title_input = {
        let title = title.clone();
        let error = error.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
            error.set(None);
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_priority_change = {
        let priority = priority.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(parsed) = TaskPriority::parse(&select.value()) {
                priority.set(parsed);
            }
        })
    };

    let on_due_date_input = {
        let due_date = due_date.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            due_date.set(input.value());
        })
    };

    let on_submit = {
        let title = title.clone();
        let description = description.clone();
        let priority = priority.clone();
        let due_date = due_date.clone();
        let error = error.clone();
        let on_create = props.on_create.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if title.trim().is_empty() {
                error.set(Some("Task title cannot be empty".to_string()));
                return;
            }

            on_create.emit(TaskCreate {
                title: (*title).clone(),
                description: optional_text(&description),
                priority: *priority,
                due_date: optional_text(&due_date),
            });

            title.set(String::new());
            description.set(String::new());
            priority.set(TaskPriority::Medium);
            due_date.set(String::new());
            error.set(None);
        })
    };

    html! {
        <form class="add-form" onsubmit={on_submit}>
            {
                if let Some(message) = (*error).clone() {
                    html! { <div class="field-error">{ message }</div> }
                } else {
                    html! {}
                }
            }
            <input
                type="text"
                placeholder="What needs doing?"
                value={(*title).clone()}
                oninput={on_title_input}
            />
            <textarea
                placeholder="Description (optional)"
                value={(*description).clone()}
                oninput={on_description_input}
            />
            <div class="add-form-row">
                <select onchange={on_priority_change}>
                    {
                        for [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High]
                            .into_iter()
                            .map(|option| html! {
                                <option
                                    value={option.as_str()}
                                    selected={*priority == option}
                                >
                                    { option.label() }
                                </option>
                            })
                    }
                </select>
                <input
                    type="date"
                    value={(*due_date).clone()}
                    oninput={on_due_date_input}
                />
                <button type="submit" disabled={props.busy}>
                    { if props.busy { "Adding..." } else { "Add Task" } }
                </button>
            </div>
        </form>
    }
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
