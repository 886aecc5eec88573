use taskdeck_gui_shared::{TaskDto, TaskUpdateArgs};
use uuid::Uuid;
use yew::{Callback, Html, Properties, function_component, html};

use super::TaskItem;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub tasks: Vec<TaskDto>,
    pub on_toggle: Callback<Uuid>,
    pub on_delete: Callback<Uuid>,
    pub on_update: Callback<TaskUpdateArgs>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    if props.tasks.is_empty() {
        return html! {
            <div class="empty-state">
                { "No tasks match the current filters." }
            </div>
        };
    }

    html! {
        <div class="task-list">
            {
                for props.tasks.iter().cloned().map(|task| html! {
                    <TaskItem
                        key={task.id.to_string()}
                        task={task}
                        on_toggle={props.on_toggle.clone()}
                        on_delete={props.on_delete.clone()}
                        on_update={props.on_update.clone()}
                    />
                })
            }
        </div>
    }
}
