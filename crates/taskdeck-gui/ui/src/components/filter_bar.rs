use taskdeck_gui_shared::{PriorityFilter, StatusFilter};
use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub on_status_change: Callback<StatusFilter>,
    pub on_priority_change: Callback<PriorityFilter>,
}

const STATUS_CHOICES: [(StatusFilter, &str); 3] = [
    (StatusFilter::All, "All Tasks"),
    (StatusFilter::Pending, "Pending"),
    (StatusFilter::Completed, "Completed"),
];

const PRIORITY_CHOICES: [(PriorityFilter, &str); 4] = [
    (PriorityFilter::All, "All Priorities"),
    (PriorityFilter::High, "High"),
    (PriorityFilter::Medium, "Medium"),
    (PriorityFilter::Low, "Low"),
];

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let status_chip = |choice: StatusFilter, label: &str| {
        let active = props.status == choice;
        let class = if active { "chip active" } else { "chip" };
        let on_status_change = props.on_status_change.clone();
        html! {
            <button class={class} onclick={move |_| on_status_change.emit(choice)}>
                { label }
            </button>
        }
    };

    let priority_chip = |choice: PriorityFilter, label: &str| {
        let active = props.priority == choice;
        let class = if active { "chip active" } else { "chip" };
        let on_priority_change = props.on_priority_change.clone();
        html! {
            <button class={class} onclick={move |_| on_priority_change.emit(choice)}>
                { label }
            </button>
        }
    };

    html! {
        <div class="filter-bar">
            <span class="filter-label">{ "Filter Tasks:" }</span>
            <div class="chip-group">
                { for STATUS_CHOICES.iter().map(|(choice, label)| status_chip(*choice, label)) }
            </div>
            <div class="chip-group">
                { for PRIORITY_CHOICES.iter().map(|(choice, label)| priority_chip(*choice, label)) }
            </div>
        </div>
    }
}
