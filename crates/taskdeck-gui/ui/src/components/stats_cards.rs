use yew::{Html, Properties, function_component, html};

use crate::app::filters::TaskStats;

#[derive(Properties, PartialEq)]
pub struct StatsCardsProps {
    pub stats: TaskStats,
}

#[function_component(StatsCards)]
pub fn stats_cards(props: &StatsCardsProps) -> Html {
    html! {
        <div class="stats">
            <div class="stat">
                <div class="stat-value">{ props.stats.total }</div>
                <div class="stat-label">{ "Total Tasks" }</div>
            </div>
            <div class="stat">
                <div class="stat-value done">{ props.stats.completed }</div>
                <div class="stat-label">{ "Completed" }</div>
            </div>
            <div class="stat">
                <div class="stat-value open">{ props.stats.pending }</div>
                <div class="stat-label">{ "Pending" }</div>
            </div>
        </div>
    }
}
