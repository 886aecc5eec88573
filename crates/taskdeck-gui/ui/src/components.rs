mod add_task_form;
mod filter_bar;
mod stats_cards;
mod task_item;
mod task_list;

pub use add_task_form::AddTaskForm;
pub use filter_bar::FilterBar;
pub use stats_cards::StatsCards;
pub use task_item::TaskItem;
pub use task_list::TaskList;
