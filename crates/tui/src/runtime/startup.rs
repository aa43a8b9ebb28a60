//! Requests issued once when the TUI starts.

use inventory_config::Config;

use crate::action::Action;

/// Initial requests: the API root (unless disabled) and the first project page.
pub fn startup_actions(config: &Config) -> Vec<Action> {
    let mut actions = Vec::with_capacity(2);
    if config.fetch_root_on_startup {
        actions.push(Action::LoadRoot);
    }
    actions.push(Action::LoadProjects { page: 1 });
    actions
}
