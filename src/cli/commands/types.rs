use crate::cli::commands::open_tracker;
use crate::cli::parser::{CategoryArg, Commands, TypesAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Category;
use crate::ui::messages::{info, success};
use crate::utils::colors::{RESET, color_for_points};
use crate::utils::fmt_points;
use crate::utils::table::{Column, Table};

impl From<CategoryArg> for Category {
    fn from(c: CategoryArg) -> Self {
        match c {
            CategoryArg::Positive => Category::Positive,
            CategoryArg::Negative => Category::Negative,
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Types { action } = cmd else {
        return Ok(());
    };

    let mut tracker = open_tracker(cfg)?;

    match action {
        TypesAction::List { category } => {
            let state = tracker.state();
            let types = state.catalog.list(category.map(Category::from));
            if types.is_empty() {
                info("No action types.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 4),
                Column::new("NAME", 24),
                Column::new("POINTS", 8),
                Column::new("CATEGORY", 9),
                Column::new("", 10),
            ]);
            for t in types {
                let mut tags = Vec::new();
                if t.is_default {
                    tags.push("built-in");
                }
                if state.settings.quick_actions.contains(&t.id) {
                    tags.push("⚡");
                }
                table.add_row(vec![
                    t.id.to_string(),
                    t.name.clone(),
                    format!("{}{}{}", color_for_points(t.value), fmt_points(t.value, true), RESET),
                    t.category.as_str().to_string(),
                    tags.join(" "),
                ]);
            }
            print!("{}", table.render());
        }

        TypesAction::Add {
            name,
            value,
            category,
        } => {
            let created = tracker.create_action_type((*category).into(), name, *value)?;
            success(format!(
                "Created action type #{} '{}' ({} points)",
                created.id,
                created.name,
                fmt_points(created.value, true)
            ));
        }

        TypesAction::Edit { id, name, value } => {
            let current = tracker
                .state()
                .catalog
                .resolve(*id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("action type #{id}")))?;

            let new_name = name.clone().unwrap_or(current.name);
            let new_value = value.unwrap_or(current.value.abs());

            let edited = tracker.edit_action_type(*id, &new_name, new_value)?;
            success(format!(
                "Updated action type #{} '{}' ({} points)",
                edited.id,
                edited.name,
                fmt_points(edited.value, true)
            ));
        }

        TypesAction::Del { id } => {
            let removed = tracker.delete_action_type(*id)?;
            success(format!(
                "Deleted action type #{} '{}'. Logged history keeps its entries.",
                removed.id, removed.name
            ));
        }
    }

    Ok(())
}
