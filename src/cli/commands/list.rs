use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::action_log::LogLogic;
use crate::core::progress::ProgressEngine;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::LoggedAction;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_points, colorize_optional};
use crate::utils::fmt_points;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        now,
        limit,
        daily,
    } = cmd
    {
        let tracker = open_tracker(cfg)?;
        let state = tracker.state();

        let actions: Vec<&LoggedAction> = if *now {
            LogLogic::on_date(state, tracker.today())
        } else if let Some(p) = period {
            let (start, end) = parse_range(p)?;
            LogLogic::between(state, Some(start), Some(end))
        } else if *daily {
            LogLogic::between(state, None, None)
        } else {
            LogLogic::recent(state, limit.unwrap_or(cfg.recent_limit))
        };

        if actions.is_empty() {
            info("No logged actions for the selected period.");
            return Ok(());
        }

        if *daily {
            print_daily(&actions);
        } else {
            print_actions(&actions);
        }
    }
    Ok(())
}

fn print_actions(actions: &[&LoggedAction]) {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("DATE", 10),
        Column::new("ACTION", 22),
        Column::new("POINTS", 8),
        Column::new("NOTE", 30),
    ]);

    for a in actions {
        table.add_row(vec![
            a.id.to_string(),
            a.date_str(),
            a.snapshot.name.clone(),
            format!("{}{}{}", color_for_points(a.value()), fmt_points(a.value(), true), RESET),
            colorize_optional(a.note.as_deref().unwrap_or("--")),
        ]);
    }
    print!("{}", table.render());
}

fn print_daily(actions: &[&LoggedAction]) {
    let totals = ProgressEngine::daily_totals(actions.iter().copied());

    let mut table = Table::new(vec![
        Column::new("DATE", 10),
        Column::new("ACTIONS", 7),
        Column::new("EARNED", 8),
        Column::new("LOST", 8),
        Column::new("NET", 8),
    ]);

    for (day, t) in totals.iter().rev() {
        table.add_row(vec![
            day.format("%Y-%m-%d").to_string(),
            t.count.to_string(),
            fmt_points(t.earned, false),
            fmt_points(t.lost, false),
            format!("{}{}{}", color_for_points(t.net()), fmt_points(t.net(), true), RESET),
        ]);
    }
    print!("{}", table.render());
}
