use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Badges { earned } = cmd {
        let tracker = open_tracker(cfg)?;

        let badges: Vec<_> = tracker
            .state()
            .badges
            .iter()
            .filter(|b| !*earned || b.earned)
            .collect();

        if badges.is_empty() {
            info("No badges earned yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("", 3),
            Column::new("BADGE", 18),
            Column::new("REQUIREMENT", 22),
            Column::new("STATUS", 8),
        ]);

        for b in badges {
            let status = if b.earned {
                Colour::Green.paint("earned").to_string()
            } else {
                Colour::Fixed(8).paint("locked").to_string()
            };
            table.add_row(vec![
                b.icon.clone(),
                b.name.clone(),
                b.requirement_label(),
                status,
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
