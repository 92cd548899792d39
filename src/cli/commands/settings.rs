use crate::cli::commands::{open_tracker, print_recap};
use crate::cli::parser::{Commands, ThemeArg};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Theme;
use crate::ui::messages::{badges_unlocked, success};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::fmt_points;

impl From<ThemeArg> for Theme {
    fn from(t: ThemeArg) -> Self {
        match t {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::System => Theme::System,
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        goal,
        reminder,
        theme,
    } = cmd
    {
        let mut tracker = open_tracker(cfg)?;

        if let Some(g) = goal {
            let outcome = tracker.set_goal(*g)?;
            success(format!("Goal set to {}", fmt_points(*g, false)));
            print_recap(tracker.progress());
            badges_unlocked(&outcome.newly_earned);
        }
        if let Some(r) = reminder {
            tracker.set_reminder(r)?;
            success(format!(
                "Reminder set to {}",
                tracker.state().settings.reminder_time
            ));
        }
        if let Some(t) = theme {
            tracker.set_theme((*t).into())?;
            success(format!("Theme set to {}", tracker.state().settings.theme.as_str()));
        }

        if goal.is_none() && reminder.is_none() && theme.is_none() {
            let s = &tracker.state().settings;
            println!("{}Goal:{}          {}", CYAN, RESET, fmt_points(s.goal, false));
            println!("{}Reminder:{}      {}", CYAN, RESET, s.reminder_time);
            println!("{}Theme:{}         {}", CYAN, RESET, s.theme.as_str());
            let quick: Vec<String> = s.quick_actions.iter().map(|q| format!("#{q}")).collect();
            println!(
                "{}Quick actions:{} {}",
                CYAN,
                RESET,
                if quick.is_empty() { "--".to_string() } else { quick.join(", ") }
            );
        }
    }

    Ok(())
}
