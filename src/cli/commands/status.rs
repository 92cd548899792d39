use crate::cli::commands::open_tracker;
use crate::config::Config;
use crate::core::workout::WorkoutLogic;
use crate::errors::AppResult;
use crate::models::DayOfWeek;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREY, RESET, color_for_points};
use crate::utils::fmt_points;
use crate::utils::formatting::{bold, progress_bar};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cfg)?;
    let state = tracker.state();
    let p = tracker.progress();

    header(format!("Status for {}", tracker.today()));

    println!(
        "{}Goal:{}            {}",
        CYAN,
        RESET,
        fmt_points(state.settings.goal, false)
    );
    println!(
        "{}Earned / lost:{}   {} / {}",
        CYAN,
        RESET,
        fmt_points(p.total_earned, false),
        fmt_points(p.total_lost, false)
    );
    println!(
        "{}Net gain:{}        {}{}{}",
        CYAN,
        RESET,
        color_for_points(p.net_gain),
        fmt_points(p.net_gain, true),
        RESET
    );
    println!(
        "{}Balance:{}         {}",
        CYAN,
        RESET,
        bold(&fmt_points(p.current_balance, false))
    );
    println!(
        "{}Progress:{}        {} {:.1}%",
        CYAN,
        RESET,
        progress_bar(p.progress_percent, 30),
        p.progress_percent
    );
    println!("{}Streak:{}          🔥 {} day(s)", CYAN, RESET, p.current_streak);
    println!("{}Today:{}           {} action(s)", CYAN, RESET, p.today_action_count);

    let earned = state.badges.iter().filter(|b| b.earned).count();
    println!("{}Badges:{}          {}/{}", CYAN, RESET, earned, state.badges.len());

    let day = DayOfWeek::of_date(tracker.today());
    match WorkoutLogic::active_routine(state, day) {
        Some(routine) => {
            let done = WorkoutLogic::completed(state, day)
                .iter()
                .filter(|d| **d)
                .count();
            println!(
                "{}Workout:{}         {} ({}/{} done)",
                CYAN,
                RESET,
                routine.name,
                done,
                routine.exercises.len()
            );
        }
        None => println!("{}Workout:{}         {}rest day{}", CYAN, RESET, GREY, RESET),
    }

    Ok(())
}
