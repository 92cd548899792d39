use crate::cli::commands::{CliTracker, open_tracker, parse_day};
use crate::cli::parser::{Commands, WorkoutAction};
use crate::config::Config;
use crate::core::workout::WorkoutLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{DayOfWeek, Exercise, Routine, RoutineSource};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREEN, GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Workout { action } = cmd else {
        return Ok(());
    };

    let mut tracker = open_tracker(cfg)?;

    match action {
        WorkoutAction::Show { day, week } => {
            if *week {
                print_week(&tracker);
            } else {
                let d = match day {
                    Some(d) => parse_day(d)?,
                    None => DayOfWeek::of_date(tracker.today()),
                };
                print_day(&tracker, d);
            }
        }

        WorkoutAction::Toggle { day, index } => {
            let d = parse_day(day)?;
            let idx = index
                .checked_sub(1)
                .ok_or_else(|| AppError::Validation("exercise numbers start at 1".into()))?;
            let done = tracker.toggle_exercise(d, idx)?;
            success(format!(
                "{} exercise {} marked as {}",
                d.as_str(),
                index,
                if done { "done" } else { "not done" }
            ));
        }

        WorkoutAction::Set {
            day,
            name,
            description,
            exercises,
        } => {
            let d = parse_day(day)?;
            let exercises = exercises
                .iter()
                .map(|e| parse_exercise(e))
                .collect::<AppResult<Vec<_>>>()?;
            let count = exercises.len();

            tracker.set_custom_workout(
                d,
                Routine {
                    name: name.trim().to_string(),
                    description: description.clone(),
                    exercises,
                },
            )?;
            success(format!(
                "Custom routine '{}' set for {} ({} exercises)",
                name.trim(),
                d.as_str(),
                count
            ));
        }

        WorkoutAction::Clear { day } => {
            let d = parse_day(day)?;
            let removed = tracker.delete_custom_workout(d)?;
            success(format!(
                "Custom routine '{}' removed from {}",
                removed.name,
                d.as_str()
            ));
            match WorkoutLogic::active_routine(tracker.state(), d) {
                Some(r) => info(format!("{} is back to the built-in '{}'", d.as_str(), r.name)),
                None => info(format!("{} is now a rest day", d.as_str())),
            }
        }

        WorkoutAction::Reset { day } => {
            let d = parse_day(day)?;
            tracker.reset_workout_day(d)?;
            success(format!("Progress cleared for {}", d.as_str()));
        }
    }

    Ok(())
}

/// `NAME:SETS:REPS[:BENEFIT]`
fn parse_exercise(spec: &str) -> AppResult<Exercise> {
    let parts: Vec<&str> = spec.splitn(4, ':').map(str::trim).collect();
    if parts.len() < 3 {
        return Err(AppError::Validation(format!(
            "exercise '{spec}' must look like NAME:SETS:REPS[:BENEFIT]"
        )));
    }

    let sets: u32 = parts[1]
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid set count in '{spec}'")))?;

    Ok(Exercise::new(
        parts[0],
        sets,
        parts[2],
        parts.get(3).copied().unwrap_or(""),
    ))
}

fn print_day(tracker: &CliTracker, day: DayOfWeek) {
    let state = tracker.state();
    let Some(routine) = WorkoutLogic::active_routine(state, day) else {
        info(format!("{}: rest day, no routine.", day.as_str()));
        return;
    };

    let source = match WorkoutLogic::source(state, day) {
        RoutineSource::Custom => "custom",
        RoutineSource::BuiltIn => "built-in",
        RoutineSource::None => "",
    };
    header(format!("{} · {} ({})", day.as_str(), routine.name, source));
    if !routine.description.is_empty() {
        println!("{}{}{}", GREY, routine.description, RESET);
    }

    let done = WorkoutLogic::completed(state, day);
    for (i, ex) in routine.exercises.iter().enumerate() {
        let mark = if done.get(i).copied().unwrap_or(false) {
            format!("{GREEN}[x]{RESET}")
        } else {
            "[ ]".to_string()
        };
        let benefit = if ex.benefit.is_empty() {
            String::new()
        } else {
            format!(" {GREY}· {}{RESET}", ex.benefit)
        };
        println!("{} {:>2}. {} {}x{}{}", mark, i + 1, ex.name, ex.sets, ex.reps, benefit);
    }
}

fn print_week(tracker: &CliTracker) {
    let state = tracker.state();
    for day in DayOfWeek::ALL {
        match WorkoutLogic::active_routine(state, day) {
            Some(r) => {
                let done = WorkoutLogic::completed(state, day)
                    .iter()
                    .filter(|d| **d)
                    .count();
                let tag = if WorkoutLogic::source(state, day) == RoutineSource::Custom {
                    " (custom)"
                } else {
                    ""
                };
                println!(
                    "{:<10} {}{} {}/{}",
                    day.as_str(),
                    r.name,
                    tag,
                    done,
                    r.exercises.len()
                );
            }
            None => println!("{:<10} {GREY}rest{RESET}", day.as_str()),
        }
    }
}
