use crate::core::seed::builtin_routine;
use crate::errors::{AppError, AppResult};
use crate::models::{AppState, DayOfWeek, Routine, RoutineSource};
use tracing::info;

/// Per-weekday routine selection and exercise completion.
pub struct WorkoutLogic;

impl WorkoutLogic {
    /// Custom routine if one is set, else the built-in one.
    pub fn active_routine(state: &AppState, day: DayOfWeek) -> Option<Routine> {
        state
            .custom_workouts
            .get(&day)
            .cloned()
            .or_else(|| builtin_routine(day))
    }

    pub fn source(state: &AppState, day: DayOfWeek) -> RoutineSource {
        if state.custom_workouts.contains_key(&day) {
            RoutineSource::Custom
        } else if builtin_routine(day).is_some() {
            RoutineSource::BuiltIn
        } else {
            RoutineSource::None
        }
    }

    /// Set or replace the custom routine for a weekday.
    pub fn set_custom(state: &mut AppState, day: DayOfWeek, routine: Routine) -> AppResult<()> {
        if routine.name.trim().is_empty() {
            return Err(AppError::Validation("routine name cannot be empty".into()));
        }
        if routine.exercises.is_empty() {
            return Err(AppError::Validation(
                "a routine needs at least one exercise".into(),
            ));
        }
        if let Some(bad) = routine
            .exercises
            .iter()
            .find(|e| e.name.trim().is_empty() || e.sets == 0)
        {
            return Err(AppError::Validation(format!(
                "invalid exercise '{}': name and a non-zero set count are required",
                bad.name
            )));
        }

        let replaced = state.custom_workouts.insert(day, routine).is_some();
        info!(day = day.as_str(), replaced, "custom routine saved");
        Ok(())
    }

    /// Drop the custom routine; the day falls back to the built-in plan.
    pub fn delete_custom(state: &mut AppState, day: DayOfWeek) -> AppResult<Routine> {
        let removed = state
            .custom_workouts
            .remove(&day)
            .ok_or_else(|| AppError::NotFound(format!("custom routine for {}", day.as_str())))?;
        info!(day = day.as_str(), "custom routine deleted");
        Ok(removed)
    }

    /// Flip the completion flag of one exercise; returns the new value.
    pub fn toggle(state: &mut AppState, day: DayOfWeek, index: usize) -> AppResult<bool> {
        let routine = Self::active_routine(state, day)
            .ok_or_else(|| AppError::NotFound(format!("no routine for {}", day.as_str())))?;

        if index >= routine.exercises.len() {
            return Err(AppError::NotFound(format!(
                "exercise #{} in '{}' ({} exercises)",
                index,
                routine.name,
                routine.exercises.len()
            )));
        }

        let flag = state
            .workout_progress
            .entry(day)
            .or_default()
            .entry(index)
            .or_insert(false);
        *flag = !*flag;
        Ok(*flag)
    }

    /// Completion flags aligned with the active routine. Stale indices from
    /// an older, longer routine are ignored.
    pub fn completed(state: &AppState, day: DayOfWeek) -> Vec<bool> {
        let Some(routine) = Self::active_routine(state, day) else {
            return Vec::new();
        };
        let progress = state.workout_progress.get(&day);

        (0..routine.exercises.len())
            .map(|i| progress.and_then(|p| p.get(&i)).copied().unwrap_or(false))
            .collect()
    }

    pub fn reset_day(state: &mut AppState, day: DayOfWeek) {
        state.workout_progress.remove(&day);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Exercise;

    fn custom(n: usize) -> Routine {
        Routine {
            name: "Mine".into(),
            description: String::new(),
            exercises: (0..n)
                .map(|i| Exercise::new(&format!("ex{i}"), 3, "10", ""))
                .collect(),
        }
    }

    #[test]
    fn routine_source_transitions() {
        let mut state = AppState::default();
        let day = DayOfWeek::Monday;
        assert_eq!(WorkoutLogic::source(&state, day), RoutineSource::BuiltIn);

        WorkoutLogic::set_custom(&mut state, day, custom(2)).unwrap();
        assert_eq!(WorkoutLogic::source(&state, day), RoutineSource::Custom);
        assert_eq!(WorkoutLogic::active_routine(&state, day).unwrap().name, "Mine");

        WorkoutLogic::delete_custom(&mut state, day).unwrap();
        assert_eq!(WorkoutLogic::source(&state, day), RoutineSource::BuiltIn);

        let rest = DayOfWeek::Sunday;
        assert_eq!(WorkoutLogic::source(&state, rest), RoutineSource::None);
        WorkoutLogic::set_custom(&mut state, rest, custom(1)).unwrap();
        WorkoutLogic::delete_custom(&mut state, rest).unwrap();
        assert_eq!(WorkoutLogic::source(&state, rest), RoutineSource::None);
    }

    #[test]
    fn toggle_requires_existing_index() {
        let mut state = AppState::default();
        assert!(WorkoutLogic::toggle(&mut state, DayOfWeek::Monday, 0).unwrap());
        assert!(!WorkoutLogic::toggle(&mut state, DayOfWeek::Monday, 0).unwrap());

        let err = WorkoutLogic::toggle(&mut state, DayOfWeek::Monday, 99).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = WorkoutLogic::toggle(&mut state, DayOfWeek::Saturday, 0).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn stale_indices_are_ignored() {
        let mut state = AppState::default();
        let day = DayOfWeek::Sunday;
        WorkoutLogic::set_custom(&mut state, day, custom(4)).unwrap();
        WorkoutLogic::toggle(&mut state, day, 3).unwrap();
        WorkoutLogic::toggle(&mut state, day, 0).unwrap();

        WorkoutLogic::set_custom(&mut state, day, custom(2)).unwrap();
        assert_eq!(WorkoutLogic::completed(&state, day), vec![true, false]);
    }

    #[test]
    fn invalid_routine_rejected() {
        let mut state = AppState::default();
        let mut r = custom(1);
        r.exercises[0].sets = 0;
        assert!(WorkoutLogic::set_custom(&mut state, DayOfWeek::Monday, r).is_err());
        assert!(WorkoutLogic::set_custom(&mut state, DayOfWeek::Monday, custom(0)).is_err());
        assert!(state.custom_workouts.is_empty());
    }
}
