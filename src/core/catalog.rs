use crate::errors::{AppError, AppResult};
use crate::models::{ActionType, AppState, Catalog, Category};
use tracing::info;

impl Catalog {
    /// Look an action type up in either sub-collection.
    pub fn resolve(&self, id: u32) -> Option<&ActionType> {
        self.iter().find(|t| t.id == id)
    }

    fn position(&self, id: u32) -> Option<(Category, usize)> {
        if let Some(i) = self.positive.iter().position(|t| t.id == id) {
            return Some((Category::Positive, i));
        }
        self.negative
            .iter()
            .position(|t| t.id == id)
            .map(|i| (Category::Negative, i))
    }

    pub fn list(&self, category: Option<Category>) -> Vec<&ActionType> {
        match category {
            Some(c) => self.bucket(c).iter().collect(),
            None => self.iter().collect(),
        }
    }
}

fn validate(name: &str, raw_value: i64) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("action name cannot be empty".into()));
    }
    if raw_value <= 0 {
        return Err(AppError::Validation(format!(
            "point value must be a positive integer, got {raw_value}"
        )));
    }
    Ok(())
}

/// Catalog mutations. Cascades into settings where needed.
pub struct CatalogLogic;

impl CatalogLogic {
    pub fn create(
        state: &mut AppState,
        category: Category,
        name: &str,
        raw_value: i64,
    ) -> AppResult<ActionType> {
        validate(name, raw_value)?;

        let id = state.sequences.next_action_type_id;
        state.sequences.next_action_type_id += 1;

        let action_type = ActionType::new(id, name, category, raw_value, false);
        state
            .catalog
            .bucket_mut(category)
            .push(action_type.clone());

        info!(id, name = %action_type.name, value = action_type.value, "action type created");
        Ok(action_type)
    }

    /// Rename / revalue an action type. The sign follows its existing category.
    pub fn edit(
        state: &mut AppState,
        id: u32,
        new_name: &str,
        new_raw_value: i64,
    ) -> AppResult<ActionType> {
        let (category, idx) = state
            .catalog
            .position(id)
            .ok_or_else(|| AppError::NotFound(format!("action type #{id}")))?;

        validate(new_name, new_raw_value)?;

        let entry = &mut state.catalog.bucket_mut(category)[idx];
        entry.name = new_name.trim().to_string();
        entry.value = category.sign(new_raw_value);

        info!(id, name = %entry.name, value = entry.value, "action type edited");
        Ok(entry.clone())
    }

    /// Remove a user-created action type. Logged actions keep their snapshot.
    pub fn delete(state: &mut AppState, id: u32) -> AppResult<ActionType> {
        let (category, idx) = state
            .catalog
            .position(id)
            .ok_or_else(|| AppError::NotFound(format!("action type #{id}")))?;

        if state.catalog.bucket(category)[idx].is_default {
            return Err(AppError::Forbidden(format!(
                "'{}' is a built-in action type and cannot be deleted",
                state.catalog.bucket(category)[idx].name
            )));
        }

        let removed = state.catalog.bucket_mut(category).remove(idx);
        state.settings.quick_actions.retain(|q| *q != id);

        info!(id, name = %removed.name, "action type deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_normalizes_sign_to_category() {
        let mut state = AppState::default();
        let neg = CatalogLogic::create(&mut state, Category::Negative, "Soda", 150).unwrap();
        let pos = CatalogLogic::create(&mut state, Category::Positive, "Read", 80).unwrap();

        assert_eq!(neg.value, -150);
        assert_eq!(pos.value, 80);
        assert!(!neg.is_default);
        assert_eq!(state.catalog.resolve(neg.id), Some(&neg));
    }

    #[test]
    fn create_rejects_bad_input() {
        let mut state = AppState::default();
        let before = state.catalog.clone();

        let e1 = CatalogLogic::create(&mut state, Category::Positive, "   ", 10).unwrap_err();
        let e2 = CatalogLogic::create(&mut state, Category::Positive, "Read", 0).unwrap_err();
        let e3 = CatalogLogic::create(&mut state, Category::Negative, "Soda", -5).unwrap_err();

        assert!(matches!(e1, AppError::Validation(_)));
        assert!(matches!(e2, AppError::Validation(_)));
        assert!(matches!(e3, AppError::Validation(_)));
        assert_eq!(state.catalog, before);
    }

    #[test]
    fn edit_keeps_category_sign() {
        let mut state = AppState::default();
        let t = CatalogLogic::create(&mut state, Category::Negative, "Soda", 150).unwrap();

        let edited = CatalogLogic::edit(&mut state, t.id, "Energy drink", 300).unwrap();
        assert_eq!(edited.value, -300);
        assert_eq!(edited.category, Category::Negative);

        let missing = CatalogLogic::edit(&mut state, 9999, "x", 1).unwrap_err();
        assert!(matches!(missing, AppError::NotFound(_)));
    }

    #[test]
    fn delete_default_is_forbidden() {
        let mut state = AppState::default();
        let builtin = state.catalog.positive[0].id;
        let before = state.catalog.clone();

        let err = CatalogLogic::delete(&mut state, builtin).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(state.catalog, before);
    }

    #[test]
    fn delete_cascades_to_quick_actions() {
        let mut state = AppState::default();
        let t = CatalogLogic::create(&mut state, Category::Positive, "Read", 80).unwrap();
        let builtin = state.catalog.positive[0].id;
        state.settings.quick_actions = vec![builtin, t.id];

        CatalogLogic::delete(&mut state, t.id).unwrap();

        assert!(state.catalog.resolve(t.id).is_none());
        assert_eq!(state.settings.quick_actions, vec![builtin]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut state = AppState::default();
        let a = CatalogLogic::create(&mut state, Category::Positive, "A", 1).unwrap();
        CatalogLogic::delete(&mut state, a.id).unwrap();
        let b = CatalogLogic::create(&mut state, Category::Positive, "B", 1).unwrap();
        assert!(b.id > a.id);
    }
}
