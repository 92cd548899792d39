use serde::{Deserialize, Serialize};

/// Sign class of an action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Positive,
    Negative,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "positive",
            Category::Negative => "negative",
        }
    }

    /// Parse a category from its db string or CLI code (`+`, `-` accepted).
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "pos" | "+" => Some(Category::Positive),
            "negative" | "neg" | "-" => Some(Category::Negative),
            _ => None,
        }
    }

    /// Category implied by the sign of a point value. Zero counts as positive.
    pub fn of_value(value: i64) -> Self {
        if value < 0 {
            Category::Negative
        } else {
            Category::Positive
        }
    }

    /// Apply this category's sign to a magnitude.
    pub fn sign(&self, raw: i64) -> i64 {
        match self {
            Category::Positive => raw.abs(),
            Category::Negative => -raw.abs(),
        }
    }
}

/// A reusable, point-valued kind of behaviour that can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionType {
    pub id: u32,
    pub name: String,
    pub value: i64,
    #[serde(default)]
    pub is_default: bool,
    pub category: Category,
}

impl ActionType {
    pub fn new(id: u32, name: &str, category: Category, raw_value: i64, is_default: bool) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            value: category.sign(raw_value),
            is_default,
            category,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.value > 0
    }

    /// Owned copy stored on every logged action at creation time.
    pub fn snapshot(&self) -> ActionSnapshot {
        ActionSnapshot {
            name: self.name.clone(),
            value: self.value,
            category: self.category,
        }
    }
}

/// Denormalized view of an action type as it was when an action was logged.
/// Catalog edits and deletions never touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSnapshot {
    pub name: String,
    pub value: i64,
    pub category: Category,
}
