use crate::error::InputError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of meal categories a recipe can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    General,
    Dinner,
    Lunch,
    Breakfast,
    Appetizer,
    Dessert,
}

impl MealCategory {
    pub const ALL: [MealCategory; 6] = [
        MealCategory::General,
        MealCategory::Dinner,
        MealCategory::Lunch,
        MealCategory::Breakfast,
        MealCategory::Appetizer,
        MealCategory::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealCategory::General => "general",
            MealCategory::Dinner => "dinner",
            MealCategory::Lunch => "lunch",
            MealCategory::Breakfast => "breakfast",
            MealCategory::Appetizer => "appetizer",
            MealCategory::Dessert => "dessert",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealCategory {
    type Err = InputError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        MealCategory::ALL
            .into_iter()
            .find(|cat| cat.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| InputError::InvalidMealCategory(needle.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Minutes.
    pub cook_time: u32,
    pub calories: u32,
    /// Kept as typed, in entry order.
    pub allergies: Vec<String>,
    pub category: MealCategory,
    pub date_added: NaiveDate,
    pub url: Option<String>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        cook_time: u32,
        calories: u32,
        allergies: Vec<String>,
        category: MealCategory,
        url: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cook_time,
            calories,
            allergies,
            category,
            date_added: Local::now().date_naive(),
            url,
        }
    }

    pub fn with_date_added(mut self, date: NaiveDate) -> Self {
        self.date_added = date;
        self
    }

    pub fn has_allergy(&self, allergy: &str) -> bool {
        self.allergies.iter().any(|a| a.eq_ignore_ascii_case(allergy))
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} min / {} kcal / url: {}",
            self.name,
            self.cook_time,
            self.calories,
            self.url.as_deref().unwrap_or("none")
        )
    }
}
