use crate::book::RecipeBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InputError, RecipeError, Result};
use crate::index::select_recipes;
use crate::parser::parse_details;
use crate::validator::{is_meal_cat, is_parsable_as_date, is_valid_find_command};
use std::str::FromStr;

/// What `find` searches on: `kw`, `date` or `meal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindKind {
    Keyword,
    Date,
    Meal,
}

impl FromStr for FindKind {
    type Err = InputError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kw" => Ok(FindKind::Keyword),
            "date" => Ok(FindKind::Date),
            "meal" => Ok(FindKind::Meal),
            _ => Err(InputError::UnknownFindType(s.to_string())),
        }
    }
}

pub fn run(book: &RecipeBook, input: &str) -> Result<CmdResult> {
    if book.is_empty() {
        return Err(RecipeError::EmptyBook);
    }
    is_valid_find_command(input)?;
    let details = parse_details(input);
    let (kind, criteria) = (details[0].parse::<FindKind>()?, details[1]);

    let matches = match kind {
        FindKind::Keyword => {
            let needle = criteria.to_lowercase();
            select_recipes(book, |r| r.name.to_lowercase().contains(&needle))
        }
        FindKind::Date => {
            let date = is_parsable_as_date(criteria)?;
            select_recipes(book, |r| r.date_added == date)
        }
        FindKind::Meal => {
            let category = is_meal_cat(criteria)?;
            select_recipes(book, |r| r.category == category)
        }
    };

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No recipes found for: {}", criteria)));
    }
    Ok(result.with_listed_recipes(matches))
}
