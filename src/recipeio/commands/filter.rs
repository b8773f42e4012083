use crate::book::RecipeBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RecipeError, Result};
use crate::index::select_recipes;
use crate::parser::parse_details;
use crate::validator::is_valid_filter_command;

/// Recipes whose allergy list contains the given token.
pub fn run(book: &RecipeBook, input: &str) -> Result<CmdResult> {
    if book.is_empty() {
        return Err(RecipeError::EmptyBook);
    }
    is_valid_filter_command(input)?;
    let allergy = parse_details(input)[0];

    let matches = select_recipes(book, |r| r.has_allergy(allergy));
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No recipes mention {}", allergy)));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Found {} recipe(s) mentioning {}",
            matches.len(),
            allergy
        )));
    }
    Ok(result.with_listed_recipes(matches))
}
