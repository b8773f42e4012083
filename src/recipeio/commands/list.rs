use crate::book::RecipeBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_recipes;

pub fn run(book: &RecipeBook) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_recipes(index_recipes(book));
    if book.is_empty() {
        result.add_message(CmdMessage::info(
            "Your recipe book is empty. Add one with: add {name}, {cook time}, {calories}, {allergies}, {meal category}, {url}",
        ));
    }
    Ok(result)
}
