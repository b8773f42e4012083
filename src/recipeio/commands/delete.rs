use crate::book::RecipeBook;
use crate::commands::{book_size_message, CmdMessage, CmdResult};
use crate::error::Result;
use crate::validator::is_valid_delete_command;

pub fn run(book: &mut RecipeBook, input: &str) -> Result<CmdResult> {
    let index = is_valid_delete_command(input, book)?;
    let removed = book.remove(index)?;

    let mut result = CmdResult::default().mutated();
    result.add_message(CmdMessage::success(format!(
        "Recipe deleted ({}): {}",
        index, removed.name
    )));
    result.add_message(book_size_message(book));
    result.affected_recipes.push(removed);
    Ok(result)
}
