use crate::book::RecipeBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayRecipe;
use crate::validator::is_valid_detail_command;

pub fn run(book: &RecipeBook, input: &str) -> Result<CmdResult> {
    let index = is_valid_detail_command(input, book)?;
    let listed = book
        .get(index)
        .map(|recipe| DisplayRecipe {
            index,
            recipe: recipe.clone(),
        })
        .into_iter()
        .collect();
    Ok(CmdResult::default().with_listed_recipes(listed))
}
