use crate::book::RecipeBook;
use crate::model::Recipe;

/// A recipe paired with its user-facing, 1-based position in the book.
///
/// Search and filter results keep the position the recipe has in the whole
/// book, so `find` output can be followed by `detail N` or `delete N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecipe {
    pub index: usize,
    pub recipe: Recipe,
}

pub fn index_recipes(book: &RecipeBook) -> Vec<DisplayRecipe> {
    book.iter()
        .enumerate()
        .map(|(i, recipe)| DisplayRecipe {
            index: i + 1,
            recipe: recipe.clone(),
        })
        .collect()
}

/// Indexes the whole book, then keeps the entries matching `pred`.
pub fn select_recipes<F>(book: &RecipeBook, pred: F) -> Vec<DisplayRecipe>
where
    F: Fn(&Recipe) -> bool,
{
    index_recipes(book)
        .into_iter()
        .filter(|dr| pred(&dr.recipe))
        .collect()
}
