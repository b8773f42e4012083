use crate::book::RecipeBook;
use crate::commands::{book_size_message, CmdMessage, CmdResult};
use crate::error::{RecipeError, Result};
use crate::parser::parse_add;
use crate::validator::is_valid_add_command;

/// Validates and appends a recipe. The book is untouched on any error.
pub fn run(book: &mut RecipeBook, input: &str) -> Result<CmdResult> {
    if book.is_full() {
        return Err(RecipeError::CapacityExceeded {
            max: book.max_recipes(),
        });
    }
    is_valid_add_command(input)?;
    let recipe = parse_add(input)?;
    book.push(recipe.clone())?;

    let mut result = CmdResult::default()
        .with_affected_recipes(vec![recipe.clone()])
        .mutated();
    result.add_message(CmdMessage::success(format!("Added: {}", recipe)));
    result.add_message(book_size_message(book));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use crate::model::MealCategory;
    use chrono::Local;

    #[test]
    fn adds_a_parsed_recipe() {
        let mut book = RecipeBook::default();
        let result = run(&mut book, "add pizza, 34, 340, dairy/egg, dinner, www.url.com").unwrap();

        assert!(result.mutated);
        assert_eq!(book.len(), 1);
        let recipe = book.get(1).unwrap();
        assert_eq!(recipe.name, "pizza");
        assert_eq!(recipe.cook_time, 34);
        assert_eq!(recipe.calories, 340);
        assert_eq!(recipe.allergies, ["dairy", "egg"]);
        assert_eq!(recipe.category, MealCategory::Dinner);
        assert_eq!(recipe.url.as_deref(), Some("www.url.com"));
        assert_eq!(recipe.date_added, Local::now().date_naive());
        assert_eq!(result.affected_recipes, vec![recipe.clone()]);
    }

    #[test]
    fn invalid_category_does_not_mutate() {
        let mut book = RecipeBook::default();
        let err = run(&mut book, "add sushi, 15, 300, fish, anyday, www.sushilover.com").unwrap_err();
        assert!(matches!(
            err,
            RecipeError::Input(InputError::InvalidMealCategory(_))
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn missing_url_does_not_mutate() {
        let mut book = RecipeBook::default();
        assert!(run(&mut book, "add pizza, 34, 340, dairy / egg, dinner").is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn non_integer_fields_do_not_mutate() {
        let mut book = RecipeBook::default();
        let err = run(&mut book, "add sandwich, ten, 250, nuts, lunch, www.example.com").unwrap_err();
        assert!(matches!(err, RecipeError::Input(InputError::NotAnInteger(_))));
        assert!(book.is_empty());
    }

    #[test]
    fn full_book_reports_capacity() {
        let mut book = RecipeBook::new(vec![], 1);
        run(&mut book, "add toast, 5, 120, gluten, breakfast, www.toast.com").unwrap();

        let err = run(&mut book, "add jam, 1, 50, fruit, breakfast, www.jam.com").unwrap_err();
        assert!(matches!(err, RecipeError::CapacityExceeded { max: 1 }));
        assert_eq!(book.len(), 1);
    }
}
