use colored::Colorize;
use recipeio::api::{CmdMessage, MessageLevel};
use recipeio::error::RecipeError;
use recipeio::index::DisplayRecipe;
use recipeio::parser::CommandKind;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 32;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// A single `detail` result gets the full view; anything else is a table.
pub(super) fn print_recipes(command: &CommandKind, recipes: &[DisplayRecipe]) {
    match (command, recipes) {
        (CommandKind::Detail, [single]) => println!("{}", render_detail(single)),
        (_, []) => {}
        (_, many) => println!("{}", render_list(many)),
    }
}

pub(super) fn print_error(command: &CommandKind, err: &RecipeError) {
    println!("{}", err.to_string().red());
    if matches!(err, RecipeError::Input(_)) {
        for example in command.examples() {
            println!("{}", format!("\tInput Example: {}", example).dimmed());
        }
    }
}

pub(super) fn render_list(recipes: &[DisplayRecipe]) -> String {
    recipes
        .iter()
        .map(|dr| {
            let name = truncate_to_width(&dr.recipe.name, NAME_WIDTH);
            let padding = NAME_WIDTH.saturating_sub(name.width());
            format!(
                "{:>3}. {}{} {:>4} min {:>5} kcal  {}",
                dr.index,
                name,
                " ".repeat(padding),
                dr.recipe.cook_time,
                dr.recipe.calories,
                dr.recipe.category
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn render_detail(dr: &DisplayRecipe) -> String {
    let recipe = &dr.recipe;
    let allergies = if recipe.allergies.is_empty() {
        "none".to_string()
    } else {
        recipe.allergies.join(", ")
    };
    [
        format!("{}. {}", dr.index, recipe.name),
        "--------------------------------".to_string(),
        format!("Cook time:  {} min", recipe.cook_time),
        format!("Calories:   {} kcal", recipe.calories),
        format!("Allergies:  {}", allergies),
        format!("Category:   {}", recipe.category),
        format!("Date added: {}", recipe.date_added),
        format!("URL:        {}", recipe.url.as_deref().unwrap_or("none")),
    ]
    .join("\n")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use recipeio::model::{MealCategory, Recipe};

    fn pizza() -> DisplayRecipe {
        DisplayRecipe {
            index: 1,
            recipe: Recipe::new(
                "pizza",
                34,
                340,
                vec!["dairy".into(), "egg".into()],
                MealCategory::Dinner,
                Some("www.url.com".into()),
            )
            .with_date_added(NaiveDate::from_ymd_opt(2024, 3, 28).unwrap()),
        }
    }

    #[test]
    fn detail_shows_every_field() {
        let text = render_detail(&pizza());
        for expected in [
            "1. pizza",
            "34 min",
            "340 kcal",
            "dairy, egg",
            "dinner",
            "2024-03-28",
            "www.url.com",
        ] {
            assert!(text.contains(expected), "missing {:?} in\n{}", expected, text);
        }
    }

    #[test]
    fn list_has_one_line_per_recipe() {
        let mut second = pizza();
        second.index = 2;
        let text = render_list(&[pizza(), second]);
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().nth(1).unwrap().trim_start().starts_with("2. pizza"));
    }

    #[test]
    fn long_names_are_truncated() {
        let name = "a".repeat(50);
        let truncated = truncate_to_width(&name, NAME_WIDTH);
        assert_eq!(truncated.width(), NAME_WIDTH);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncate_to_width("short", NAME_WIDTH), "short");
    }
}
