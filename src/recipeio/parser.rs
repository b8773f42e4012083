//! Turns a raw input line into a command keyword and typed arguments.
//!
//! Two payload shapes exist. `detail`, `delete`, `find` and `filter` take
//! whitespace-delimited tokens ([`parse_details`]). `add` takes six
//! comma-separated fields ([`split_up_add_input`]), where the allergy field is
//! itself split on spaces or slashes.

use crate::error::InputError;
use crate::model::{MealCategory, Recipe};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    List,
    Detail,
    Add,
    Delete,
    Find,
    Filter,
    Help,
    Exit,
    Unknown(String),
}

impl CommandKind {
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_lowercase().as_str() {
            "list" => CommandKind::List,
            "detail" => CommandKind::Detail,
            "add" => CommandKind::Add,
            "delete" => CommandKind::Delete,
            "find" => CommandKind::Find,
            "filter" => CommandKind::Filter,
            "help" => CommandKind::Help,
            "bye" | "exit" => CommandKind::Exit,
            _ => CommandKind::Unknown(keyword.to_string()),
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::List => "no parameters",
            CommandKind::Detail => "one parameter: {index}",
            CommandKind::Add => {
                "6 parameters: {name}, {cook time}, {calories}, {allergies}, {meal category}, {url}"
            }
            CommandKind::Delete => "one parameter: {index}",
            CommandKind::Find => "two parameters: {type} and {criteria}",
            CommandKind::Filter => "one parameter: {allergy}",
            CommandKind::Help => "no parameters",
            CommandKind::Exit => "no parameters",
            CommandKind::Unknown(_) => "",
        }
    }

    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            CommandKind::List => &["list"],
            CommandKind::Detail => &["detail 1"],
            CommandKind::Add => &["add pizza, 34, 340, egg dairy, dinner, www.food.com"],
            CommandKind::Delete => &["delete 1"],
            CommandKind::Find => &[
                "find kw pizza",
                "find date 2024-03-28",
                "find meal dinner",
            ],
            CommandKind::Filter => &["filter dairy"],
            CommandKind::Help => &["help"],
            CommandKind::Exit => &["bye"],
            CommandKind::Unknown(_) => &[],
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::List => "list",
            CommandKind::Detail => "detail",
            CommandKind::Add => "add",
            CommandKind::Delete => "delete",
            CommandKind::Find => "find",
            CommandKind::Filter => "filter",
            CommandKind::Help => "help",
            CommandKind::Exit => "bye",
            CommandKind::Unknown(keyword) => keyword,
        };
        f.write_str(name)
    }
}

/// Splits a line into its command keyword and the remaining payload.
pub fn parse_command(line: &str) -> (CommandKind, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (CommandKind::from_keyword(keyword), rest.trim()),
        None => (CommandKind::from_keyword(line), ""),
    }
}

/// The whitespace-delimited tokens following the command keyword.
pub fn parse_details(input: &str) -> Vec<&str> {
    input.split_whitespace().skip(1).collect()
}

/// The single integer parameter of `detail` / `delete`.
pub fn parse_id(input: &str) -> Option<i64> {
    parse_details(input).first()?.parse().ok()
}

/// Raw, trimmed fields of an `add` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFields<'a> {
    pub name: &'a str,
    pub cook_time: &'a str,
    pub calories: &'a str,
    pub allergies: Vec<&'a str>,
    pub category: &'a str,
    pub url: &'a str,
}

/// Splits an `add` line into its fields.
///
/// Five fields are accepted when the fourth one is a meal category, meaning
/// the allergy list was left out. Every other count is an error, which is how
/// a missing url or a stray comma is caught.
pub fn split_up_add_input(input: &str) -> Result<AddFields<'_>, InputError> {
    let (_, payload) = parse_command(input);
    let fields: Vec<&str> = if payload.is_empty() {
        Vec::new()
    } else {
        payload.split(',').map(str::trim).collect()
    };

    match fields[..] {
        [name, cook_time, calories, allergies, category, url] => Ok(AddFields {
            name,
            cook_time,
            calories,
            allergies: split_allergies(allergies),
            category,
            url,
        }),
        [name, cook_time, calories, category, url] if category.parse::<MealCategory>().is_ok() => {
            Ok(AddFields {
                name,
                cook_time,
                calories,
                allergies: Vec::new(),
                category,
                url,
            })
        }
        _ => Err(InputError::WrongFieldCount {
            found: fields.len(),
        }),
    }
}

/// Allergies are separated by whitespace and/or slashes: `dairy/egg`, `dairy / egg`, `egg dairy`.
pub fn split_allergies(field: &str) -> Vec<&str> {
    field
        .split(|c: char| c == '/' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

fn parse_count(text: &str) -> Result<u32, InputError> {
    text.parse().map_err(|_| InputError::NotAnInteger(text.to_string()))
}

/// Builds a recipe from an `add` line, dated today.
///
/// ```
/// use recipeio::model::MealCategory;
/// use recipeio::parser::parse_add;
///
/// let recipe = parse_add("add pizza, 34, 340, dairy/egg, DINNER, www.url.com").unwrap();
/// assert_eq!(recipe.allergies, ["dairy", "egg"]);
/// assert_eq!(recipe.category, MealCategory::Dinner);
///
/// assert!(parse_add("add pizza, 34, 340, dairy/egg, dinner").is_err());
/// ```
pub fn parse_add(input: &str) -> Result<Recipe, InputError> {
    let fields = split_up_add_input(input)?;

    if fields.name.is_empty() {
        return Err(InputError::EmptyName);
    }
    let cook_time = parse_count(fields.cook_time)?;
    let calories = parse_count(fields.calories)?;
    let category: MealCategory = fields.category.parse()?;
    let url = (!fields.url.is_empty()).then(|| fields.url.to_string());

    Ok(Recipe::new(
        fields.name,
        cook_time,
        calories,
        fields.allergies.into_iter().map(String::from).collect(),
        category,
        url,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn keyword_is_case_insensitive() {
        assert_eq!(parse_command("LIST").0, CommandKind::List);
        assert_eq!(parse_command("  Detail 3 ").0, CommandKind::Detail);
        assert_eq!(parse_command("bye").0, CommandKind::Exit);
    }

    #[test]
    fn unknown_keyword_is_kept() {
        let (kind, rest) = parse_command("cook pasta now");
        assert_eq!(kind, CommandKind::Unknown("cook".into()));
        assert_eq!(rest, "pasta now");
    }

    #[test]
    fn details_skip_the_keyword() {
        assert_eq!(parse_details("find  kw   pizza "), ["kw", "pizza"]);
        assert!(parse_details("detail").is_empty());
    }

    #[test]
    fn parse_id_reads_the_first_parameter() {
        assert_eq!(parse_id("delete 4"), Some(4));
        assert_eq!(parse_id("delete four"), None);
        assert_eq!(parse_id("delete"), None);
    }

    #[test]
    fn parses_multiple_allergies() {
        let recipe = parse_add("add pizza, 34, 340, dairy/egg, dinner, www.url.com").unwrap();
        assert_eq!(recipe.name, "pizza");
        assert_eq!(recipe.cook_time, 34);
        assert_eq!(recipe.calories, 340);
        assert_eq!(recipe.allergies, ["dairy", "egg"]);
        assert_eq!(recipe.category, MealCategory::Dinner);
        assert_eq!(recipe.url.as_deref(), Some("www.url.com"));
        assert_eq!(recipe.date_added, Local::now().date_naive());
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let recipe = parse_add("add sandwich,  10, 250,  nuts, lunch,  www.example.com ").unwrap();
        assert_eq!(recipe.name, "sandwich");
        assert_eq!(recipe.allergies, ["nuts"]);
        assert_eq!(recipe.category, MealCategory::Lunch);
        assert_eq!(recipe.url.as_deref(), Some("www.example.com"));
    }

    #[test]
    fn keeps_case_as_typed() {
        let recipe = parse_add("add PIZZA, 30, 300, CHEESE, DINNER, www.pizzaplace.com").unwrap();
        assert_eq!(recipe.name, "PIZZA");
        assert_eq!(recipe.allergies, ["CHEESE"]);
        assert_eq!(recipe.category, MealCategory::Dinner);
    }

    #[test]
    fn multi_word_names_and_boundary_values() {
        let recipe = parse_add("add massive sandwich, 0, 10000, nuts, dinner, www.bigrecipe.com").unwrap();
        assert_eq!(recipe.name, "massive sandwich");
        assert_eq!(recipe.cook_time, 0);
        assert_eq!(recipe.calories, 10000);
    }

    #[test]
    fn spaced_slash_allergies() {
        assert_eq!(split_allergies("dairy / egg"), ["dairy", "egg"]);
        assert_eq!(split_allergies("egg dairy"), ["egg", "dairy"]);
        assert!(split_allergies("").is_empty());
    }

    #[test]
    fn allergy_field_may_be_omitted() {
        let recipe = parse_add("add pizza, 34, 340, dinner, www.url.com").unwrap();
        assert!(recipe.allergies.is_empty());
        assert_eq!(recipe.category, MealCategory::Dinner);
        assert_eq!(recipe.url.as_deref(), Some("www.url.com"));
    }

    #[test]
    fn missing_url_fails() {
        let err = parse_add("add pizza, 34, 340, dairy / egg, dinner").unwrap_err();
        assert_eq!(err, InputError::WrongFieldCount { found: 5 });
    }

    #[test]
    fn missing_category_fails() {
        assert!(parse_add("add pizza, 34, 340, dairy/egg, www.url.com").is_err());
    }

    #[test]
    fn missing_name_or_numbers_fail() {
        assert!(parse_add("add 34, 340, dairy/egg, dinner, www.url.com").is_err());
        assert!(parse_add("add pizza, 340, dairy/egg, dinner, www.url.com").is_err());
        assert!(parse_add("add pizza, 34, dairy/egg, dinner, www.url.com").is_err());
    }

    #[test]
    fn non_integer_numbers_fail() {
        let err = parse_add("add sandwich, ten, two fifty, nuts, lunch, www.example.com").unwrap_err();
        assert_eq!(err, InputError::NotAnInteger("ten".into()));
    }

    #[test]
    fn negative_numbers_fail() {
        let err = parse_add("add sandwich, -1, 250, nuts, lunch, www.example.com").unwrap_err();
        assert_eq!(err, InputError::NotAnInteger("-1".into()));
    }

    #[test]
    fn invalid_category_fails() {
        let err = parse_add("add sushi, 15, 300, fish, anyday, www.sushilover.com").unwrap_err();
        assert_eq!(err, InputError::InvalidMealCategory("anyday".into()));
    }

    #[test]
    fn empty_name_fails() {
        let err = parse_add("add , 15, 300, fish, lunch, www.sushilover.com").unwrap_err();
        assert_eq!(err, InputError::EmptyName);
    }

    #[test]
    fn empty_url_is_none() {
        let recipe = parse_add("add toast, 5, 120, gluten, breakfast, ").unwrap();
        assert_eq!(recipe.url, None);
    }

    #[test]
    fn surplus_fields_fail() {
        let err = parse_add("add pizza, 34, 340, egg, dinner, www.url.com/a,b").unwrap_err();
        assert_eq!(err, InputError::WrongFieldCount { found: 7 });
    }

    #[test]
    fn bare_add_has_no_fields() {
        assert_eq!(
            split_up_add_input("add").unwrap_err(),
            InputError::WrongFieldCount { found: 0 }
        );
    }
}
