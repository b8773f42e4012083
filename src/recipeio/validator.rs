//! Checks run against user input before any command touches the book.
//!
//! Every check returns `Err(InputError)` describing the first problem found;
//! none of them print. Rendering the error (plus usage examples) is the CLI's
//! job. Checks that naturally produce a value (an index, a date, a category)
//! hand it back on success so callers don't parse twice.

use crate::book::RecipeBook;
use crate::error::InputError;
use crate::model::MealCategory;
use crate::parser::{parse_details, split_up_add_input, CommandKind};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn is_parsable_as_integer(input: &str) -> Result<i64, InputError> {
    input
        .parse()
        .map_err(|_| InputError::NotAnInteger(input.to_string()))
}

/// ASCII letters only, at least one of them.
pub fn is_word(input: &str) -> Result<(), InputError> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(InputError::NotAWord(input.to_string()));
    }
    Ok(())
}

pub fn is_meal_cat(input: &str) -> Result<MealCategory, InputError> {
    input.parse()
}

/// Strict `yyyy-MM-dd`: zero-padded, no sign.
pub fn is_parsable_as_date(input: &str) -> Result<NaiveDate, InputError> {
    if !is_iso_date_shape(input) {
        return Err(InputError::InvalidDate(input.to_string()));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate(input.to_string()))
}

fn is_iso_date_shape(input: &str) -> bool {
    input.len() == 10
        && input.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// `1 <= index <= book.len()`.
pub fn is_within_range(book: &RecipeBook, index: i64) -> Result<usize, InputError> {
    let size = book.len();
    match usize::try_from(index) {
        Ok(i) if (1..=size).contains(&i) => Ok(i),
        _ => Err(InputError::OutOfRange { index, size }),
    }
}

fn single_index(command: CommandKind, input: &str, book: &RecipeBook) -> Result<usize, InputError> {
    let details = parse_details(input);
    let [param] = details.as_slice() else {
        return Err(InputError::WrongArity {
            command,
            found: details.len(),
        });
    };
    let index = is_parsable_as_integer(param)?;
    is_within_range(book, index)
}

/// Returns the validated 1-based index.
pub fn is_valid_detail_command(input: &str, book: &RecipeBook) -> Result<usize, InputError> {
    single_index(CommandKind::Detail, input, book)
}

/// Returns the validated 1-based index.
pub fn is_valid_delete_command(input: &str, book: &RecipeBook) -> Result<usize, InputError> {
    single_index(CommandKind::Delete, input, book)
}

pub fn is_valid_find_command(input: &str) -> Result<(), InputError> {
    let found = parse_details(input).len();
    if found != 2 {
        return Err(InputError::WrongArity {
            command: CommandKind::Find,
            found,
        });
    }
    Ok(())
}

pub fn is_valid_add_command(input: &str) -> Result<(), InputError> {
    let fields = split_up_add_input(input)?;
    is_parsable_as_integer(fields.cook_time)?;
    is_parsable_as_integer(fields.calories)?;
    is_meal_cat(fields.category)?;
    Ok(())
}

pub fn is_valid_filter_command(input: &str) -> Result<(), InputError> {
    let details = parse_details(input);
    let [allergy] = details.as_slice() else {
        return Err(InputError::WrongArity {
            command: CommandKind::Filter,
            found: details.len(),
        });
    };
    is_word(allergy)
}
