use crate::commands::{CmdMessage, CmdResult};
use crate::parser::CommandKind;

const COMMANDS: [CommandKind; 8] = [
    CommandKind::List,
    CommandKind::Detail,
    CommandKind::Add,
    CommandKind::Delete,
    CommandKind::Find,
    CommandKind::Filter,
    CommandKind::Help,
    CommandKind::Exit,
];

/// One line per command: its name, parameter shape and first example.
pub fn instructions() -> Vec<String> {
    let mut lines = vec!["Here are the commands you can use:".to_string()];
    for command in &COMMANDS {
        lines.push(format!(
            "  {:<7} {} (e.g. {})",
            command.to_string(),
            command.usage(),
            command.examples()[0]
        ));
    }
    lines.push("  find types: kw {keyword}, date {yyyy-MM-dd}, meal {category}".to_string());
    lines.push(
        "  meal categories: general, dinner, lunch, breakfast, appetizer, dessert".to_string(),
    );
    lines
}

pub fn run() -> CmdResult {
    let mut result = CmdResult::default();
    for line in instructions() {
        result.add_message(CmdMessage::info(line));
    }
    result
}

/// Unknown keywords are not errors: warn, then show the instructions.
pub fn unrecognized(keyword: &str) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning(format!(
        "Sorry, '{}' is not a command I know.",
        keyword
    )));
    for line in instructions() {
        result.add_message(CmdMessage::info(line));
    }
    result
}
