#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;

use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::content;
use crate::domain::models::CommandName;
use crate::domain::models::CommandOutcome;
use crate::domain::models::Link;
use crate::domain::models::OutputLine;

/// Result of looking a submission up in the command table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Empty,
    Unknown,
    Found(CommandName, CommandOutcome),
}

/// Maps lowercase command names to what they produce.
pub struct CommandRegistry {
    commands: HashMap<String, CommandName>,
}

impl Default for CommandRegistry {
    fn default() -> CommandRegistry {
        let commands = CommandName::iter()
            .map(|name| (name.to_string(), name))
            .collect();

        return CommandRegistry { commands };
    }
}

impl CommandRegistry {
    /// Trims and lowercases `raw`, then matches it exactly.
    pub fn lookup(&self, raw: &str) -> Lookup {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Lookup::Empty;
        }

        match self.commands.get(&normalized) {
            Some(name) => Lookup::Found(*name, outcome(*name)),
            None => Lookup::Unknown,
        }
    }

    pub fn names(&self) -> Vec<CommandName> {
        CommandName::iter()
            .filter(|name| self.commands.contains_key(&name.to_string()))
            .collect()
    }
}

/// The fixed two-line reply to anything the table does not know.
pub fn not_found_lines(raw: &str) -> Vec<OutputLine> {
    return vec![
        OutputLine::new(&content::not_found(raw)),
        OutputLine::new(content::NOT_FOUND_HINT),
    ];
}

pub fn help_lines() -> Vec<OutputLine> {
    let mut lines = vec![OutputLine::new(content::HELP_HEADER)];
    lines.extend(
        CommandName::iter()
            .filter(|name| *name != CommandName::Help)
            .map(|name| {
                OutputLine::new(&format!("{:<12} - {}", name.to_string(), name.description()))
            }),
    );
    lines.extend(content::HELP_FOOTER.iter().map(|text| OutputLine::new(text)));

    return lines;
}

fn effect(link: Link) -> CommandOutcome {
    CommandOutcome::Effect {
        link,
        confirmation: OutputLine::new(link.confirmation()),
    }
}

fn lines(texts: &[&str]) -> Vec<OutputLine> {
    texts.iter().map(|text| OutputLine::new(text)).collect()
}

pub fn outcome(name: CommandName) -> CommandOutcome {
    match name {
        CommandName::Help => CommandOutcome::Output(help_lines()),
        CommandName::About => CommandOutcome::Output(lines(content::ABOUT)),
        CommandName::Projects => CommandOutcome::Output(lines(content::PROJECTS)),
        CommandName::Skills => CommandOutcome::Output(lines(content::SKILLS)),
        CommandName::Experience => CommandOutcome::Output(lines(content::EXPERIENCE)),
        CommandName::Contact => CommandOutcome::Output(lines(content::CONTACT)),
        CommandName::Education => CommandOutcome::Output(lines(content::EDUCATION)),
        CommandName::Certifications => CommandOutcome::Output(lines(content::CERTIFICATIONS)),
        CommandName::Leadership => CommandOutcome::Output(lines(content::LEADERSHIP)),
        CommandName::Clear => CommandOutcome::Clear,
        CommandName::Github => effect(Link::GitHub),
        CommandName::Linkedin => effect(Link::LinkedIn),
        CommandName::Instagram => effect(Link::Instagram),
        CommandName::Email => effect(Link::Email),
    }
}
