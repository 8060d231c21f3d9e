use strum_macros::{Display, EnumIter};

use super::Link;
use super::OutputLine;

/// Every command the terminal understands, in the order `help` lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CommandName {
    Help,
    About,
    Projects,
    Skills,
    Experience,
    Contact,
    Education,
    Certifications,
    Leadership,
    Github,
    Linkedin,
    Instagram,
    Email,
    Clear,
}

impl CommandName {
    pub fn description(&self) -> &'static str {
        match self {
            CommandName::Help => "Show available commands",
            CommandName::About => "Learn about me",
            CommandName::Projects => "View my projects",
            CommandName::Skills => "See my technical skills",
            CommandName::Experience => "My work experience",
            CommandName::Contact => "How to reach me",
            CommandName::Education => "My educational background",
            CommandName::Certifications => "View my certifications",
            CommandName::Leadership => "Leadership and community involvement",
            CommandName::Github => "Open GitHub profile",
            CommandName::Linkedin => "Open LinkedIn profile",
            CommandName::Instagram => "Open Instagram profile",
            CommandName::Email => "Send me an email",
            CommandName::Clear => "Clear the terminal",
        }
    }
}

/// What running a command produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Lines to type out.
    Output(Vec<OutputLine>),
    /// An external link to open plus the line confirming it.
    Effect {
        link: Link,
        confirmation: OutputLine,
    },
    /// Replace the session buffer.
    Clear,
}
