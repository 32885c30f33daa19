use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;
use crate::estimate::{Category, CostField};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Words offered when completing the first argument of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentWords {
    Nothing,
    Categories,
    Fields,
    Fixed(&'static [&'static str]),
}

impl ArgumentWords {
    pub fn words(self) -> Vec<String> {
        match self {
            ArgumentWords::Nothing => Vec::new(),
            ArgumentWords::Categories => Category::ALL.iter().map(|c| c.key().to_string()).collect(),
            ArgumentWords::Fields => CostField::ALL.iter().map(|f| f.key().to_string()).collect(),
            ArgumentWords::Fixed(words) => words.iter().map(|word| word.to_string()).collect(),
        }
    }
}

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub arguments: ArgumentWords,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            arguments: ArgumentWords::Nothing,
            handler,
        }
    }

    pub fn completing(mut self, arguments: ArgumentWords) -> Self {
        self.arguments = arguments;
        self
    }
}

/// Commands in the order they are listed by `help`. Names are unique; a later
/// entry with the same name replaces the earlier one in place.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        match self.entries.iter_mut().find(|existing| existing.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn find(&self, name: &str) -> Option<&CommandEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Command names paired with their argument words, for the line editor.
    pub fn completions(&self) -> Vec<(String, Vec<String>)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.to_string(), entry.arguments.words()))
            .collect()
    }
}
