//! Core CLI loop dispatch, error reporting and shell context helpers.

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    errors::{CliError, EstimateError},
    session::{DisplayState, EstimatorSession},
    timer::{format_hours, format_money, SystemClock},
};

use super::commands;
use super::io as cli_io;
use super::output::section as output_section;
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] EstimateError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    pub(crate) fn usage(entry_usage: &str) -> Self {
        CommandError::InvalidArguments(format!("Usage: {}", entry_usage))
    }
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new();
        let config = config_manager.load()?;
        let session =
            EstimatorSession::with_category(Box::new(SystemClock), config.default_category);
        Ok(Self::with_parts(mode, session, config, config_manager))
    }

    /// Assembles a context from prebuilt parts; used to inject a manual clock
    /// or an isolated configuration directory.
    pub fn with_parts(
        mode: CliMode,
        session: EstimatorSession,
        config: Config,
        config_manager: ConfigManager,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        cli_io::apply_config(&config);

        Self {
            mode,
            registry,
            session,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            running: true,
        }
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.find(name)
    }

    pub(crate) fn prompt(&self) -> String {
        let state = self.session.display_state();
        format!(
            "fabcost [{} | {} {}]> ",
            state.category, state.timer_status, state.elapsed_formatted
        )
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        // Every intent first catches the stopwatch up with wall-clock time.
        self.session.refresh();

        if let Some(handler) = self.registry.find(command).map(|entry| entry.handler) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenises and dispatches one line.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let raw = &tokens[0];
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let mut suggestions: Vec<(usize, &str)> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_hint(format!("Did you mean `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", false)
            .map_err(|err| CliError::Command(err.to_string()))
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(EstimateError::InvalidCategory(key)) => {
                cli_io::print_error(format!("Unknown category `{}`.", key));
                cli_io::print_hint("Type `categories` to list the job types.");
            }
            other => cli_io::print_error(other.to_string()),
        }
    }

    pub(crate) fn money(&self, amount: f64) -> String {
        format_money(amount, &self.config.currency_symbol, self.config.decimals())
    }

    /// Renders the current display snapshot.
    pub(crate) fn render_state(&self, state: &DisplayState) {
        let profile = state.category.profile();
        output_section(profile.title);
        cli_io::print_info(format!(
            "  {:<26}: {}",
            profile.material_label,
            self.money(state.record.material_cost)
        ));
        cli_io::print_info(format!(
            "  {:<26}: {}",
            "Hourly rate",
            self.money(state.record.hourly_rate)
        ));
        cli_io::print_info(format!(
            "  {:<26}: {}",
            "Labor hours",
            format_hours(state.record.labor_hours)
        ));
        cli_io::print_info(format!(
            "  {:<26}: {} ({})",
            "Timer", state.elapsed_formatted, state.timer_status
        ));
        cli_io::print_info(format!(
            "  {:<26}: {}",
            "Total cost",
            self.money(state.total)
        ));
    }
}

#[cfg(test)]
pub(crate) fn test_context(
    clock: crate::timer::ManualClock,
) -> (ShellContext, tempfile::TempDir) {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
    let session = EstimatorSession::new(Box::new(clock));
    let context = ShellContext::with_parts(CliMode::Script, session, Config::default(), manager);
    (context, temp)
}
