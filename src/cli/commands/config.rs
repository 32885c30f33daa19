use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{ArgumentWords, CommandEntry};

const CONFIG_USAGE: &str = "config [show | set <key> <value> | save]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show, change or save preferences",
        CONFIG_USAGE,
        cmd_config,
    )
    .completing(ArgumentWords::Fixed(&["show", "set", "save"]))]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            show(context);
            Ok(())
        }
        ["set", key, value] => {
            context.config.set(key, value)?;
            io::apply_config(&context.config);
            io::print_success(format!("Set {} = {}.", key, value));
            io::print_hint("Run `config save` to keep it for the next session.");
            Ok(())
        }
        ["save"] => {
            context.config_manager.save(&context.config)?;
            io::print_success(format!(
                "Preferences saved to {}.",
                context.config_manager.path().display()
            ));
            Ok(())
        }
        _ => Err(CommandError::usage(CONFIG_USAGE)),
    }
}

fn show(context: &ShellContext) {
    let config = &context.config;
    output_section("Preferences");
    io::print_info(format!("  currency         : {}", config.currency_symbol));
    io::print_info(format!("  default_category : {}", config.default_category));
    io::print_info(format!("  decimals         : {}", config.decimal_places));
    io::print_info(format!(
        "  screen_reader    : {}",
        on_off(config.screen_reader_mode)
    ));
    io::print_info(format!(
        "  high_contrast    : {}",
        on_off(config.high_contrast_mode)
    ));
    io::print_info(format!(
        "  file             : {}",
        context.config_manager.path().display()
    ));
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
