use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{ArgumentWords, CommandEntry};
use crate::estimate::Category;

const CATEGORY_USAGE: &str = "category [woodworking|laser|print3d]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "category",
            "Show or switch the active job category",
            CATEGORY_USAGE,
            cmd_category,
        )
        .completing(ArgumentWords::Categories),
        CommandEntry::new(
            "categories",
            "List job categories",
            "categories",
            cmd_categories,
        ),
    ]
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let state = context.session.display_state();
            context.render_state(&state);
            Ok(())
        }
        [name] => {
            let category: Category = name.parse()?;
            context.session.select_category(category);
            io::print_success(format!(
                "Active category: {}",
                category.profile().title
            ));
            let state = context.session.display_state();
            context.render_state(&state);
            Ok(())
        }
        _ => Err(CommandError::usage(CATEGORY_USAGE)),
    }
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let active = context.session.active_category();
    output_section("Categories");
    for category in Category::ALL {
        let marker = if category == active { "*" } else { " " };
        let profile = category.profile();
        io::print_info(format!(
            "{} {:<12} {:<12} {}",
            marker,
            category.key(),
            profile.title,
            profile.description
        ));
    }
    Ok(())
}
