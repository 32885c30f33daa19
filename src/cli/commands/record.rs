use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{ArgumentWords, CommandEntry};
use crate::estimate::{Category, CostField};
use crate::timer::format_hours;

const SET_USAGE: &str = "set <materials|hours|rate> <value> [category]";
const STATUS_USAGE: &str = "status [json]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "set",
            "Set a cost input (invalid numbers count as 0)",
            SET_USAGE,
            cmd_set,
        )
        .completing(ArgumentWords::Fields),
        CommandEntry::new(
            "status",
            "Show the active estimate and timer",
            STATUS_USAGE,
            cmd_status,
        )
        .completing(ArgumentWords::Fixed(&["json"])),
        CommandEntry::new(
            "summary",
            "Show totals for every category",
            "summary",
            cmd_summary,
        ),
    ]
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (field, raw, category) = match args {
        [field, raw] => (*field, *raw, context.session.active_category()),
        [field, raw, category] => (*field, *raw, category.parse::<Category>()?),
        _ => return Err(CommandError::usage(SET_USAGE)),
    };
    let field: CostField = field.parse()?;

    let stored = context.session.set_field(category, field, raw);
    let rendered = match field {
        CostField::LaborHours => format_hours(stored),
        CostField::MaterialCost | CostField::HourlyRate => context.money(stored),
    };
    if was_coerced(raw, stored) {
        io::print_warning(format!("`{}` is not a usable amount; stored 0.", raw));
    }
    io::print_success(format!("{} {} = {}", category, field, rendered));
    io::print_info(format!(
        "Total for {}: {}",
        category,
        context.money(context.session.ledger().total(category))
    ));
    Ok(())
}

fn cmd_status(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let state = context.session.display_state();
    match args {
        [] => {
            context.render_state(&state);
            Ok(())
        }
        [format] if format.eq_ignore_ascii_case("json") => {
            let json = serde_json::to_string_pretty(&state)?;
            println!("{json}");
            Ok(())
        }
        _ => Err(CommandError::usage(STATUS_USAGE)),
    }
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let active = context.session.active_category();
    output_section("Summary");
    io::print_info(format!(
        "  {:<12} {:>12} {:>8} {:>12} {:>14}",
        "category", "materials", "hours", "rate", "total"
    ));
    for (category, record) in context.session.ledger().iter() {
        let marker = if category == active { "*" } else { " " };
        io::print_info(format!(
            "{} {:<12} {:>12} {:>8} {:>12} {:>14}",
            marker,
            category.key(),
            context.money(record.material_cost),
            format_hours(record.labor_hours),
            context.money(record.hourly_rate),
            context.money(record.total())
        ));
    }
    io::print_info(format!(
        "  {:<12} {:>49}",
        "all",
        context.money(context.session.ledger().grand_total())
    ));
    Ok(())
}

/// True when non-empty input was replaced by something other than what the
/// user typed.
fn was_coerced(raw: &str, stored: f64) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().ok() != Some(stored)
}
