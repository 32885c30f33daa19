use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::timer::{format_elapsed, format_hours, TimerStatus, Transition};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("start", "Start or resume the timer", "start", cmd_start),
        CommandEntry::new(
            "pause",
            "Pause the timer without losing the count",
            "pause",
            cmd_pause,
        ),
        CommandEntry::new(
            "stop",
            "Stop the timer and add the time to the active category",
            "stop",
            cmd_stop,
        ),
    ]
}

fn report(context: &ShellContext, transition: Transition) {
    let elapsed = context.session.display_state().elapsed_formatted;
    match transition {
        Transition::Applied {
            from: TimerStatus::Paused,
            to: TimerStatus::Running,
        } => io::print_success(format!("Timer resumed at {}.", elapsed)),
        Transition::Applied {
            to: TimerStatus::Running,
            ..
        } => io::print_success("Timer started."),
        Transition::Applied {
            to: TimerStatus::Paused,
            ..
        } => io::print_success(format!("Timer paused at {}.", elapsed)),
        Transition::Applied { to, .. } => io::print_success(format!("Timer {}.", to)),
        Transition::Ignored { status, action } => io::print_warning(format!(
            "Cannot {} the timer while it is {}.",
            action, status
        )),
    }
}

fn cmd_start(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let transition = context.session.timer_start();
    report(context, transition);
    Ok(())
}

fn cmd_pause(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let transition = context.session.timer_pause();
    report(context, transition);
    Ok(())
}

fn cmd_stop(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let Some(commit) = context.session.timer_stop() else {
        io::print_warning("Cannot stop the timer while it is idle.");
        return Ok(());
    };
    let category = context.session.active_category();
    io::print_success(format!(
        "Added {} ({} h) to {}.",
        format_elapsed(commit.seconds()),
        format_hours(commit.hours()),
        category.profile().title
    ));
    let state = context.session.display_state();
    context.render_state(&state);
    Ok(())
}
