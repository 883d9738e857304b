use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandDefinition;
use crate::cli::ui::{summary::render_summary, trend};
use crate::core::services::TargetService;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "summary",
            "Show this month's progress and the month/year status",
            "summary",
            cmd_summary,
        ),
        CommandDefinition::new(
            "target",
            "Show or set this month's target hours",
            "target [hours]",
            cmd_target,
        ),
        CommandDefinition::new(
            "trend",
            "Chart target against actual hours for the last 13 months",
            "trend",
            cmd_trend,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.state.summary(context.today());
    output::section("Summary");
    output::raw(render_summary(&summary, &context.preferences()));
    Ok(())
}

fn cmd_target(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let today = context.today();
    match args {
        [] => {
            match &context.state.monthly_target {
                Some(target) => io::print_info(format!(
                    "Target for {}: {:.2}h",
                    target.month.format("%B %Y"),
                    target.target_hours
                )),
                None => io::print_info(format!("No target set for {}.", today.format("%B %Y"))),
            }
            Ok(())
        }
        [raw] => {
            let hours = TargetService::parse_input(raw)?;
            let session = *context.state.session();
            let saved = TargetService::set(&context.storage, &session, today, hours)?;
            context.refresh()?;
            io::print_success(format!(
                "Monthly target for {} saved: {:.2}h",
                saved.month.format("%B %Y"),
                saved.target_hours
            ));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments("usage: target [hours]".into())),
    }
}

fn cmd_trend(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let points = context.state.trend(context.today());
    output::section("Monthly trend");
    output::raw(trend::render_trend(&points, trend::bar_width(), &context.preferences()));
    Ok(())
}
