use crate::cli::core::{parse_date, CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandDefinition;
use crate::cli::state::CalendarView;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "calendar",
            "Show the calendar, optionally switching view or date",
            "calendar [month|week|day] [YYYY-MM-DD]",
            cmd_calendar,
        ),
        CommandDefinition::new(
            "next",
            "Move forward one month, week, or day",
            "next [count]",
            cmd_next,
        ),
        CommandDefinition::new(
            "prev",
            "Move back one month, week, or day",
            "prev [count]",
            cmd_prev,
        ),
        CommandDefinition::new("today", "Jump back to today", "today", cmd_today),
        CommandDefinition::new(
            "day",
            "Select a day and show its entry",
            "day <YYYY-MM-DD|today|yesterday|tomorrow>",
            cmd_day,
        ),
    ]
}

fn cmd_calendar(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() > 2 {
        return Err(CommandError::InvalidArguments(
            "usage: calendar [month|week|day] [YYYY-MM-DD]".into(),
        ));
    }
    let today = context.today();
    for arg in args {
        match CalendarView::parse(arg) {
            Some(view) => context.state.set_view(view),
            None => {
                let date = parse_date(arg, today)?;
                context.state.jump_to(date);
            }
        }
    }
    context.show_calendar();
    Ok(())
}

fn cmd_next(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let steps = parse_steps(args)?;
    context.state.navigate(steps);
    context.show_calendar();
    Ok(())
}

fn cmd_prev(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let steps = parse_steps(args)?;
    context.state.navigate(-steps);
    context.show_calendar();
    Ok(())
}

fn cmd_today(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let today = context.today();
    context.state.jump_to(today);
    context.show_calendar();
    Ok(())
}

fn cmd_day(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: day <YYYY-MM-DD>".into(),
        ));
    };
    let date = parse_date(raw, context.today())?;
    context.state.select(date);
    context.state.set_view(CalendarView::Day);
    context.show_calendar();
    Ok(())
}

fn parse_steps(args: &[&str]) -> Result<i32, CommandError> {
    match args {
        [] => Ok(1),
        [raw] => raw
            .parse::<i32>()
            .ok()
            .filter(|steps| *steps > 0)
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "count must be a positive number, got `{}`",
                    raw
                ))
            }),
        _ => Err(CommandError::InvalidArguments("expected at most one count".into())),
    }
}
