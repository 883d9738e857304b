use crate::cli::core::{parse_date, parse_hours, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandDefinition;
use crate::cli::ui::style::hours;
use crate::core::services::EntryService;
use crate::domain::EntryPatch;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "set",
            "Create or update a day's target and actual hours",
            "set <date> [target=<hours>] [actual=<hours>]",
            cmd_set,
        ),
        CommandDefinition::new(
            "delete",
            "Remove the entry for a day",
            "delete <date>",
            cmd_delete,
        ),
    ]
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((raw_date, fields)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: set <date> [target=<hours>] [actual=<hours>]".into(),
        ));
    };
    let date = parse_date(raw_date, context.today())?;
    let patch = parse_patch(fields)?;
    if patch.is_empty() {
        return Err(CommandError::InvalidArguments(
            "provide at least one of target=<hours> or actual=<hours>".into(),
        ));
    }

    let session = *context.state.session();
    let written = EntryService::upsert(&context.storage, &session, date, patch)?;
    context.refresh()?;
    for entry in &written {
        io::print_success(format!(
            "{}: target {}h, actual {}h",
            entry.entry_date,
            hours(entry.target_hours),
            hours(entry.actual_hours)
        ));
    }
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(CommandError::InvalidArguments("usage: delete <date>".into()));
    };
    let date = parse_date(raw, context.today())?;
    let session = *context.state.session();
    let removed = EntryService::delete(&context.storage, &session, date)?;
    context.refresh()?;
    if removed.is_empty() {
        io::print_warning(format!("No entry recorded for {}.", date));
    } else {
        io::print_success(format!("Deleted entry for {}.", date));
    }
    Ok(())
}

/// Reads `target=` and `actual=` pairs; fields not mentioned stay untouched.
fn parse_patch(fields: &[&str]) -> Result<EntryPatch, CommandError> {
    let mut patch = EntryPatch::default();
    for field in fields {
        let Some((key, value)) = field.split_once('=') else {
            return Err(CommandError::InvalidArguments(format!(
                "expected key=value, got `{}`",
                field
            )));
        };
        match key.to_ascii_lowercase().as_str() {
            "target" | "target_hours" => patch.target_hours = Some(parse_hours("target", value)?),
            "actual" | "actual_hours" => patch.actual_hours = Some(parse_hours("actual", value)?),
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown field `{}` (use target or actual)",
                    other
                )))
            }
        }
    }
    Ok(patch)
}
