pub mod calendar;
pub mod entry;
pub mod intake;
pub mod summary;
pub mod system;

use crate::cli::registry::CommandDefinition;

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(calendar::definitions());
    commands.extend(entry::definitions());
    commands.extend(summary::definitions());
    commands.extend(intake::definitions());
    commands.extend(system::definitions());
    commands
}
