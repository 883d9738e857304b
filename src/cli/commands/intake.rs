use serde_json::Value;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandDefinition;
use crate::core::services::{
    IntakeOutcome, IntakeReply, IntakeRequest, IntakeResponse, IntakeService,
};
use crate::nlp::{GeminiClient, LlmClient};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "log",
            "Describe hours in plain language and let the model record them",
            "log <message>",
            cmd_log,
        ),
        CommandDefinition::new(
            "models",
            "List the language models available to the configured key",
            "models",
            cmd_models,
        ),
    ]
}

fn cmd_log(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let message = args.join(" ");
    if message.trim().is_empty() {
        return Err(CommandError::InvalidArguments("usage: log <message>".into()));
    }
    let client = GeminiClient::from_settings(context.config.llm.clone())?;
    let session = *context.state.session();
    let reply = IntakeService::new(&context.storage, &client).handle(
        &session,
        &IntakeRequest::new(message),
        context.today(),
    );
    report_reply(&reply)?;
    context.refresh()?;
    Ok(())
}

fn cmd_models(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let client = GeminiClient::from_settings(context.config.llm.clone())?;
    let models = client.list_models()?;
    output::section("Available models");
    for name in models {
        io::print_info(format!("  {}", name));
    }
    Ok(())
}

fn report_reply(reply: &IntakeReply) -> CommandResult {
    match &reply.body {
        IntakeResponse::Failure { error } => Err(CommandError::Message(format!(
            "{} (status {})",
            error, reply.status
        ))),
        IntakeResponse::Success { results, .. } => {
            if results.is_empty() {
                io::print_warning("The model did not return any dated entries.");
            }
            for outcome in results {
                match outcome {
                    IntakeOutcome::Applied { entry, data, .. } => io::print_success(format!(
                        "{} {}: {} row(s) written",
                        field(entry, "operation").unwrap_or("upsert"),
                        field(entry, "entry_date").unwrap_or("?"),
                        data.len()
                    )),
                    IntakeOutcome::Failed { entry, error } => io::print_error(format!(
                        "{}: {}",
                        field(entry, "entry_date").unwrap_or("item"),
                        error
                    )),
                }
            }
            Ok(())
        }
    }
}

fn field<'a>(entry: &'a Value, key: &str) -> Option<&'a str> {
    entry.get(key).and_then(Value::as_str)
}
