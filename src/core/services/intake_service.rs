//! Free-text intake: ask the model for entry operations, then apply them one by one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::errors::TrackerError;
use crate::domain::{DailyEntry, Session};
use crate::nlp::{
    build_prompt, interpret_item, parse_operations, IntakeOperation, ItemInterpretation, LlmClient,
};
use crate::storage::EntryStore;

use super::entry_service::EntryService;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_SERVER_ERROR: u16 = 500;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntakeRequest {
    #[serde(default)]
    pub message: String,
}

impl IntakeRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of one model-supplied item, echoing the item as received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum IntakeOutcome {
    Applied {
        entry: Value,
        success: bool,
        data: Vec<DailyEntry>,
    },
    Failed {
        entry: Value,
        error: String,
    },
}

impl IntakeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, IntakeOutcome::Applied { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum IntakeResponse {
    Success {
        success: bool,
        results: Vec<IntakeOutcome>,
    },
    Failure {
        error: String,
    },
}

/// Response body paired with an HTTP-style status code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntakeReply {
    pub status: u16,
    pub body: IntakeResponse,
}

impl IntakeReply {
    fn failure(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            body: IntakeResponse::Failure {
                error: error.into(),
            },
        }
    }
}

/// Runs intake requests against a store and a language model.
///
/// Items commit independently: a failing item is reported in the results
/// and the rest of the batch still runs. Nothing is rolled back.
pub struct IntakeService<'a> {
    store: &'a dyn EntryStore,
    llm: &'a dyn LlmClient,
}

impl<'a> IntakeService<'a> {
    pub fn new(store: &'a dyn EntryStore, llm: &'a dyn LlmClient) -> Self {
        Self { store, llm }
    }

    pub fn handle(
        &self,
        session: &Session,
        request: &IntakeRequest,
        today: NaiveDate,
    ) -> IntakeReply {
        let message = request.message.trim();
        if message.is_empty() {
            return IntakeReply::failure(STATUS_BAD_REQUEST, "Message is required");
        }

        let prompt = build_prompt(message, today);
        let text = match self.llm.generate(&prompt) {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(error = %err, "intake model call failed");
                return IntakeReply::failure(STATUS_SERVER_ERROR, err.to_string());
            }
        };

        let items = match parse_operations(&text) {
            Ok(items) => items,
            Err(TrackerError::MalformedResponse(message)) => {
                return IntakeReply::failure(STATUS_SERVER_ERROR, message)
            }
            Err(err) => return IntakeReply::failure(STATUS_SERVER_ERROR, err.to_string()),
        };

        let results = self.apply(session, &items);
        tracing::info!(
            items = items.len(),
            applied = results.iter().filter(|outcome| outcome.is_success()).count(),
            failed = results.iter().filter(|outcome| !outcome.is_success()).count(),
            "intake batch processed"
        );
        IntakeReply {
            status: STATUS_OK,
            body: IntakeResponse::Success {
                success: true,
                results,
            },
        }
    }

    /// Applies each item in order; items without a date produce no result.
    pub fn apply(&self, session: &Session, items: &[Value]) -> Vec<IntakeOutcome> {
        let mut results = Vec::with_capacity(items.len());
        for item in items {
            let operation = match interpret_item(item) {
                ItemInterpretation::Apply(operation) => operation,
                ItemInterpretation::Skip => {
                    tracing::warn!(
                        item = %item,
                        "model returned an item without entry_date; skipping"
                    );
                    continue;
                }
                ItemInterpretation::Invalid(error) => {
                    tracing::warn!(item = %item, %error, "model returned an unusable item");
                    results.push(IntakeOutcome::Failed {
                        entry: item.clone(),
                        error,
                    });
                    continue;
                }
            };

            let written = match operation {
                IntakeOperation::Delete { date } => EntryService::delete(self.store, session, date),
                IntakeOperation::Upsert { date, patch } => {
                    EntryService::upsert(self.store, session, date, patch)
                }
            };
            match written {
                Ok(data) => results.push(IntakeOutcome::Applied {
                    entry: item.clone(),
                    success: true,
                    data,
                }),
                Err(err) => {
                    tracing::error!(item = %item, error = %err, "intake operation failed");
                    results.push(IntakeOutcome::Failed {
                        entry: item.clone(),
                        error: err.to_string(),
                    });
                }
            }
        }
        results
    }
}
