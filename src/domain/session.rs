use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of the user on whose behalf store calls are made.
///
/// Every store operation takes a session explicitly; there is no ambient
/// "current user".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
}

impl Session {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}
