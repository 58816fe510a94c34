//! Session identity passed explicitly to owner-scoped services.
//!
//! Authentication itself happens outside this crate; services only need the
//! resolved user id to scope reads and writes. There is no ambient
//! "current user" - callers pass the context on every owner-gated call.

use serde::{Deserialize, Serialize};

/// The identity of the signed-in owner on whose behalf a call is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub user_id: String,
}

impl UserContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
