use serde::{Deserialize, Serialize};

pub const ANONYMOUS_DISPLAY_NAME: &str = "Anonymous User";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActorIdentity {
    pub user_id: String,
    pub username: String,
}

impl ActorIdentity {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
        }
    }

    pub fn anonymous(user_id: impl Into<String>) -> Self {
        Self::new(user_id, ANONYMOUS_DISPLAY_NAME)
    }
}
