use serde::{Deserialize, Serialize};

/// Account on the exchange. `password` is only ever sent, the backend does
/// not echo it back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    /// Credentials used both to register and to authenticate.
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: None,
            user_name: user_name.into(),
            password: Some(password.into()),
        }
    }
}

/// Token returned by a successful authentication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub token: String,
}

impl Token {
    pub fn is_empty(&self) -> bool {
        self.token.trim().is_empty()
    }
}
