use {crate::models::Token, std::fmt};

/// Bearer value sent in the `Authorization` header.
///
/// The backend reads the second space separated word of the header, so the
/// token is always prefixed with `Bearer `.
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization(String);

impl Authorization {
    /// Wrap a raw token returned by [crate::ExchangeApi::authenticate].
    pub fn bearer(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token without the scheme.
    pub fn token(&self) -> &str {
        &self.0
    }

    /// The full header value.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl From<Token> for Authorization {
    fn from(token: Token) -> Self {
        Self(token.token)
    }
}

impl From<&Token> for Authorization {
    fn from(token: &Token) -> Self {
        Self(token.token.clone())
    }
}

// Tokens end up in logs through `{:?}` otherwise.
impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Authorization(***)")
    }
}
