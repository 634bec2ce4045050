use std::fmt;

/// Opaque session token identifying a portfolio without a login.
///
/// The raw value is trimmed on construction. An empty token means the user is
/// browsing without a session.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Create a token from user input, trimming surrounding whitespace
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// Token representing "no session"
    pub fn none() -> Self {
        Self::default()
    }

    /// Check if there is no session
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw token value, as sent in the request header
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for display: first six characters followed by an ellipsis
    pub fn short(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let head: String = self.0.chars().take(6).collect();
        format!("{}…", head)
    }
}

impl From<&str> for SessionToken {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for SessionToken {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<Option<String>> for SessionToken {
    fn from(raw: Option<String>) -> Self {
        raw.map(Self::new).unwrap_or_default()
    }
}

// Only the shortened form ever reaches logs.
impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "<none>")
        } else {
            write!(f, "{}", self.short())
        }
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&self.short()).finish()
    }
}
