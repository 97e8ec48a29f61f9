use std::fmt::{self, Debug, Formatter};

use zeroize::Zeroizing;

/// Optional password, an empty one counts as none
#[derive(Default, Clone)]
pub struct Password(Option<Zeroizing<String>>);

impl Password {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref().map(String::as_str)
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(password) = &self.0 {
            write!(f, "Password({})", "*".repeat(password.len()))
        } else {
            write!(f, "Password(None)")
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password.filter(|p| !p.is_empty()).map(Zeroizing::new))
    }
}

impl From<Option<&str>> for Password {
    fn from(password: Option<&str>) -> Self {
        password.map(str::to_string).into()
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Some(password).into()
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Some(password).into()
    }
}
