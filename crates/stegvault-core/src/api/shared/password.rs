use std::fmt::{self, Debug, Formatter};

/// An optional password, an empty one counts as no password at all.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Password(Option<String>);

impl Password {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_some(&self) -> bool {
        self.0.is_some()
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
        Self(password.filter(|p| !p.is_empty()))
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

impl AsRef<Option<String>> for Password {
    fn as_ref(&self) -> &Option<String> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_and_as_ref() {
        let password: Password = None::<String>.into();
        assert_eq!(password.as_ref(), &None);

        let password: Password = "password".into();
        assert_eq!(password.as_ref(), &Some("password".to_string()));
        assert_eq!(password.as_deref(), Some("password"));
    }

    #[test]
    fn test_empty_is_none() {
        let password: Password = "".into();
        assert!(!password.is_some());

        let password: Password = Some(String::new()).into();
        assert_eq!(password.as_deref(), None);
    }

    #[test]
    fn test_debug() {
        let password: Password = None::<String>.into();
        assert_eq!(format!("{:?}", password), "Password(None)");

        let password: Password = "password".into();
        assert_eq!(format!("{:?}", password), "Password(********)");
    }
}
