//! Message catalog backing the [`Translator`] seam

use std::collections::HashMap;

use crate::store::Translator;

const ENGLISH: &[(&str, &str)] = &[
    ("login_title", "Login"),
    ("welcome_back", "Welcome back!"),
    ("please_fill_credentials", "Please fill in your credentials to login."),
    ("username", "Username"),
    ("password", "Password"),
    ("login", "Login"),
    ("please_enter_username", "Please enter username."),
    ("please_enter_your_password", "Please enter your password."),
    ("no_admin_account_found", "No account found with that username."),
    ("invalid_password", "The password you entered was not valid."),
    ("oops_something_went_wrong", "Oops! Something went wrong. Please try again later."),
];

/// Read-only key to message map
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Catalog holding the built-in English messages
    pub fn english() -> Self {
        Self::default().with_entries(ENGLISH.iter().copied())
    }

    /// Add or replace entries
    pub fn with_entries<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.messages
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
