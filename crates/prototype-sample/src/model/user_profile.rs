use chrono::NaiveDate;
use prototype_framework::Prototype;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A user profile template with interests and per-user settings.
///
/// # Prototype
/// This struct implements the [`Prototype`] trait; both the `interests` list and
/// the `settings` map are rebuilt on every clone.
#[derive(Debug, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub interests: Vec<String>,
    pub settings: BTreeMap<String, String>,
    pub is_active: bool,
}

/// Partial update for a [`UserProfile`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

impl UserProfile {
    /// Creates a new, active profile with no interests or settings.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth: None,
            interests: Vec::new(),
            settings: BTreeMap::new(),
            is_active: true,
        }
    }

    /// Copy construction: a value-equal profile owning its own collections.
    pub fn copy_from(other: &UserProfile) -> Self {
        Self {
            username: other.username.clone(),
            email: other.email.clone(),
            first_name: other.first_name.clone(),
            last_name: other.last_name.clone(),
            date_of_birth: other.date_of_birth,
            interests: other.interests.iter().cloned().collect(),
            settings: other
                .settings
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            is_active: other.is_active,
        }
    }

    pub fn add_interest(&mut self, interest: impl Into<String>) {
        self.interests.push(interest.into());
    }

    /// Inserts or replaces a setting.
    pub fn set_setting(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.settings.insert(key.into(), value.into());
    }

    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    pub fn set_date_of_birth(&mut self, date: NaiveDate) {
        self.date_of_birth = Some(date);
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Applies a partial update. Returns `true` if any field was present.
    pub fn apply(&mut self, update: ProfileUpdate) -> bool {
        let mut changed = false;
        if let Some(username) = update.username {
            self.username = username;
            changed = true;
        }
        if let Some(email) = update.email {
            self.email = email;
            changed = true;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
            changed = true;
        }
        changed
    }
}

impl Prototype for UserProfile {
    fn clone_prototype(&self) -> Self {
        Self::copy_from(self)
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== User Profile: {} ===", self.username)?;
        writeln!(f, "Name: {}", self.full_name())?;
        writeln!(f, "Email: {}", self.email)?;
        match self.date_of_birth {
            Some(date) => writeln!(f, "Date of Birth: {}", date.format("%Y-%m-%d"))?,
            None => writeln!(f, "Date of Birth: Unknown")?,
        }
        writeln!(f, "Interests: {}", super::joined_or_none(&self.interests))?;
        let settings: Vec<String> = self
            .settings
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        writeln!(f, "Settings: {}", super::joined_or_none(&settings))?;
        write!(f, "Active: {}", super::yes_no(self.is_active))
    }
}
