use chrono::{DateTime, Utc};
use prototype_framework::Prototype;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A document template: text plus authoring metadata and free-form tags.
///
/// # Prototype
/// This struct implements the [`Prototype`] trait, so it can be registered in a
/// [`PrototypeRegistry`](prototype_framework::PrototypeRegistry) and cloned on demand.
/// Every mutator refreshes `modified_at`.
#[derive(Debug, PartialEq)]
pub struct Document {
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub is_public: bool,
}

/// Partial update for a [`Document`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_public: Option<bool>,
}

impl Document {
    /// Creates a new Document instance.
    ///
    /// # Arguments
    /// * `title` - Document title
    /// * `content` - Body text
    /// * `author` - Author's display name
    ///
    /// # Notes
    /// Starts private, untagged, with `created_at == modified_at == now`.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            created_at: now,
            modified_at: now,
            tags: Vec::new(),
            is_public: false,
        }
    }

    /// Copy construction: a value-equal document owning its own tag list.
    pub fn copy_from(other: &Document) -> Self {
        Self {
            title: other.title.clone(),
            content: other.content.clone(),
            author: other.author.clone(),
            created_at: other.created_at,
            modified_at: other.modified_at,
            tags: other.tags.iter().cloned().collect(),
            is_public: other.is_public,
        }
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
        self.touch();
    }

    pub fn update_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.touch();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    pub fn set_public(&mut self, is_public: bool) {
        self.is_public = is_public;
        self.touch();
    }

    /// Applies a partial update. Returns `true` if any field was present.
    pub fn apply(&mut self, update: DocumentUpdate) -> bool {
        let mut changed = false;
        if let Some(title) = update.title {
            self.title = title;
            changed = true;
        }
        if let Some(content) = update.content {
            self.content = content;
            changed = true;
        }
        if let Some(is_public) = update.is_public {
            self.is_public = is_public;
            changed = true;
        }
        if changed {
            self.touch();
        }
        changed
    }
}

impl Prototype for Document {
    fn clone_prototype(&self) -> Self {
        Self::copy_from(self)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Document: {} ===", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Created: {}", self.created_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Modified: {}", self.modified_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Content: {}", self.content)?;
        writeln!(f, "Tags: {}", super::joined_or_none(&self.tags))?;
        write!(f, "Public: {}", super::yes_no(self.is_public))
    }
}
