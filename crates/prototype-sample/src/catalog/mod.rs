//! # Template Catalog
//!
//! This module wires the sample prototypes into ready-to-use registries.
//!
//! ## Two Flavours
//!
//! - [`TemplateCatalog`]: an in-process [`PrototypeRegistry`] seeded with the sample
//!   templates. Synchronous, shareable behind an `Arc`.
//! - [`TemplateService`]: the same templates served by a
//!   [`RegistryActor`](prototype_framework::RegistryActor) running in its own Tokio task,
//!   reached through a cloneable client.
//!
//! Both keep the [`PrototypeHandle`]s of the templates they seed, so the owner can
//! keep adjusting a template after registration and every later retrieval picks the
//! change up:
//!
//! ```rust
//! use prototype_sample::catalog::TemplateCatalog;
//!
//! let catalog = TemplateCatalog::new().unwrap();
//! catalog.document().update(|doc| doc.add_tag("Reviewed"));
//!
//! let doc = catalog.new_document().unwrap();
//! assert!(doc.tags.contains(&"Reviewed".to_string()));
//! ```

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;

use crate::model::{CharacterStats, Document, GameCharacter, UserProfile};
use chrono::NaiveDate;
use prototype_framework::{PrototypeHandle, PrototypeRegistry, RegistryError};
use tracing::info;

/// Registry key of the warrior character template.
pub const WARRIOR: &str = "warrior";
/// Registry key of the document template.
pub const DOCUMENT_TEMPLATE: &str = "document_template";
/// Registry key of the user profile template.
pub const USER_TEMPLATE: &str = "user_template";

/// Handles to the three sample templates.
#[derive(Clone)]
pub struct SampleTemplates {
    pub warrior: PrototypeHandle<GameCharacter>,
    pub document: PrototypeHandle<Document>,
    pub profile: PrototypeHandle<UserProfile>,
}

impl SampleTemplates {
    /// Builds the sample templates fully configured.
    pub fn build() -> Self {
        let mut warrior = GameCharacter::new("Aragorn", "Warrior");
        warrior.set_stats(CharacterStats {
            level: 5,
            health: 150,
            mana: 75,
            strength: 18,
            intelligence: 12,
            dexterity: 15,
        });
        warrior.add_skill("Sword Mastery");
        warrior.add_skill("Shield Block");
        warrior.add_item("Iron Sword", 1);
        warrior.add_item("Health Potion", 3);

        let mut document = Document::new(
            "Design Patterns",
            "This document explains design patterns.",
            "John Doe",
        );
        document.add_tag("Programming");
        document.add_tag("Design");
        document.set_public(true);

        let mut profile = UserProfile::new("johndoe", "john@example.com", "John", "Doe");
        if let Some(birthday) = NaiveDate::from_ymd_opt(1990, 5, 15) {
            profile.set_date_of_birth(birthday);
        }
        profile.add_interest("Programming");
        profile.add_interest("Gaming");
        profile.set_setting("Theme", "Dark");
        profile.set_setting("Language", "English");

        Self {
            warrior: PrototypeHandle::new(warrior),
            document: PrototypeHandle::new(document),
            profile: PrototypeHandle::new(profile),
        }
    }

    /// Registers every template in `registry` under its well-known key.
    pub fn register_into(&self, registry: &PrototypeRegistry) -> Result<(), RegistryError> {
        registry.register(WARRIOR, &self.warrior)?;
        registry.register(DOCUMENT_TEMPLATE, &self.document)?;
        registry.register(USER_TEMPLATE, &self.profile)?;
        Ok(())
    }
}

/// An in-process registry seeded with the sample templates.
pub struct TemplateCatalog {
    registry: PrototypeRegistry,
    templates: SampleTemplates,
}

impl TemplateCatalog {
    /// Creates the catalog and registers the sample templates.
    pub fn new() -> Result<Self, CatalogError> {
        let registry = PrototypeRegistry::new();
        let templates = SampleTemplates::build();
        templates.register_into(&registry)?;
        info!(size = registry.len(), "Template catalog ready");
        Ok(Self {
            registry,
            templates,
        })
    }

    /// The underlying registry, for custom registrations and lookups.
    pub fn registry(&self) -> &PrototypeRegistry {
        &self.registry
    }

    pub fn warrior(&self) -> &PrototypeHandle<GameCharacter> {
        &self.templates.warrior
    }

    pub fn document(&self) -> &PrototypeHandle<Document> {
        &self.templates.document
    }

    pub fn profile(&self) -> &PrototypeHandle<UserProfile> {
        &self.templates.profile
    }

    /// A fresh character cloned from the warrior template.
    pub fn new_warrior(&self) -> Result<GameCharacter, CatalogError> {
        Ok(self.registry.get_prototype(WARRIOR)?)
    }

    /// A fresh document cloned from the document template.
    pub fn new_document(&self) -> Result<Document, CatalogError> {
        Ok(self.registry.get_prototype(DOCUMENT_TEMPLATE)?)
    }

    /// A fresh profile cloned from the user template.
    pub fn new_profile(&self) -> Result<UserProfile, CatalogError> {
        Ok(self.registry.get_prototype(USER_TEMPLATE)?)
    }
}
