//! # Prototype Recipe Demo
//!
//! Walks through the prototype workflow:
//! 1.  Cloning a configured [`Document`] and customizing the copy.
//! 2.  Cloning a [`UserProfile`] with independent interests and settings.
//! 3.  Producing new instances from a [`TemplateCatalog`] and a [`TemplateService`].

use prototype_framework::tracing::setup_tracing;
use prototype_framework::{Prototype, DEFAULT_BUFFER_SIZE};
use prototype_sample::catalog::{CatalogError, TemplateCatalog, TemplateService};
use prototype_sample::model::{Document, UserProfile};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), CatalogError> {
    setup_tracing();

    info!("Starting prototype demo");

    let span = tracing::info_span!("document_clone");
    async {
        let mut original = Document::new(
            "Design Patterns",
            "This document explains design patterns.",
            "John Doe",
        );
        original.add_tag("Programming");
        original.add_tag("Design");
        original.set_public(true);
        println!("Original Document:\n{original}\n");

        let mut copy = original.clone_prototype();
        copy.set_title("Design Patterns - Copy");
        copy.update_content("This is a modified copy of the original document.");
        copy.add_tag("Copy");
        println!("Cloned Document (modified):\n{copy}\n");
        println!("Original Document (unchanged):\n{original}\n");
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("profile_clone");
    async {
        let mut original = UserProfile::new("johndoe", "john@example.com", "John", "Doe");
        original.add_interest("Programming");
        original.set_setting("Theme", "Dark");

        let mut copy = original.clone_prototype();
        copy.username = "johndoe_clone".to_string();
        copy.email = "john_clone@example.com".to_string();
        copy.add_interest("Music");
        copy.set_setting("Theme", "Light");
        println!("Original Profile:\n{original}\n");
        println!("Cloned Profile (modified):\n{copy}\n");
    }
    .instrument(span)
    .await;

    let catalog = TemplateCatalog::new()?;
    let mut warrior = catalog.new_warrior()?;
    warrior.name = "New Warrior".to_string();
    warrior.stats.level = 1;
    warrior.stats.health = 100;
    println!("New Warrior from Catalog:\n{warrior}\n");

    let mut doc = catalog.new_document()?;
    doc.set_title("New Document");
    doc.update_content("This is a new document created from template.");
    println!("New Document from Catalog:\n{doc}\n");

    let service = TemplateService::start(DEFAULT_BUFFER_SIZE).await?;
    service
        .templates
        .profile
        .update(|profile| profile.set_setting("Theme", "High Contrast"));
    let profile = service.new_profile().await?;
    info!(username = %profile.username, theme = ?profile.setting("Theme"), "Profile from service");
    println!("New Profile from Service:\n{profile}\n");

    service.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
