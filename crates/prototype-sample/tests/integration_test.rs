use prototype_framework::{Prototype, PrototypeHandle, PrototypeStore, RegistryError};
use prototype_sample::catalog::{
    CatalogError, TemplateCatalog, TemplateService, DOCUMENT_TEMPLATE, USER_TEMPLATE, WARRIOR,
};
use prototype_sample::model::{Document, DocumentUpdate, GameCharacter, UserProfile};
use std::sync::Arc;
use std::time::Duration;

/// The canonical example: cloning a registered document and tagging only the copy.
#[test]
fn test_registered_document_clone_is_independent() {
    let catalog = TemplateCatalog::new().expect("Failed to build catalog");
    let mut template = Document::new("T1", "body", "Ann");
    template.add_tag("a");
    catalog
        .registry()
        .register_value("t1", template)
        .expect("Failed to register");

    let original: Document = catalog.registry().get_prototype("t1").unwrap();
    let mut copy = original.clone_prototype();
    copy.add_tag("b");

    assert_eq!(original.tags, vec!["a"]);
    assert_eq!(copy.tags, vec!["a", "b"]);
}

#[test]
fn test_catalog_hands_out_fresh_instances() {
    let catalog = TemplateCatalog::new().unwrap();
    assert_eq!(
        catalog.registry().keys(),
        vec![DOCUMENT_TEMPLATE, USER_TEMPLATE, WARRIOR]
    );

    let mut warrior = catalog.new_warrior().unwrap();
    warrior.name = "New Warrior".into();
    warrior.stats.level = 1;
    warrior.add_item("Health Potion", 10);

    let second = catalog.new_warrior().unwrap();
    assert_eq!(second.name, "Aragorn");
    assert_eq!(second.stats.level, 5);
    assert_eq!(second.quantity_of("Health Potion"), 3);
    assert_eq!(second, *catalog.warrior().read());

    let first_doc = catalog.new_document().unwrap();
    let second_doc = catalog.new_document().unwrap();
    assert_eq!(first_doc, second_doc);
    assert_ne!(first_doc.tags.as_ptr(), second_doc.tags.as_ptr());
}

#[test]
fn test_template_changes_reach_later_clones_only() {
    let catalog = TemplateCatalog::new().unwrap();
    let before = catalog.new_document().unwrap();

    catalog.document().update(|doc| {
        doc.apply(DocumentUpdate {
            content: Some("Second edition.".into()),
            ..Default::default()
        });
        doc.add_tag("Revised");
    });

    let after = catalog.new_document().unwrap();
    assert_eq!(before.content, "This document explains design patterns.");
    assert_eq!(before.tags, vec!["Programming", "Design"]);
    assert_eq!(after.content, "Second edition.");
    assert_eq!(after.tags, vec!["Programming", "Design", "Revised"]);
}

#[test]
fn test_catalog_lookup_errors() {
    let catalog = TemplateCatalog::new().unwrap();

    let err = catalog
        .registry()
        .get_prototype::<UserProfile>(WARRIOR)
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::TypeMismatch {
            key: WARRIOR.into(),
            requested: "UserProfile",
            actual: "GameCharacter",
        }
    );

    assert!(catalog.registry().unregister(USER_TEMPLATE));
    assert!(matches!(
        catalog.new_profile(),
        Err(CatalogError::Registry(RegistryError::NotFound(key))) if key == USER_TEMPLATE
    ));
}

#[test]
fn test_shared_catalog_across_threads() {
    let catalog = Arc::new(TemplateCatalog::new().unwrap());

    std::thread::scope(|s| {
        for i in 0..4 {
            let catalog = Arc::clone(&catalog);
            s.spawn(move || {
                for _ in 0..50 {
                    let mut profile = catalog.new_profile().unwrap();
                    profile.add_interest(format!("thread_{i}"));
                    assert_eq!(profile.interests.len(), 3);
                }
            });
        }
    });

    assert_eq!(catalog.profile().read().interests, vec!["Programming", "Gaming"]);
}

#[tokio::test]
async fn test_template_service_full_lifecycle() {
    let service = TemplateService::start(8)
        .await
        .expect("Failed to start service");

    let mut doc = service.new_document().await.unwrap();
    doc.set_title("New Document");
    let fresh = service.new_document().await.unwrap();
    assert_eq!(fresh.title, "Design Patterns");

    service
        .templates
        .warrior
        .update(|hero| hero.add_skill("Battle Cry"));
    let recruit = service.new_warrior().await.unwrap();
    assert_eq!(recruit.skills.last().map(String::as_str), Some("Battle Cry"));

    // A custom template registered through the client.
    let scout = PrototypeHandle::new(GameCharacter::new("Scout", "Ranger"));
    service.client.register("scout", &scout).await.unwrap();
    let copy: GameCharacter = service.client.get_prototype("scout").await.unwrap();
    assert_eq!(copy.class, "Ranger");

    assert!(matches!(
        service.client.get_prototype::<Document>("scout").await,
        Err(RegistryError::TypeMismatch { .. })
    ));

    let registry = service.shutdown().await.expect("Failed to shutdown");
    assert_eq!(registry.len(), 4);
}

#[tokio::test]
async fn test_concurrent_service_clients() {
    let service = TemplateService::start(4).await.unwrap();

    let mut handles = vec![];
    for i in 0..10 {
        let client = service.client.clone();
        handles.push(tokio::spawn(async move {
            let mut profile: UserProfile = client.get_prototype(USER_TEMPLATE).await?;
            profile.set_setting("Theme", format!("theme_{i}"));
            Ok::<_, RegistryError>(profile)
        }));
    }

    for handle in handles {
        let profile = handle.await.unwrap().unwrap();
        assert_eq!(profile.settings.len(), 2);
        assert_ne!(profile.setting("Theme"), Some("Dark"));
    }
    assert_eq!(service.templates.profile.read().setting("Theme"), Some("Dark"));

    service.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_lookups_proceed_while_template_is_edited() {
    let service = TemplateService::start(4).await.unwrap();

    service
        .templates
        .profile
        .update(|profile| profile.set_setting("Theme", "Light"));
    let copy = tokio::time::timeout(Duration::from_secs(5), service.new_profile())
        .await
        .expect("lookup stalled after template edit")
        .unwrap();
    assert_eq!(copy.setting("Theme"), Some("Light"));

    let profile = service.templates.profile.clone();
    let editor = std::thread::spawn(move || {
        for i in 0..200 {
            profile.update(|p| p.set_setting("Theme", format!("theme_{i}")));
        }
    });

    let lookups = async {
        for _ in 0..200 {
            let copy = service.new_profile().await?;
            assert!(copy.setting("Theme").is_some());
        }
        Ok::<_, CatalogError>(())
    };
    tokio::time::timeout(Duration::from_secs(5), lookups)
        .await
        .expect("lookups stalled during template edits")
        .unwrap();
    editor.join().unwrap();

    assert_eq!(
        service.templates.profile.read().setting("Theme"),
        Some("theme_199")
    );
    service.shutdown().await.unwrap();
}
