//! # Prototype Sample
//!
//! Sample prototypes and catalogs built on [`prototype_framework`].
//!
//! - **[model]**: Plain data holders ([`Document`](model::Document),
//!   [`UserProfile`](model::UserProfile), [`GameCharacter`](model::GameCharacter))
//!   implementing the `Prototype` trait through copy construction.
//! - **[catalog]**: Registries seeded with pre-configured templates, in-process
//!   ([`TemplateCatalog`](catalog::TemplateCatalog)) or actor-served
//!   ([`TemplateService`](catalog::TemplateService)).

pub mod catalog;
pub mod model;
