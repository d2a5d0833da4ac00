use super::{CatalogError, SampleTemplates, DOCUMENT_TEMPLATE, USER_TEMPLATE, WARRIOR};
use crate::model::{Document, GameCharacter, UserProfile};
use prototype_framework::{PrototypeRegistry, PrototypeStore, RegistryActor, RegistryClient};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The sample templates served by a registry actor.
///
/// # Shutdown
///
/// Dropping every [`RegistryClient`] closes the actor's channel. [`shutdown`](Self::shutdown)
/// drops the service's own client and waits for the actor task, so clones of
/// `client` handed out elsewhere must be dropped first.
pub struct TemplateService {
    pub client: RegistryClient,
    pub templates: SampleTemplates,
    handle: JoinHandle<PrototypeRegistry>,
}

impl TemplateService {
    /// Spawns the registry actor and registers the sample templates through it.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn start(buffer_size: usize) -> Result<Self, CatalogError> {
        let (actor, client) = RegistryActor::new(buffer_size);
        let handle = tokio::spawn(actor.run());

        let templates = SampleTemplates::build();
        client.register(WARRIOR, &templates.warrior).await?;
        client.register(DOCUMENT_TEMPLATE, &templates.document).await?;
        client.register(USER_TEMPLATE, &templates.profile).await?;
        info!("Template service ready");

        Ok(Self {
            client,
            templates,
            handle,
        })
    }

    pub async fn new_warrior(&self) -> Result<GameCharacter, CatalogError> {
        Ok(self.client.get_prototype(WARRIOR).await?)
    }

    pub async fn new_document(&self) -> Result<Document, CatalogError> {
        Ok(self.client.get_prototype(DOCUMENT_TEMPLATE).await?)
    }

    pub async fn new_profile(&self) -> Result<UserProfile, CatalogError> {
        Ok(self.client.get_prototype(USER_TEMPLATE).await?)
    }

    /// Stops the actor and returns the registry it was serving.
    pub async fn shutdown(self) -> Result<PrototypeRegistry, CatalogError> {
        info!("Shutting down template service...");
        drop(self.client);

        let registry = self.handle.await.inspect_err(|e| {
            error!("Registry task failed: {:?}", e);
        })?;

        info!(size = registry.len(), "Template service shutdown complete.");
        Ok(registry)
    }
}
