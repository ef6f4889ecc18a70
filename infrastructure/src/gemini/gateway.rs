//! Gemini Chat Gateway implementation

use crate::config::Settings;
use crate::gemini::session::GeminiSession;
use async_trait::async_trait;
use githelper_application::ports::chat_gateway::{ChatGateway, ChatSession, GatewayError};
use githelper_domain::Model;
use tracing::info;

/// Chat gateway backed by the Generative Language REST API
pub struct GeminiGateway {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiGateway {
    /// Create a gateway from loaded settings.
    ///
    /// The credential is carried as-is; validity is not checked until the
    /// first send.
    pub fn new(settings: &Settings) -> Self {
        info!(
            base_url = %settings.base_url,
            key_present = settings.api_key.is_some(),
            "GeminiGateway initialized"
        );

        Self {
            client: reqwest::Client::new(),
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.clone(),
        }
    }
}

#[async_trait]
impl ChatGateway for GeminiGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn ChatSession>, GatewayError> {
        Ok(Box::new(GeminiSession::new(
            self.client.clone(),
            model.clone(),
            self.api_key.clone(),
            self.base_url.clone(),
        )))
    }

    fn available_models(&self) -> Vec<Model> {
        Model::known_models()
    }
}
