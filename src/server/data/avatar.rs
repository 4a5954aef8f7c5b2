//! Avatar image downloads.

use serenity::async_trait;

use crate::server::error::AppError;

/// Fetches raw avatar image bytes by URL.
#[async_trait]
pub trait AvatarSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError>;
}

/// `AvatarSource` backed by a shared reqwest client.
#[derive(Clone)]
pub struct HttpAvatarSource {
    client: reqwest::Client,
}

impl HttpAvatarSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AvatarSource for HttpAvatarSource {
    /// Downloads the avatar, treating any non-success status as an error.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(bytes.to_vec())
    }
}
