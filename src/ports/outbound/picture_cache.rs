use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error retrieving picture: {0}")]
pub struct PictureCacheError(String);

impl PictureCacheError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PictureCache {
    /// Local path of the picture for `id`, downloading it from `source_url` on a miss.
    async fn get(&self, id: &Uuid, source_url: &str) -> Result<PathBuf, PictureCacheError>;
}
