use crate::ports::outbound::picture_cache::{PictureCache, PictureCacheError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::time::Instant;
use uuid::Uuid;

/// Pictures stored as `<dir>/<id>.jpg`, fetched on first use and kept forever.
pub struct FileSystem {
    dir: PathBuf,
    http_client: reqwest::Client,
}

impl FileSystem {
    pub fn new(dir: &Path, http_client: reqwest::Client) -> Self {
        Self {
            dir: dir.to_path_buf(),
            http_client,
        }
    }

    fn path_for(&self, id: &Uuid) -> PathBuf {
        self.dir.join(format!("{id}.jpg"))
    }

    async fn download(&self, source_url: &str, path: &Path) -> Result<(), PictureCacheError> {
        let start = Instant::now();
        let bytes = self
            .http_client
            .get(source_url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|why| PictureCacheError::new(why.to_string()))?
            .bytes()
            .await
            .map_err(|why| PictureCacheError::new(why.to_string()))?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|why| PictureCacheError::new(why.to_string()))?;

        // Concurrent misses for one id must not share a temp file.
        let tmp = path.with_extension(format!("{}.tmp", Uuid::new_v4()));
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|why| PictureCacheError::new(why.to_string()))?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|why| PictureCacheError::new(why.to_string()))?;

        log::info!(
            "Downloaded {} bytes from {source_url} in {}ms",
            bytes.len(),
            start.elapsed().as_millis()
        );
        Ok(())
    }
}

#[async_trait]
impl PictureCache for FileSystem {
    async fn get(&self, id: &Uuid, source_url: &str) -> Result<PathBuf, PictureCacheError> {
        let path = self.path_for(id);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(path);
        }

        log::info!("Loading missing picture {id}");
        self.download(source_url, &path).await?;
        Ok(path)
    }
}
