use crate::domain::index::CardIndex;
use crate::ports::outbound::card_store::{CardStore, CardStoreError};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::time::Instant;

pub const DUMP_FILENAME: &str = "all.dump.json";
const BULK_DATA_TYPE: &str = "all-cards";

#[derive(Deserialize)]
struct BulkData {
    download_uri: String,
}

/// Scryfall bulk dump kept on disk, downloaded only when it is absent.
pub struct ScryfallDump {
    dump_dir: PathBuf,
    dump_url: Option<String>,
    api_url: String,
    http_client: reqwest::Client,
}

impl ScryfallDump {
    pub fn new(
        dump_dir: &Path,
        dump_url: Option<String>,
        api_url: &str,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            dump_dir: dump_dir.to_path_buf(),
            dump_url,
            api_url: api_url.to_string(),
            http_client,
        }
    }

    #[must_use]
    pub fn dump_path(&self) -> PathBuf {
        self.dump_dir.join(DUMP_FILENAME)
    }

    async fn ensure_dump(&self) -> Result<PathBuf, CardStoreError> {
        let path = self.dump_path();
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(path);
        }

        log::info!("Dump {} is absent, loading", path.display());
        let url = self.download_url().await?;
        self.download(&url, &path).await?;
        Ok(path)
    }

    async fn download_url(&self) -> Result<String, CardStoreError> {
        if let Some(url) = &self.dump_url {
            return Ok(url.clone());
        }

        let bulk_data: BulkData = self
            .http_client
            .get(format!("{}/bulk-data/{BULK_DATA_TYPE}", self.api_url))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|why| CardStoreError::new(format!("Could not resolve dump url - {why}")))?
            .json()
            .await
            .map_err(|why| CardStoreError::new(format!("Invalid bulk data response - {why}")))?;

        Ok(bulk_data.download_uri)
    }

    async fn download(&self, url: &str, path: &Path) -> Result<(), CardStoreError> {
        log::info!("Loading new dump from {url} into {}", path.display());
        let start = Instant::now();

        let mut response = self
            .http_client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|why| CardStoreError::new(format!("Dump download failed - {why}")))?;

        tokio::fs::create_dir_all(&self.dump_dir)
            .await
            .map_err(|why| CardStoreError::new(why.to_string()))?;

        let tmp = PathBuf::from(format!("{}.tmp", path.display()));
        let mut out = tokio::fs::File::create(&tmp)
            .await
            .map_err(|why| CardStoreError::new(why.to_string()))?;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|why| CardStoreError::new(format!("Dump download failed - {why}")))?
        {
            out.write_all(&chunk)
                .await
                .map_err(|why| CardStoreError::new(why.to_string()))?;
        }
        out.flush()
            .await
            .map_err(|why| CardStoreError::new(why.to_string()))?;
        drop(out);

        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|why| CardStoreError::new(why.to_string()))?;

        log::info!(
            "New dump has been downloaded in {}s",
            start.elapsed().as_secs()
        );
        Ok(())
    }
}

#[async_trait]
impl CardStore for ScryfallDump {
    async fn load(&self) -> Result<CardIndex, CardStoreError> {
        let path = self.ensure_dump().await?;

        tokio::task::spawn_blocking(move || CardIndex::from_path(&path))
            .await
            .map_err(|why| CardStoreError::new(why.to_string()))?
            .map_err(|why| CardStoreError::new(why.to_string()))
    }
}
