mod file_system;

use crate::adapters::outbound::picture_cache::file_system::FileSystem;
use crate::ports::outbound::picture_cache::PictureCache;
use std::path::Path;

#[must_use]
pub fn init_picture_cache(dir: &Path, http_client: reqwest::Client) -> impl PictureCache {
    FileSystem::new(dir, http_client)
}
