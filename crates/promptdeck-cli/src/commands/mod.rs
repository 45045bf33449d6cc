pub mod analyze;
pub mod generate;
pub mod keys;
pub mod library;
pub mod preview;
pub mod suggest;

use anyhow::Result;
use promptdeck_gen::{ConfigStore, GenerationService};

/// Build the service over the default config location
pub fn default_service() -> Result<GenerationService> {
    Ok(GenerationService::new(ConfigStore::default_store())?)
}

/// Read an image file and return its base64 payload
pub fn read_image_base64(path: &str) -> Result<String> {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;

    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read image {}: {}", path, e))?;
    Ok(BASE64.encode(bytes))
}
