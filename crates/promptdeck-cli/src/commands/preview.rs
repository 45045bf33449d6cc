//! Preview command

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use promptdeck_store::LibraryStore;

pub fn run(
    prompt: &str,
    ratio: &str,
    ref_image: Option<&str>,
    out: &str,
    attach: Option<&str>,
) -> Result<()> {
    let reference = match ref_image {
        Some(path) => Some(super::read_image_base64(path)?),
        None => None,
    };

    let mut service = super::default_service()?;
    let data_uri = service.generate_preview_image(prompt, ratio, reference.as_deref())?;

    let bytes = decode_data_uri(&data_uri)?;
    std::fs::write(out, bytes).with_context(|| format!("Failed to write {}", out))?;
    println!("Preview written to {}", out);

    if let Some(id) = attach {
        let store = LibraryStore::default_store();
        match store.list().into_iter().find(|e| e.id == id) {
            Some(mut entry) => {
                entry.image_url = Some(data_uri);
                store.upsert(entry);
                println!("Attached preview to library entry {}", id);
            }
            None => bail!("No library entry with id {}", id),
        }
    }

    Ok(())
}

fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let payload = uri
        .split_once(',')
        .map(|(_, data)| data)
        .unwrap_or(uri);
    BASE64
        .decode(payload)
        .context("Model returned an unreadable image payload")
}
