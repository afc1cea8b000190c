use std::io::Read;
use std::sync::Arc;

use log::debug;
use tokio::task;

use crate::cache::LookupCaches;
use crate::config::FontSetting;
use crate::error::{Error, Result};

/// Resolve the configured font into the byte buffers handed to the
/// rasterizer. `Default` yields no buffers (the rasterizer falls back to its
/// bundled monospace font); sources are fetched once and cached by their
/// source string.
pub async fn load(setting: &FontSetting, caches: &LookupCaches) -> Result<Vec<Arc<Vec<u8>>>> {
    match setting {
        FontSetting::Default => Ok(Vec::new()),
        FontSetting::Bytes(bytes) => Ok(vec![Arc::new(bytes.clone())]),
        FontSetting::Source(source) => {
            if let Some(bytes) = caches.cached_font(source) {
                return Ok(vec![bytes]);
            }

            let bytes = if source.starts_with("http://") || source.starts_with("https://") {
                let url = source.clone();
                task::spawn_blocking(move || fetch(&url)).await??
            } else {
                tokio::fs::read(source).await.map_err(|e| Error::FontLoad {
                    path: source.clone(),
                    source: e,
                })?
            };

            debug!("loaded font from {source} ({} bytes)", bytes.len());
            let bytes = Arc::new(bytes);
            caches.store_font(source, Arc::clone(&bytes));
            Ok(vec![bytes])
        }
    }
}

/// Blocking HTTP fetch of a font file.
fn fetch(url: &str) -> Result<Vec<u8>> {
    let mut body = ureq::get(url)
        .header("User-Agent", "codeshot")
        .call()
        .map_err(|e| Error::FontFetch {
            url: url.to_string(),
            message: e.to_string(),
        })?
        .into_body();

    let mut bytes = Vec::new();
    body.as_reader()
        .read_to_end(&mut bytes)
        .map_err(|e| Error::FontFetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    Ok(bytes)
}
