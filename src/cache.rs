pub mod highlighter;
pub mod lookup;
pub mod manager;

pub use highlighter::{CachedHighlighter, HighlighterCache, MAX_HIGHLIGHTERS};
pub use lookup::LookupCaches;
pub use manager::{CacheManager, MEMORY_THRESHOLD_BYTES, SWEEP_INTERVAL};

use serde::Serialize;

/// Entry counts across every cache, for the operational stats surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub highlighters: usize,
    pub fonts: usize,
    pub sizes: usize,
    pub token_widths: usize,
}
