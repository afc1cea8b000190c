use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use unicode_width::UnicodeWidthStr;

use crate::size::{CanvasSize, SizeKey};

/// Auxiliary lookup caches shared across conversions: font bytes keyed by
/// their source string, computed canvas sizes, and token display widths.
///
/// All three grow without bound between sweeps; the cache manager empties
/// them when resident memory crosses the threshold. Locks are held only for
/// the map access itself, never across await points.
pub struct LookupCaches {
    fonts: Mutex<HashMap<String, Arc<Vec<u8>>>>,
    sizes: Mutex<HashMap<SizeKey, CanvasSize>>,
    widths: Mutex<HashMap<String, f32>>,
}

impl LookupCaches {
    pub fn new() -> Self {
        Self {
            fonts: Mutex::new(HashMap::new()),
            sizes: Mutex::new(HashMap::new()),
            widths: Mutex::new(HashMap::new()),
        }
    }

    /// Display width of `text` in character columns, memoized. Wide (CJK)
    /// characters count as two columns.
    pub fn width_of(&self, text: &str) -> f32 {
        let mut widths = self.widths.lock();
        if let Some(width) = widths.get(text) {
            return *width;
        }

        let width = text.width() as f32;
        widths.insert(text.to_string(), width);
        width
    }

    pub fn cached_font(&self, source: &str) -> Option<Arc<Vec<u8>>> {
        self.fonts.lock().get(source).cloned()
    }

    pub fn store_font(&self, source: &str, bytes: Arc<Vec<u8>>) {
        self.fonts.lock().insert(source.to_string(), bytes);
    }

    pub fn cached_size(&self, key: &SizeKey) -> Option<CanvasSize> {
        self.sizes.lock().get(key).copied()
    }

    pub fn store_size(&self, key: SizeKey, size: CanvasSize) {
        self.sizes.lock().insert(key, size);
    }

    /// Empty every lookup cache.
    pub fn clear(&self) {
        self.fonts.lock().clear();
        self.sizes.lock().clear();
        self.widths.lock().clear();
    }

    /// Entry counts: (fonts, sizes, token widths).
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.fonts.lock().len(),
            self.sizes.lock().len(),
            self.widths.lock().len(),
        )
    }
}

impl Default for LookupCaches {
    fn default() -> Self {
        Self::new()
    }
}
