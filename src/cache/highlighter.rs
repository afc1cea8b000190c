use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use parking_lot::Mutex;
use tokio::task;

use crate::error::Result;
use crate::highlight::{Tokenizer, TokenizedCode, TokenizerEngine};

/// Upper bound on live tokenizer instances.
pub const MAX_HIGHLIGHTERS: usize = 5;

/// A pooled tokenizer bound to one (theme, language) pair.
///
/// The handle owns the engine instance's lifetime: `dispose` runs exactly
/// once, on eviction, explicit clear, or the memory sweep, releasing whatever
/// native resources the engine holds. Handles stay usable by callers that
/// obtained them before disposal; only the engine-side release is one-shot.
pub struct CachedHighlighter {
    key: String,
    tokenizer: Box<dyn Tokenizer>,
    disposed: AtomicBool,
}

impl CachedHighlighter {
    fn new(key: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Self {
            key,
            tokenizer,
            disposed: AtomicBool::new(false),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn tokenize(&self, code: &str) -> Result<TokenizedCode> {
        self.tokenizer.tokenize(code)
    }

    fn dispose(&self) {
        if !self.disposed.swap(true, Ordering::SeqCst) {
            self.tokenizer.dispose();
        }
    }
}

struct Inner {
    /// Insertion order of the live keys; the front is the eviction candidate.
    order: VecDeque<String>,
    entries: HashMap<String, Arc<CachedHighlighter>>,
}

/// Bounded pool of tokenizer instances keyed by `"{theme}|{language}"`.
///
/// Eviction is by insertion order, not recency: a hit does not refresh an
/// entry's position, so the entry created longest ago goes first even if it
/// was just used. The order lives in an explicit `VecDeque` rather than any
/// map's iteration order, because the eviction policy depends on it.
pub struct HighlighterCache {
    engine: Arc<dyn TokenizerEngine>,
    capacity: usize,
    inner: Mutex<Inner>,
}

impl HighlighterCache {
    pub fn new(engine: Arc<dyn TokenizerEngine>) -> Self {
        Self::with_capacity(engine, MAX_HIGHLIGHTERS)
    }

    pub fn with_capacity(engine: Arc<dyn TokenizerEngine>, capacity: usize) -> Self {
        Self {
            engine,
            capacity: capacity.max(1),
            inner: Mutex::new(Inner {
                order: VecDeque::new(),
                entries: HashMap::new(),
            }),
        }
    }

    /// Return the cached tokenizer for (theme, language), creating it on the
    /// blocking pool on a miss.
    ///
    /// Concurrent misses for the same key may each build an instance; the
    /// last write wins and the displaced instance is disposed. Creation is
    /// idempotent apart from resource allocation, so the race is tolerated
    /// rather than deduplicated.
    pub async fn get_or_create(&self, theme: &str, language: &str) -> Result<Arc<CachedHighlighter>> {
        let key = format!("{theme}|{language}");

        if let Some(entry) = self.inner.lock().entries.get(&key) {
            return Ok(Arc::clone(entry));
        }

        let engine = Arc::clone(&self.engine);
        let (theme, language) = (theme.to_string(), language.to_string());
        let tokenizer = task::spawn_blocking(move || engine.create(&theme, &language)).await??;
        let handle = Arc::new(CachedHighlighter::new(key.clone(), tokenizer));

        let mut inner = self.inner.lock();
        if inner.entries.contains_key(&key) {
            // Lost a concurrent creation race. Replace the value in place,
            // keeping the key's original insertion position.
            if let Some(previous) = inner.entries.insert(key, Arc::clone(&handle)) {
                previous.dispose();
            }
        } else {
            while inner.entries.len() >= self.capacity {
                let Some(oldest) = inner.order.pop_front() else {
                    break;
                };
                if let Some(evicted) = inner.entries.remove(&oldest) {
                    debug!("evicting highlighter {oldest}");
                    evicted.dispose();
                }
            }

            inner.order.push_back(key.clone());
            inner.entries.insert(key, Arc::clone(&handle));
        }

        Ok(handle)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empty the pool, disposing every entry. Used by the cache manager's
    /// sweep and at shutdown.
    pub fn dispose_all(&self) {
        let mut inner = self.inner.lock();
        inner.order.clear();
        for (_, entry) in inner.entries.drain() {
            entry.dispose();
        }
    }
}

impl Drop for HighlighterCache {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
