use std::sync::Arc;

use serde::Serialize;

use crate::cache::{CacheManager, CacheStats, HighlighterCache, LookupCaches};
use crate::config::{OutputFormat, PartialConfig, resolve};
use crate::document::DocumentNode;
use crate::error::{Error, Result};
use crate::font;
use crate::highlight::{SyntectEngine, TokenizerEngine};
use crate::layout;
use crate::size::{self, CanvasSize, SizeCalibration};

/// Everything the external rasterizer needs to produce image bytes: the box
/// tree, the target canvas, the encoding parameters and the font buffers.
/// Serializes to the JSON wire format (fonts excluded; they travel to the
/// rasterizer's constructor, not over the wire).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub document: DocumentNode,
    pub size: CanvasSize,
    pub format: OutputFormat,
    pub quality: u8,
    #[serde(skip)]
    pub fonts: Vec<Arc<Vec<u8>>>,
}

/// External rasterizer boundary. Implementations encode a render plan into
/// image bytes; failures (unsupported format/quality combinations, encoding
/// errors) propagate verbatim, with no fallback or renegotiation here.
pub trait Rasterizer: Send + Sync {
    fn render(&self, plan: &RenderPlan) -> Result<Vec<u8>>;
}

/// The composition point of the pipeline: option resolution, highlighter
/// lookup, tree building, size estimation, font loading, rasterization.
///
/// Owns its caches explicitly (no module-level globals), so each test or
/// embedding constructs an isolated instance, and the periodic sweep is a
/// plain task holding references to this instance's caches.
pub struct Converter {
    highlighters: Arc<HighlighterCache>,
    lookups: Arc<LookupCaches>,
    calibration: SizeCalibration,
    manager: CacheManager,
    rasterizer: Option<Box<dyn Rasterizer>>,
}

impl Converter {
    /// Converter backed by the bundled syntect engine.
    pub fn new() -> Self {
        Self::with_engine(Arc::new(SyntectEngine::new()))
    }

    pub fn with_engine(engine: Arc<dyn TokenizerEngine>) -> Self {
        let highlighters = Arc::new(HighlighterCache::new(engine));
        let lookups = Arc::new(LookupCaches::new());
        let manager = CacheManager::new(Arc::clone(&highlighters), Arc::clone(&lookups));

        Self {
            highlighters,
            lookups,
            calibration: SizeCalibration::default(),
            manager,
            rasterizer: None,
        }
    }

    pub fn with_rasterizer(mut self, rasterizer: Box<dyn Rasterizer>) -> Self {
        self.rasterizer = Some(rasterizer);
        self
    }

    pub fn with_calibration(mut self, calibration: SizeCalibration) -> Self {
        self.calibration = calibration;
        self
    }

    /// Compile `code` into a render plan without rasterizing.
    pub async fn plan(&self, code: &str, partial: &PartialConfig) -> Result<RenderPlan> {
        let config = resolve(partial);

        let highlighter = self
            .highlighters
            .get_or_create(&config.theme, &config.language)
            .await?;
        let tokens = highlighter.tokenize(code)?;

        let document = layout::build(&tokens, &config, &self.lookups);
        let size = size::estimate(code, &config, &self.calibration, &self.lookups);
        let fonts = font::load(&config.font, &self.lookups).await?;

        Ok(RenderPlan {
            document,
            size,
            format: config.format,
            quality: config.quality,
            fonts,
        })
    }

    /// Compile `code` and hand the plan to the attached rasterizer.
    pub async fn convert(&self, code: &str, partial: &PartialConfig) -> Result<Vec<u8>> {
        let rasterizer = self.rasterizer.as_ref().ok_or(Error::RasterizerUnavailable)?;
        let plan = self.plan(code, partial).await?;
        rasterizer.render(&plan)
    }

    /// Entry counts across every cache.
    pub fn stats(&self) -> CacheStats {
        let (fonts, sizes, token_widths) = self.lookups.counts();
        CacheStats {
            highlighters: self.highlighters.len(),
            fonts,
            sizes,
            token_widths,
        }
    }

    /// Dispose every cached highlighter and empty the lookup caches.
    pub fn clear(&self) {
        self.manager.clear();
    }

    /// Start the periodic memory sweep over this converter's caches.
    pub fn start_cleanup(&self) {
        self.manager.start_cleanup();
    }

    pub fn stop_cleanup(&self) {
        self.manager.stop_cleanup();
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
