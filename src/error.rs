use thiserror::Error;

/// Errors surfaced by the conversion pipeline.
///
/// Configuration problems (malformed numbers, unknown formats) never appear
/// here; they fall back to defaults during option resolution. Everything that
/// does appear is fatal for the conversion that triggered it and is propagated
/// verbatim, without retries.
#[derive(Debug, Error)]
pub enum Error {
    /// The tokenizer engine does not know the requested theme.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// The tokenizer engine does not know the requested language.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// The tokenizer engine failed while producing token runs.
    #[error("tokenizer failure: {0}")]
    Tokenize(String),

    /// A font path could not be read from disk.
    #[error("failed to load font from {path}: {source}")]
    FontLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A font URL could not be fetched.
    #[error("failed to fetch font from {url}: {message}")]
    FontFetch { url: String, message: String },

    /// The external rasterizer rejected the render plan.
    #[error("rasterizer failure: {0}")]
    Raster(String),

    /// `convert` was called on a `Converter` without a rasterizer attached.
    #[error("no rasterizer configured")]
    RasterizerUnavailable,

    /// A blocking-pool task was cancelled or panicked.
    #[error("background task failure: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;
