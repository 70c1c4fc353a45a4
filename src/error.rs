//! Errors raised while building an engine

/// Failures at engine construction or config load. Stepping never fails.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Playfield dimensions must be finite and strictly positive.
    #[error("invalid playfield {width}x{height}: dimensions must be finite and positive")]
    InvalidPlayfield { width: f32, height: f32 },

    /// Config JSON could not be parsed.
    #[error("malformed engine config: {0}")]
    Config(#[from] serde_json::Error),

    /// Config file could not be read.
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
