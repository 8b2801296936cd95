use thiserror::Error;

/// Failures at the boundaries of synthesis: parsing input and writing plans.
///
/// Synthesis itself has no failure mode; an unmatched page yields an empty plan.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// The page context document is not valid (bad JSON, `null`, wrong shape)
    #[error("invalid {context}: {source}")]
    ContextParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading a context or writing a plan failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Plan serialization to JSON failed
    #[error("JSON serialize error: {0}")]
    JsonSerialize(#[source] serde_json::Error),

    /// Plan serialization to YAML failed
    #[error("YAML serialize error: {0}")]
    YamlSerialize(#[source] serde_yaml::Error),

    /// Requested output format is not supported
    #[error("unknown output format '{0}' (expected console, json or yaml)")]
    UnknownFormat(String),
}
