/// Top-level CLI error, distinguishing "bad pattern" from "missing file" so
/// a caller (or an exit-code-sensitive script) can tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid engine configuration: {0}")]
    Config(#[from] logdiff_core::ConfigError),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
