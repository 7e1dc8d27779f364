use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read options file {path}: {source}")]
    OptionsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse options file: {0}")]
    OptionsFileParse(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}
