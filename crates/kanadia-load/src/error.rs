use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("resource not found: {path}")]
    NotFound { path: Utf8PathBuf },

    #[error("read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}
