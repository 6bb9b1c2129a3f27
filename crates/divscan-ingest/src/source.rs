//! Where raw dataset text comes from.
//!
//! A [`DatasetSource`] returns the full CSV text of one category. The loader
//! never retries; any error it returns makes that category empty.

use std::collections::BTreeMap;
use std::path::PathBuf;

use divscan_model::Category;

use crate::error::{IngestError, Result};

/// Supplier of raw per-category CSV text.
pub trait DatasetSource {
    /// Fetches the complete text of `category`'s dataset.
    fn fetch(&self, category: Category) -> Result<String>;

    /// Human-readable location of `category`'s dataset, for logs.
    fn location(&self, category: Category) -> String;
}

/// Reads `<root>/<category>.csv` from the local file system.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source rooted at `root`.
    ///
    /// Fails if `root` is not an existing directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(IngestError::DirectoryNotFound { path: root });
        }
        Ok(Self { root })
    }

    fn path_for(&self, category: Category) -> PathBuf {
        self.root.join(category.file_name())
    }
}

impl DatasetSource for DirectorySource {
    fn fetch(&self, category: Category) -> Result<String> {
        let path = self.path_for(category);
        std::fs::read_to_string(&path).map_err(|e| IngestError::from_io(&path, e))
    }

    fn location(&self, category: Category) -> String {
        self.path_for(category).display().to_string()
    }
}

/// Serves dataset text held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    texts: BTreeMap<Category, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the text for `category`.
    #[must_use]
    pub fn with(mut self, category: Category, text: impl Into<String>) -> Self {
        self.texts.insert(category, text.into());
        self
    }
}

impl DatasetSource for MemorySource {
    fn fetch(&self, category: Category) -> Result<String> {
        self.texts
            .get(&category)
            .cloned()
            .ok_or(IngestError::MissingDataset { category })
    }

    fn location(&self, category: Category) -> String {
        format!("memory:{category}")
    }
}

#[cfg(feature = "http")]
pub use http::HttpSource;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use reqwest::blocking::Client;
    use reqwest::header::USER_AGENT;
    use tracing::debug;

    use divscan_model::Category;

    use super::DatasetSource;
    use crate::error::{IngestError, Result};

    /// HTTP request timeout.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Fetches `<base_url>/<percent-encoded category>.csv` over HTTP.
    pub struct HttpSource {
        base_url: String,
        client: Client,
    }

    impl HttpSource {
        /// Creates a blocking client for `base_url`.
        pub fn new(base_url: impl Into<String>) -> Result<Self> {
            let base_url = base_url.into().trim_end_matches('/').to_string();
            let client = Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(|e| IngestError::Http {
                    url: base_url.clone(),
                    message: e.to_string(),
                })?;
            Ok(Self { base_url, client })
        }

        fn url_for(&self, category: Category) -> String {
            format!("{}/{}", self.base_url, category.url_path())
        }
    }

    impl DatasetSource for HttpSource {
        fn fetch(&self, category: Category) -> Result<String> {
            let url = self.url_for(category);
            debug!(url = %url, "fetching dataset");

            let response = self
                .client
                .get(&url)
                .header(USER_AGENT, concat!("divscan/", env!("CARGO_PKG_VERSION")))
                .send()
                .map_err(|e| IngestError::Http {
                    url: url.clone(),
                    message: e.to_string(),
                })?;

            if !response.status().is_success() {
                return Err(IngestError::HttpStatus {
                    url,
                    status: response.status().as_u16(),
                });
            }

            response.text().map_err(|e| IngestError::Http {
                url,
                message: e.to_string(),
            })
        }

        fn location(&self, category: Category) -> String {
            self.url_for(category)
        }
    }

}
