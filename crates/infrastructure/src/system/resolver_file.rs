use ec2_dns_domain::{Config, ResolverConfig, ServerConfig};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ResolverFileError {
    #[error("resolver config does not exist in {0}")]
    Missing(PathBuf),

    #[error("resolver config in {path} is empty, expected:\n{expected}")]
    Empty { path: PathBuf, expected: String },

    #[error("unexpected config in {path}, expected:\n{expected}\ngot:\n{found}")]
    Unexpected {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("could not access resolver config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The per-domain resolver file that sends lookups under the internal suffix
/// to this server (`/etc/resolver/internal` on macOS).
#[derive(Debug, Clone)]
pub struct ResolverFile {
    path: PathBuf,
    contents: String,
}

impl ResolverFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.resolver.path,
            Self::render(&config.resolver, &config.server),
        )
    }

    /// Render the file in the `resolver(5)` format.
    pub fn render(resolver: &ResolverConfig, server: &ServerConfig) -> String {
        format!(
            "domain {}\nnameserver {}\nport {}\ntimeout {}\nsearch_order {}\n",
            resolver.domain,
            server.bind_address,
            server.dns_port,
            resolver.timeout_secs,
            resolver.search_order,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Verify the file on disk holds exactly the expected contents.
    pub fn check(&self) -> Result<(), ResolverFileError> {
        let found = match fs::read_to_string(&self.path) {
            Ok(found) => found,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ResolverFileError::Missing(self.path.clone()));
            }
            Err(source) => {
                return Err(ResolverFileError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if found == self.contents {
            debug!(path = %self.path.display(), "Resolver config is correct");
            Ok(())
        } else if found.is_empty() {
            Err(ResolverFileError::Empty {
                path: self.path.clone(),
                expected: self.contents.clone(),
            })
        } else {
            Err(ResolverFileError::Unexpected {
                path: self.path.clone(),
                expected: self.contents.clone(),
                found,
            })
        }
    }

    /// Write the file, creating its directory if needed, and re-check it.
    pub fn install(&self) -> Result<(), ResolverFileError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| ResolverFileError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.path, &self.contents).map_err(|source| ResolverFileError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), "Resolver config written");
        self.check()
    }
}
