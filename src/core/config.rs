use std::env;
use std::path::PathBuf;

/// Default file holding the release records
pub const DEFAULT_RELEASES_PATH: &str = "releases.json";

/// Default file holding the currently active binaries
pub const DEFAULT_CURRENT_PACKAGES_PATH: &str = "current_packages.json";

/// Default document the table is written into
pub const DEFAULT_README_PATH: &str = "README.md";

/// Environment variable naming the `owner/repo` download links point at
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";

/// Configuration for a release-status run
///
/// Paths are relative to the working directory unless absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConfig {
  pub releases: PathBuf,
  pub current_packages: PathBuf,
  pub readme: PathBuf,
  /// `owner/repo`; `None` degrades download links instead of failing
  pub repository: Option<String>,
}

impl Default for StatusConfig {
  fn default() -> Self {
    Self {
      releases: PathBuf::from(DEFAULT_RELEASES_PATH),
      current_packages: PathBuf::from(DEFAULT_CURRENT_PACKAGES_PATH),
      readme: PathBuf::from(DEFAULT_README_PATH),
      repository: None,
    }
  }
}

impl StatusConfig {
  /// Defaults plus the repository taken from `GITHUB_REPOSITORY`
  pub fn from_env() -> Self {
    Self {
      repository: env::var(REPOSITORY_ENV).ok(),
      ..Self::default()
    }
  }

  pub fn with_releases(mut self, path: impl Into<PathBuf>) -> Self {
    self.releases = path.into();
    self
  }

  pub fn with_current_packages(mut self, path: impl Into<PathBuf>) -> Self {
    self.current_packages = path.into();
    self
  }

  pub fn with_readme(mut self, path: impl Into<PathBuf>) -> Self {
    self.readme = path.into();
    self
  }

  /// Override the repository; `None` keeps whatever is already set
  pub fn with_repository(mut self, repository: Option<String>) -> Self {
    if repository.is_some() {
      self.repository = repository;
    }
    self
  }
}
