/// What to do when the header carries a version other than [`crate::BSP_VERSION`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VersionPolicy {
  /// Log a warning and keep decoding.
  #[default]
  Warn,
  /// Fail with [`crate::FormatError::BadVersion`].
  Reject,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
  pub version_policy: VersionPolicy,
}

impl LoadOptions {
  pub fn strict() -> Self {
    Self {
      version_policy: VersionPolicy::Reject,
    }
  }

  pub fn with_version_policy(mut self, version_policy: VersionPolicy) -> Self {
    self.version_policy = version_policy;
    self
  }
}
