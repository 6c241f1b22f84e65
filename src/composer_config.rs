use crate::ComposerConfigBuilder;

/// The initial setup for a [`Composer`](crate::Composer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerConfig {
    /// Whether sources able to be released (such as files) are released
    /// when the composer, or the body it detaches, is closed.
    ///
    /// When this is off, adding files by path is not allowed,
    /// as nothing would close them.
    ///
    /// **Defaults** to true.
    pub close_owned: bool,

    /// An explicit boundary to separate parts with.
    ///
    /// **Defaults** to a _random_ boundary.
    pub boundary: Option<String>,
}

impl ComposerConfig {
    /// Creates a default `ComposerConfig`.
    ///
    /// This is the same as calling `ComposerConfig::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for making it simpler to write a `ComposerConfig`.
    pub fn builder() -> ComposerConfigBuilder {
        ComposerConfigBuilder::default()
    }
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            close_owned: true,
            boundary: None,
        }
    }
}

#[cfg(test)]
mod test_default {
    use super::*;

    #[test]
    fn it_should_close_owned_sources_by_default() {
        let config = ComposerConfig::default();

        assert_eq!(config.close_owned, true);
        assert_eq!(config.boundary, None);
    }
}
