use crate::ComposerConfig;

/// This is for easing the building of [`ComposerConfig`](crate::ComposerConfig).
///
/// For full documentation see there.
///
/// ```rust
/// use ::multipart_composer::Composer;
/// use ::multipart_composer::ComposerConfig;
///
/// let config = ComposerConfig::builder()
///     .boundary("3a494cd3b73de6555202")
///     .do_not_close_owned()
///     .build();
///
/// let composer = Composer::new_with_config(config)?;
/// assert_eq!(composer.boundary(), "3a494cd3b73de6555202");
/// #
/// # Ok::<(), ::multipart_composer::ComposeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComposerConfigBuilder {
    config: ComposerConfig,
}

impl ComposerConfigBuilder {
    pub fn close_owned(mut self) -> Self {
        self.config.close_owned = true;
        self
    }

    pub fn do_not_close_owned(mut self) -> Self {
        self.config.close_owned = false;
        self
    }

    pub fn boundary(mut self, boundary: &str) -> Self {
        self.config.boundary = Some(boundary.to_string());
        self
    }

    pub fn random_boundary(mut self) -> Self {
        self.config.boundary = None;
        self
    }

    pub fn build(self) -> ComposerConfig {
        self.config
    }
}
