//! Configuration options for building collections.

/// Options controlling how an [`ArrayLib`](crate::ArrayLib) validates its
/// input and reports problems.
///
/// # Example
///
/// ```
/// use arraylib_core::Options;
///
/// let options = Options {
///     value_preview_limit: Some(40),
///     ..Options::default()
/// };
/// assert!(options.allow_holes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of characters of an offending value quoted in an
    /// error message. Longer previews are cut and end with `...`.
    ///
    /// Default: None
    pub value_preview_limit: Option<usize>,

    /// Whether holes are accepted at construction.
    ///
    /// When `false`, a hole is validated as the absent value and is rejected
    /// unless the domain admits it.
    ///
    /// Default: true
    pub allow_holes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            value_preview_limit: None,
            allow_holes: true,
        }
    }
}

impl Options {
    /// Render `text` under the preview limit.
    pub(crate) fn preview(&self, text: String) -> String {
        match self.value_preview_limit {
            Some(limit) if text.chars().count() > limit => {
                let mut cut: String = text.chars().take(limit).collect();
                cut.push_str("...");
                cut
            }
            _ => text,
        }
    }
}
