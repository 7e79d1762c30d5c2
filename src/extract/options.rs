//! Extraction options

use crate::base::EXTENSION_NAME_SUFFIX;

/// Options controlling how a document is turned into a schema model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Appended to the name of every construct declared with `extend`
    pub extension_suffix: String,
    /// Run the per-kind extractors on the rayon thread pool
    pub parallel: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            extension_suffix: EXTENSION_NAME_SUFFIX.to_string(),
            parallel: false,
        }
    }
}

impl ExtractOptions {
    /// Entity name for a construct called `name`
    pub fn entity_name(&self, name: &str, extended: bool) -> String {
        if extended {
            format!("{}{}", name, self.extension_suffix)
        } else {
            name.to_string()
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
