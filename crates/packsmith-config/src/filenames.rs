//! Output filename templates derived from production mode.

use serde::{Deserialize, Serialize};

/// Placeholder the bundler replaces with an 8-character content hash.
pub const CONTENT_HASH_TOKEN: &str = "[chunkhash:8]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFilenames {
    pub script: String,
    pub script_chunk: String,
    pub stylesheet: String,
}

impl OutputFilenames {
    pub fn for_mode(production: bool) -> Self {
        if production {
            Self {
                script: format!("js/[name].{CONTENT_HASH_TOKEN}.js"),
                script_chunk: format!("js/[name].{CONTENT_HASH_TOKEN}.chunk.js"),
                stylesheet: format!("css/[name].{CONTENT_HASH_TOKEN}.css"),
            }
        } else {
            Self {
                script: "js/[name].js".to_string(),
                script_chunk: "js/[name].chunk.js".to_string(),
                stylesheet: "css/[name].css".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_templates_are_hashed() {
        let names = OutputFilenames::for_mode(true);
        assert_eq!(names.script, "js/[name].[chunkhash:8].js");
        assert_eq!(names.script_chunk, "js/[name].[chunkhash:8].chunk.js");
        assert_eq!(names.stylesheet, "css/[name].[chunkhash:8].css");
    }

    #[test]
    fn development_templates_are_stable() {
        let names = OutputFilenames::for_mode(false);
        assert!(!names.script.contains(CONTENT_HASH_TOKEN));
        assert!(!names.script_chunk.contains(CONTENT_HASH_TOKEN));
        assert_eq!(names.stylesheet, "css/[name].css");
    }
}
