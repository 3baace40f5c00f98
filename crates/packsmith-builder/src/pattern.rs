//! File-name patterns used in rule `test` and `exclude` conditions.

use regex::Regex;
use serde::{Serialize, Serializer};

/// A compiled regular expression, serialized as its source text.
///
/// The build engine rebuilds its own regular expressions from the source, so
/// the fixed patterns stick to syntax shared by both dialects.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compile one of the fixed patterns below.
    pub(crate) fn builtin(source: &'static str) -> Self {
        Self(Regex::new(source).expect("built-in pattern must compile"))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn matches(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Serialize a one-element list as a bare pattern, longer lists as arrays.
pub(crate) fn one_or_many<S: Serializer>(
    patterns: &[Pattern],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match patterns {
        [single] => single.serialize(serializer),
        many => serializer.collect_seq(many),
    }
}

pub(crate) const SCRIPT: &str = r"\.(js|jsx|mjs)$";
pub(crate) const TYPESCRIPT: &str = r"\.(ts|tsx)$";
pub(crate) const HTML: &str = r"\.html$";
pub(crate) const JSON: &str = r"\.json$";
pub(crate) const CSS: &str = r"\.css$";
pub(crate) const SCSS: &str = r"\.scss$";
pub(crate) const LESS: &str = r"\.less$";
pub(crate) const VENDOR_DIRS: &str = r"(node_modules|bower_components)";
pub(crate) const NODE_MODULES: &str = r"node_modules";
pub(crate) const IMAGES: [&str; 4] = [r"\.bmp$", r"\.gif$", r"\.jpe?g$", r"\.png$"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_patterns_compile() {
        let sources = [
            SCRIPT,
            TYPESCRIPT,
            HTML,
            JSON,
            CSS,
            SCSS,
            LESS,
            VENDOR_DIRS,
            NODE_MODULES,
        ];
        for source in sources.iter().chain(IMAGES.iter()) {
            assert!(Regex::new(source).is_ok(), "{source}");
        }
    }

    #[test]
    fn typescript_pattern_matches_extensions() {
        let ts = Pattern::builtin(TYPESCRIPT);
        assert!(ts.matches("src/app.ts"));
        assert!(ts.matches("src/App.tsx"));
        assert!(!ts.matches("src/types.d.ts.map"));
        assert!(!ts.matches("src/app.js"));
    }

    #[test]
    fn serializes_as_source() {
        let value = serde_json::to_value(Pattern::builtin(JSON)).unwrap();
        assert_eq!(value, serde_json::json!(r"\.json$"));
    }
}
