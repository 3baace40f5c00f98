//! The session's ordered, append-only rule sequence.

use crate::rule::RuleDescriptor;

/// Rules in insertion order.
///
/// A rule's identity is its position; entries are never edited or reordered
/// once appended. Sessions start with a fresh registry, so entries from an
/// earlier session cannot leak into a later one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleRegistry {
    rules: Vec<RuleDescriptor>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry.
    ///
    /// Build sessions never call this: starting over constructs a new
    /// session, and with it a new registry. It serves callers that keep a
    /// registry of their own across runs.
    pub fn reset(&mut self) {
        self.rules.clear();
    }

    pub fn append(&mut self, rule: RuleDescriptor) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleDescriptor> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[RuleDescriptor] {
        &self.rules
    }
}

impl<'a> IntoIterator for &'a RuleRegistry {
    type Item = &'a RuleDescriptor;
    type IntoIter = std::slice::Iter<'a, RuleDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::TransformStep;

    fn rule(loader: &str) -> RuleDescriptor {
        RuleDescriptor::new().with_step(TransformStep::new(loader))
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut registry = RuleRegistry::new();
        registry.append(rule("a"));
        registry.append(rule("b"));
        registry.append(rule("c"));

        let order: Vec<_> = registry
            .iter()
            .flat_map(|r| r.loaders().map(str::to_owned).collect::<Vec<_>>())
            .collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn reset_empties_registry() {
        let mut registry = RuleRegistry::new();
        registry.append(rule("a"));
        registry.reset();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
