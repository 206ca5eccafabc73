//! Identifier generation for nodes constructed without an explicit id.

use std::collections::HashMap;

/// Produces collision-free ids of the form `"<Kind><n>"`.
///
/// One counter per kind name, persisted across calls. `generate` probes
/// candidates against a caller-supplied `taken` predicate (typically
/// `host.exists(id) || registry.contains(id)`) and always leaves the counter
/// past the returned candidate, so two consecutive calls can never hand out
/// the same id even if the first one is never materialized.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counters: HashMap<&'static str, u64>,
}

impl IdGenerator {
    /// Create a generator with all counters at zero.
    pub fn new() -> Self {
        Self {
            counters: HashMap::new(),
        }
    }

    /// Generate a free id for `kind`.
    ///
    /// Deterministically probes `"<kind><counter>"`, incrementing until
    /// `taken` reports a free candidate. By construction this always
    /// terminates: counters only grow and the id space is unbounded.
    pub fn generate<F>(&mut self, kind: &'static str, taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        let counter = self.counters.entry(kind).or_insert(0);
        loop {
            let candidate = format!("{kind}<{n}>", n = *counter);
            *counter += 1;
            if !taken(&candidate) {
                return candidate;
            }
        }
    }

    /// The next counter value for a kind (0 if never used). For diagnostics.
    pub fn peek(&self, kind: &str) -> u64 {
        self.counters.get(kind).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn first_id_is_zero() {
        let mut idgen = IdGenerator::new();
        assert_eq!(idgen.generate("Button", |_| false), "Button<0>");
    }

    #[test]
    fn consecutive_calls_never_repeat() {
        let mut idgen = IdGenerator::new();
        // Nothing is ever taken, yet ids must still differ: the counter moves
        // past each returned candidate.
        let a = idgen.generate("Button", |_| false);
        let b = idgen.generate("Button", |_| false);
        assert_eq!(a, "Button<0>");
        assert_eq!(b, "Button<1>");
    }

    #[test]
    fn skips_taken_candidates() {
        let mut idgen = IdGenerator::new();
        let taken: HashSet<&str> = ["Window<0>", "Window<1>"].into();
        let id = idgen.generate("Window", |candidate| taken.contains(candidate));
        assert_eq!(id, "Window<2>");
    }

    #[test]
    fn counters_are_per_kind() {
        let mut idgen = IdGenerator::new();
        assert_eq!(idgen.generate("Button", |_| false), "Button<0>");
        assert_eq!(idgen.generate("Window", |_| false), "Window<0>");
        assert_eq!(idgen.generate("Button", |_| false), "Button<1>");
    }

    #[test]
    fn counter_resumes_past_probed_range() {
        let mut idgen = IdGenerator::new();
        let taken: HashSet<&str> = ["Tab<0>", "Tab<1>", "Tab<2>"].into();
        assert_eq!(idgen.generate("Tab", |c| taken.contains(c)), "Tab<3>");
        assert_eq!(idgen.peek("Tab"), 4);
        assert_eq!(idgen.generate("Tab", |_| false), "Tab<4>");
    }

    #[test]
    fn uniqueness_over_many_generations() {
        let mut idgen = IdGenerator::new();
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let id = idgen.generate("Node", |candidate| seen.contains(candidate));
            assert!(seen.insert(id));
        }
    }
}
