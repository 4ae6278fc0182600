//! URL Classification
//!
//! An ordered list of `(predicate, strategy)` rules evaluated
//! top-to-bottom; the first match wins and the table's fallback strategy
//! covers everything else. Keeping the rule list explicit makes the
//! dispatch testable without the host runtime.

use alloc::string::String;
use alloc::vec::Vec;

// ── Strategies ──────────────────────────────────────────────

/// Caching strategy applied to a classified request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Check the static partition first; only fetch on a miss.
    CacheFirst,
    /// Fetch first; fall back to the dynamic partition on failure.
    NetworkFirstDynamic,
    /// Fetch first; fall back to the dynamic partition, then the offline
    /// page for navigations.
    NetworkFirstDocument,
}

// ── Rules ───────────────────────────────────────────────────

/// Predicate over a request path.
#[derive(Debug, Clone)]
pub enum RoutePredicate {
    /// Path begins with the given prefix.
    PathPrefix(String),
    /// Path ends with the given extension (including the dot).
    PathExtension(String),
}

impl RoutePredicate {
    /// Whether the predicate matches the given path.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            RoutePredicate::PathPrefix(prefix) => path.starts_with(prefix.as_str()),
            RoutePredicate::PathExtension(ext) => path.ends_with(ext.as_str()),
        }
    }
}

/// One classification rule.
#[derive(Debug, Clone)]
pub struct RouteRule {
    /// The predicate to test.
    pub predicate: RoutePredicate,
    /// The strategy applied on a match.
    pub strategy: Strategy,
}

/// Ordered classification table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
    fallback: Strategy,
}

/// Static/media path prefixes served cache-first.
const STATIC_PREFIXES: [&str; 2] = ["/static/", "/media/"];

/// Asset extensions served cache-first.
const STATIC_EXTENSIONS: [&str; 5] = [".css", ".js", ".png", ".jpg", ".ico"];

/// Path prefixes of dynamic routes served network-first.
const DYNAMIC_PREFIXES: [&str; 3] = ["/api/", "/auth/", "/admin/"];

impl RouteTable {
    /// Create an empty table with the given fallback strategy.
    pub fn new(fallback: Strategy) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Append a rule. Order is significant: earlier rules win.
    pub fn push(&mut self, predicate: RoutePredicate, strategy: Strategy) {
        self.rules.push(RouteRule {
            predicate,
            strategy,
        });
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// Classify a path. First matching rule wins; unmatched paths are
    /// assumed to be document navigations.
    pub fn classify(&self, path: &str) -> Strategy {
        for rule in &self.rules {
            if rule.predicate.matches(path) {
                return rule.strategy;
            }
        }
        self.fallback
    }

    /// The fixed shell rule set: static assets cache-first, then dynamic
    /// routes network-first, everything else treated as a document.
    pub fn shell_rules() -> Self {
        let mut table = Self::new(Strategy::NetworkFirstDocument);
        for prefix in STATIC_PREFIXES {
            table.push(
                RoutePredicate::PathPrefix(String::from(prefix)),
                Strategy::CacheFirst,
            );
        }
        for ext in STATIC_EXTENSIONS {
            table.push(
                RoutePredicate::PathExtension(String::from(ext)),
                Strategy::CacheFirst,
            );
        }
        for prefix in DYNAMIC_PREFIXES {
            table.push(
                RoutePredicate::PathPrefix(String::from(prefix)),
                Strategy::NetworkFirstDynamic,
            );
        }
        table
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::shell_rules()
    }
}

// ── Tests ───────────────────────────────────────────────────
