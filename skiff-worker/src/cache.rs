//! Cache Partitions
//!
//! Named, versioned cache partitions mapping request identity
//! (method + URL) to stored response snapshots. Only successful GET
//! responses are admitted; the storage layer rejects everything else so
//! no strategy can violate the partition invariant.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::fetch::{Request, RequestMethod, Response, ResponseType};

// ── Errors ──────────────────────────────────────────────────

/// Cache storage error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The response is not admissible (non-GET, non-200, or error type).
    NotCacheable,
    /// The named partition does not exist.
    NotFound,
}

impl core::fmt::Display for CacheError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CacheError::NotCacheable => write!(f, "response not cacheable"),
            CacheError::NotFound => write!(f, "cache partition not found"),
        }
    }
}

// ── Cache ───────────────────────────────────────────────────

/// A single named cache partition.
#[derive(Debug, Clone)]
pub struct Cache {
    /// Partition name (e.g. `"skiff-static-v2"`).
    name: String,
    /// Request identity → stored response snapshot.
    entries: BTreeMap<String, Response>,
}

impl Cache {
    /// Create a new empty partition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Partition name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store a response snapshot for a request.
    ///
    /// Only status-200 GET responses of a non-error type are admitted.
    /// A second put for the same identity replaces the first.
    pub fn put(&mut self, request: &Request, response: Response) -> Result<(), CacheError> {
        if request.method != RequestMethod::Get
            || response.status != 200
            || response.response_type == ResponseType::Error
        {
            return Err(CacheError::NotCacheable);
        }
        self.entries.insert(request.cache_key(), response);
        Ok(())
    }

    /// Look up a stored response by request identity.
    pub fn match_request(&self, request: &Request) -> Option<&Response> {
        self.entries.get(&request.cache_key())
    }

    /// Delete an entry by request identity.
    pub fn delete(&mut self, request: &Request) -> bool {
        self.entries.remove(&request.cache_key()).is_some()
    }

    /// All stored request identities.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(|k| k.as_str()).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this partition is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── CacheStorage ────────────────────────────────────────────

/// All cache partitions owned by one worker.
#[derive(Debug, Default)]
pub struct CacheStorage {
    /// Partition name → partition.
    caches: BTreeMap<String, Cache>,
}

impl CacheStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self {
            caches: BTreeMap::new(),
        }
    }

    /// Open (or create) a named partition.
    pub fn open(&mut self, name: &str) -> &mut Cache {
        self.caches
            .entry(name.to_string())
            .or_insert_with(|| Cache::new(name))
    }

    /// Whether a named partition exists.
    pub fn has(&self, name: &str) -> bool {
        self.caches.contains_key(name)
    }

    /// Delete a named partition.
    pub fn delete(&mut self, name: &str) -> bool {
        self.caches.remove(name).is_some()
    }

    /// Delete every partition. Returns how many were removed.
    pub fn delete_all(&mut self) -> usize {
        let count = self.caches.len();
        self.caches.clear();
        count
    }

    /// All partition names.
    pub fn keys(&self) -> Vec<String> {
        self.caches.keys().cloned().collect()
    }

    /// Store a response snapshot into the named partition.
    pub fn put_in(
        &mut self,
        name: &str,
        request: &Request,
        response: Response,
    ) -> Result<(), CacheError> {
        self.open(name).put(request, response)
    }

    /// Look up a request in a specific partition.
    pub fn match_in(&self, name: &str, request: &Request) -> Option<&Response> {
        self.caches.get(name)?.match_request(request)
    }

    /// Look up a request across all partitions (first hit wins).
    pub fn match_request(&self, request: &Request) -> Option<&Response> {
        self.caches
            .values()
            .find_map(|cache| cache.match_request(request))
    }
}

// ── Tests ───────────────────────────────────────────────────
