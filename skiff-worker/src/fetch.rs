//! Fetch Model
//!
//! Request/response types for the interception pipeline, and the
//! [`Network`] trait that abstracts the host's network edge.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

// ── Requests ────────────────────────────────────────────────

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Default for RequestMethod {
    fn default() -> Self {
        Self::Get
    }
}

impl RequestMethod {
    /// Convert to the wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

/// What kind of resource the request expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestDestination {
    /// Unknown / not a tagged subresource.
    Empty,
    /// Top-level or framed document.
    Document,
    /// Image resource.
    Image,
    /// Script resource.
    Script,
    /// Stylesheet resource.
    Style,
    /// Font resource.
    Font,
}

impl Default for RequestDestination {
    fn default() -> Self {
        Self::Empty
    }
}

/// Request mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// Same-origin only.
    SameOrigin,
    /// No CORS.
    NoCors,
    /// CORS.
    Cors,
    /// Top-level navigation.
    Navigate,
}

impl Default for RequestMode {
    fn default() -> Self {
        Self::NoCors
    }
}

/// An intercepted request.
#[derive(Debug, Clone)]
pub struct Request {
    /// Request URL (absolute or path-relative).
    pub url: String,
    /// HTTP method.
    pub method: RequestMethod,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Expected destination.
    pub destination: RequestDestination,
    /// Request mode.
    pub mode: RequestMode,
}

impl Request {
    /// Create a new GET request.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: RequestMethod::Get,
            headers: BTreeMap::new(),
            destination: RequestDestination::Empty,
            mode: RequestMode::NoCors,
        }
    }

    /// Set the method.
    pub fn with_method(mut self, method: RequestMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the destination.
    pub fn with_destination(mut self, destination: RequestDestination) -> Self {
        self.destination = destination;
        self
    }

    /// Set the mode.
    pub fn with_mode(mut self, mode: RequestMode) -> Self {
        self.mode = mode;
        self
    }

    /// Whether this is a top-level navigation.
    pub fn is_navigation(&self) -> bool {
        self.mode == RequestMode::Navigate
    }

    /// Path component of the URL: scheme and authority stripped, query
    /// and fragment dropped. Route classification operates on this.
    pub fn path(&self) -> &str {
        let after_authority = match self.url.find("://") {
            Some(pos) => {
                let rest = &self.url[pos + 3..];
                match rest.find('/') {
                    Some(slash) => &rest[slash..],
                    None => "/",
                }
            }
            None => self.url.as_str(),
        };
        let end = after_authority
            .find(|c| c == '?' || c == '#')
            .unwrap_or(after_authority.len());
        &after_authority[..end]
    }

    /// Cache identity of this request.
    pub fn cache_key(&self) -> String {
        alloc::format!("{}:{}", self.method.as_str(), self.url)
    }
}

// ── Responses ───────────────────────────────────────────────

/// Response type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    /// Normal same-origin response.
    Default,
    /// Network-level error response.
    Error,
    /// Opaque cross-origin response.
    Opaque,
}

impl Default for ResponseType {
    fn default() -> Self {
        Self::Default
    }
}

/// A response snapshot: status, headers, body.
#[derive(Debug, Clone)]
pub struct Response {
    /// Response type.
    pub response_type: ResponseType,
    /// URL the response was served for.
    pub url: String,
    /// Status code.
    pub status: u16,
    /// Status text.
    pub status_text: String,
    /// Response headers.
    pub headers: BTreeMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response with the given status.
    pub fn new(status: u16) -> Self {
        Self {
            response_type: ResponseType::Default,
            url: String::new(),
            status,
            status_text: status_text_for(status).to_string(),
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    /// Create a network-error response.
    pub fn error() -> Self {
        Self {
            response_type: ResponseType::Error,
            url: String::new(),
            status: 0,
            status_text: String::new(),
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Set a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the content type marks an HTML document.
    pub fn is_html(&self) -> bool {
        self.header("content-type")
            .map(|ct| ct.contains("text/html"))
            .unwrap_or(false)
    }
}

/// Get status text for a status code.
fn status_text_for(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Unknown",
    }
}

// ── Resolution ──────────────────────────────────────────────

/// Where a served response originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    /// From a cache partition.
    Cache,
    /// From the network.
    Network,
    /// Synthesized fallback (offline page, placeholder icon).
    Fallback,
}

/// Resolution of one intercepted request.
#[derive(Debug, Clone)]
pub enum FetchResult {
    /// A response was produced.
    Served {
        response: Response,
        source: FetchSource,
    },
    /// Not handled; the host should proceed with its default fetch.
    Passthrough,
    /// The chosen strategy ran out of options; the host sees no response.
    Unresolved,
}

impl FetchResult {
    /// The served response, if any.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Served { response, .. } => Some(response),
            _ => None,
        }
    }

    /// The source of the served response, if any.
    pub fn source(&self) -> Option<FetchSource> {
        match self {
            Self::Served { source, .. } => Some(*source),
            _ => None,
        }
    }
}

// ── Network edge ────────────────────────────────────────────

/// Network failure as signaled by the host's connection layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// No connectivity.
    Offline,
    /// Connection-level failure.
    Failed(String),
}

impl core::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NetworkError::Offline => write!(f, "network unreachable"),
            NetworkError::Failed(reason) => write!(f, "connection failed: {}", reason),
        }
    }
}

/// The host's network edge. A transport error is distinct from a non-2xx
/// response: the latter is an `Ok` carrying the status.
pub trait Network: Send + Sync {
    /// Perform a network fetch for the given request.
    fn fetch(&self, request: &Request) -> Result<Response, NetworkError>;
}

/// Passthrough network that always reports the connection as down.
/// Useful as a default collaborator in offline-only hosts.
pub struct OfflineNetwork;

impl Network for OfflineNetwork {
    fn fetch(&self, _request: &Request) -> Result<Response, NetworkError> {
        Err(NetworkError::Offline)
    }
}

// ── Tests ───────────────────────────────────────────────────
