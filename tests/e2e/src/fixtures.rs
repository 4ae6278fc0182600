//! Scenario Fixtures
//!
//! A scripted network shared between a test and the worker under test.
//! Connectivity can be flipped mid-scenario to simulate going offline,
//! and every fetched URL is recorded so tests can assert which requests
//! actually reached the network.

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use spin::Mutex;

use skiff_worker::{Network, NetworkError, OfflineWorker, Request, Response, WorkerConfig};

/// Scripted network edge. Unrouted URLs fail at the connection level.
pub struct MockNetwork {
    routes: Mutex<HashMap<String, Response>>,
    online: Mutex<bool>,
    fetched: Mutex<Vec<String>>,
}

impl MockNetwork {
    /// Create an online network with no routes.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            routes: Mutex::new(HashMap::new()),
            online: Mutex::new(true),
            fetched: Mutex::new(Vec::new()),
        })
    }

    /// Script a response for a URL.
    pub fn route(&self, url: &str, response: Response) {
        self.routes.lock().insert(url.to_string(), response);
    }

    /// Flip connectivity.
    pub fn set_online(&self, online: bool) {
        *self.online.lock() = online;
    }

    /// Every URL fetched so far, in order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().clone()
    }

    /// Number of network fetches performed so far.
    pub fn fetch_count(&self) -> usize {
        self.fetched.lock().len()
    }
}

/// Local wrapper so `Network` can be implemented for a shared `MockNetwork`
/// handle without running afoul of the orphan rule on `Arc`.
pub struct NetworkHandle(pub Arc<MockNetwork>);

impl Network for NetworkHandle {
    fn fetch(&self, request: &Request) -> Result<Response, NetworkError> {
        self.0.fetched.lock().push(request.url.clone());
        if !*self.0.online.lock() {
            return Err(NetworkError::Offline);
        }
        match self.0.routes.lock().get(&request.url) {
            Some(response) => Ok(response.clone()),
            None => Err(NetworkError::Failed("no route".to_string())),
        }
    }
}

/// An HTML response with the given body.
pub fn html_response(body: &str) -> Response {
    Response::new(200)
        .with_header("Content-Type", "text/html; charset=utf-8")
        .with_body(body.as_bytes().to_vec())
}

/// A 200 asset response with the given body.
pub fn asset_response(body: &[u8]) -> Response {
    Response::new(200).with_body(body.to_vec())
}

/// Worker config with a compact pre-cache manifest for scenarios.
pub fn shell_config() -> WorkerConfig {
    let mut config = WorkerConfig::with_version("v2");
    config.precache_urls = alloc::vec![
        String::from("/"),
        String::from("/offline/"),
        String::from("/static/css/style.css"),
        String::from("/static/js/main.js"),
        String::from("/static/icons/icon-192x192.png"),
    ];
    config
}

/// A network with every shell_config pre-cache URL routed.
pub fn shell_network() -> Arc<MockNetwork> {
    let network = MockNetwork::new();
    network.route("/", html_response("<html>home</html>"));
    network.route("/offline/", html_response("<html>offline page</html>"));
    network.route("/static/css/style.css", asset_response(b"body{margin:0}"));
    network.route("/static/js/main.js", asset_response(b"void 0"));
    network.route("/static/icons/icon-192x192.png", asset_response(b"png-bytes"));
    network
}

/// A worker driven through install and activation.
pub fn installed_worker(network: Arc<MockNetwork>) -> OfflineWorker {
    let mut worker = OfflineWorker::new(shell_config(), alloc::boxed::Box::new(NetworkHandle(network)));
    worker.install().expect("install");
    worker.activate().expect("activate");
    worker
}
