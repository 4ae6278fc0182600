//! E2E: Offline Capability
//!
//! Drives the worker through install, activation, and connectivity loss
//! the way the host shell would, and verifies the strategy contracts
//! end to end.

use skiff_e2e_tests::fixtures::{
    asset_response, html_response, installed_worker, shell_config, shell_network, MockNetwork,
};
use skiff_worker::{
    FetchSource, OfflineWorker, Request, RequestMethod, RequestMode, Response, WorkerState,
};

#[test]
fn precached_stylesheet_served_without_network() {
    let network = shell_network();
    let mut worker = installed_worker(network.clone());
    let fetches_after_install = network.fetch_count();

    let result = worker.handle_fetch(&Request::new("/static/css/style.css"));

    assert_eq!(result.source(), Some(FetchSource::Cache));
    assert_eq!(result.response().unwrap().body, b"body{margin:0}");
    assert_eq!(network.fetch_count(), fetches_after_install);
}

#[test]
fn api_request_returns_live_response_and_populates_dynamic_partition() {
    let network = shell_network();
    network.route("/api/status/", asset_response(b"{\"status\":\"ok\"}"));
    let mut worker = installed_worker(network.clone());

    let result = worker.handle_fetch(&Request::new("/api/status/"));

    assert_eq!(result.source(), Some(FetchSource::Network));
    let dynamic_cache = worker.config().dynamic_cache.clone();
    assert!(worker
        .storage()
        .match_in(&dynamic_cache, &Request::new("/api/status/"))
        .is_some());
}

#[test]
fn offline_navigation_serves_precached_offline_page_verbatim() {
    let network = shell_network();
    let mut worker = installed_worker(network.clone());
    network.set_online(false);

    let request = Request::new("/dashboard/").with_mode(RequestMode::Navigate);
    let result = worker.handle_fetch(&request);

    assert_eq!(result.source(), Some(FetchSource::Cache));
    assert_eq!(result.response().unwrap().body, b"<html>offline page</html>");
}

#[test]
fn precache_failure_does_not_abort_install() {
    let network = MockNetwork::new();
    // Only two of the five manifest URLs are reachable.
    network.route("/offline/", html_response("<html>offline page</html>"));
    network.route("/static/css/style.css", asset_response(b"body{}"));

    let mut worker = OfflineWorker::new(shell_config(), Box::new(skiff_e2e_tests::fixtures::NetworkHandle(network.clone())));
    worker.install().expect("install survives failures");
    worker.activate().expect("activate");

    assert_eq!(worker.state(), WorkerState::Activated);
    let static_cache = worker.config().static_cache.clone();
    assert!(worker
        .storage()
        .match_in(&static_cache, &Request::new("/offline/"))
        .is_some());
    assert!(worker
        .storage()
        .match_in(&static_cache, &Request::new("/static/js/main.js"))
        .is_none());
}

#[test]
fn activation_purges_previous_version_partitions() {
    let network = shell_network();
    let mut worker = OfflineWorker::new(shell_config(), Box::new(skiff_e2e_tests::fixtures::NetworkHandle(network.clone())));
    worker.install().expect("install");

    // Partitions left behind by an older worker version.
    worker.storage_mut().open("skiff-v1");
    worker.storage_mut().open("skiff-static-v1");
    worker.storage_mut().open("old-cache-v0");

    worker.activate().expect("activate");

    assert!(!worker.storage().has("skiff-v1"));
    assert!(!worker.storage().has("skiff-static-v1"));
    assert!(!worker.storage().has("old-cache-v0"));
    assert!(worker.storage().has(&worker.config().static_cache.clone()));
}

#[test]
fn clear_cache_message_deletes_every_partition_regardless_of_whitelist() {
    let network = shell_network();
    let mut worker = installed_worker(network.clone());
    worker.storage_mut().open("old-cache-v0");

    worker.handle_message(r#"{"type": "CLEAR_CACHE"}"#);

    assert!(worker.storage().keys().is_empty());
}

#[test]
fn mutating_requests_never_touch_partitions_or_network() {
    let network = shell_network();
    let mut worker = installed_worker(network.clone());
    let fetches_before = network.fetch_count();
    let partitions_before = worker.storage().keys();

    for method in [RequestMethod::Post, RequestMethod::Put, RequestMethod::Delete] {
        let request = Request::new("/api/reports/").with_method(method);
        let result = worker.handle_fetch(&request);
        assert!(result.response().is_none());
    }

    assert_eq!(network.fetch_count(), fetches_before);
    assert_eq!(worker.storage().keys(), partitions_before);
}

#[test]
fn browse_then_go_offline_then_clear() {
    let network = shell_network();
    network.route("/reports/", html_response("<html>reports</html>"));
    let mut worker = installed_worker(network.clone());

    // Online browsing caches the visited document.
    let live = worker.handle_fetch(&Request::new("/reports/"));
    assert_eq!(live.source(), Some(FetchSource::Network));

    // Offline, the cached copy is served.
    network.set_online(false);
    let cached = worker.handle_fetch(&Request::new("/reports/"));
    assert_eq!(cached.source(), Some(FetchSource::Cache));
    assert_eq!(cached.response().unwrap().body, b"<html>reports</html>");

    // After a cache wipe the synthesized fallback is all that's left.
    worker.handle_message(r#"{"type": "CLEAR_CACHE"}"#);
    let fallback = worker.handle_fetch(&Request::new("/reports/").with_mode(RequestMode::Navigate));
    assert_eq!(fallback.source(), Some(FetchSource::Fallback));
    assert!(fallback.response().unwrap().is_html());
}

#[test]
fn failed_image_falls_back_to_placeholder_icon() {
    let network = shell_network();
    let mut worker = installed_worker(network.clone());
    network.set_online(false);

    let request = Request::new("/media/photos/new.jpg")
        .with_destination(skiff_worker::RequestDestination::Image);
    let result = worker.handle_fetch(&request);

    assert_eq!(result.source(), Some(FetchSource::Fallback));
    assert_eq!(result.response().unwrap().body, b"png-bytes");
}

#[test]
fn stale_api_copy_does_not_shadow_live_response() {
    let network = shell_network();
    network.route("/api/status/", asset_response(b"first"));
    let mut worker = installed_worker(network.clone());
    worker.handle_fetch(&Request::new("/api/status/"));

    // The backend answer changes; the worker must serve the new one.
    network.route("/api/status/", asset_response(b"second"));
    let result = worker.handle_fetch(&Request::new("/api/status/"));

    assert_eq!(result.source(), Some(FetchSource::Network));
    assert_eq!(result.response().unwrap().body, b"second");
}

#[test]
fn sync_event_fires_single_call_to_endpoint() {
    let network = shell_network();
    network.route("/api/sync/", Response::new(200));
    let worker = installed_worker(network.clone());
    let fetches_before = network.fetch_count();

    let outcome = worker.handle_sync(&skiff_worker::SyncEvent::new("sync-data", false));

    assert_eq!(outcome, skiff_worker::SyncOutcome::Synced);
    let fetched = network.fetched();
    assert_eq!(fetched.len(), fetches_before + 1);
    assert_eq!(fetched.last().map(String::as_str), Some("/api/sync/"));
}
