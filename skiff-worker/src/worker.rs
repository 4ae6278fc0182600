//! Offline Worker
//!
//! The [`OfflineWorker`] owns the cache partitions, the route table, and
//! a handle to the host's network edge. The host drives it through the
//! install/activate lifecycle and hands it fetch, message, sync, and push
//! events; every event is handled independently of the others.

use alloc::boxed::Box;

use crate::cache::CacheStorage;
use crate::config::WorkerConfig;
use crate::fetch::{
    FetchResult, FetchSource, Network, Request, RequestDestination, RequestMethod, ResponseType,
};
use crate::lifecycle::{Lifecycle, LifecycleError, WorkerState};
use crate::message::{parse_message, ClientMessage};
use crate::offline::offline_page_response;
use crate::push::{build_notification, ClickOutcome, Notification, NotificationClick, PushEvent};
use crate::route::{RouteTable, Strategy};
use crate::sync::{SyncEvent, SyncOutcome};

/// The offline cache proxy worker.
pub struct OfflineWorker {
    config: WorkerConfig,
    routes: RouteTable,
    storage: CacheStorage,
    lifecycle: Lifecycle,
    network: Box<dyn Network>,
    /// Whether immediate takeover was requested.
    skip_waiting_requested: bool,
    /// Whether this worker controls all open clients.
    clients_claimed: bool,
}

impl OfflineWorker {
    /// Create a new worker with the shell route table.
    pub fn new(config: WorkerConfig, network: Box<dyn Network>) -> Self {
        Self {
            config,
            routes: RouteTable::shell_rules(),
            storage: CacheStorage::new(),
            lifecycle: Lifecycle::new(),
            network,
            skip_waiting_requested: false,
            clients_claimed: false,
        }
    }

    /// Replace the route table.
    pub fn set_routes(&mut self, routes: RouteTable) {
        self.routes = routes;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> WorkerState {
        self.lifecycle.state()
    }

    /// Whether this worker is active.
    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// Whether this worker controls all open clients.
    pub fn clients_claimed(&self) -> bool {
        self.clients_claimed
    }

    /// Whether immediate takeover was requested.
    pub fn skip_waiting_requested(&self) -> bool {
        self.skip_waiting_requested
    }

    /// The worker configuration.
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// The cache partitions.
    pub fn storage(&self) -> &CacheStorage {
        &self.storage
    }

    /// Mutable access to the cache partitions.
    pub fn storage_mut(&mut self) -> &mut CacheStorage {
        &mut self.storage
    }

    // ── Lifecycle ───────────────────────────────────────────

    /// Install: pre-populate the static partition with the essential
    /// assets. Each URL is fetched independently; a failure to cache one
    /// never aborts the rest. Immediate takeover is requested at the end
    /// so the new version does not wait for existing pages to close.
    pub fn install(&mut self) -> Result<(), LifecycleError> {
        self.lifecycle.transition(WorkerState::Installing)?;
        log::info!("[OfflineWorker] installing version {}", self.config.version);

        let urls = self.config.precache_urls.clone();
        for url in &urls {
            let request = Request::new(url.as_str());
            match self.network.fetch(&request) {
                Ok(response) if response.status == 200 => {
                    if let Err(err) =
                        self.storage
                            .put_in(&self.config.static_cache, &request, response)
                    {
                        log::warn!("[OfflineWorker] could not pre-cache {}: {}", url, err);
                    }
                }
                Ok(response) => {
                    log::warn!(
                        "[OfflineWorker] could not pre-cache {} (status {})",
                        url,
                        response.status
                    );
                }
                Err(err) => {
                    log::warn!("[OfflineWorker] could not pre-cache {}: {}", url, err);
                }
            }
        }

        self.lifecycle.transition(WorkerState::Installed)?;
        self.skip_waiting_requested = true;
        log::info!("[OfflineWorker] install complete");
        Ok(())
    }

    /// Activate: delete every partition not in the current whitelist,
    /// then claim all open clients so interception starts without waiting
    /// for the next navigation.
    pub fn activate(&mut self) -> Result<(), LifecycleError> {
        self.lifecycle.transition(WorkerState::Activating)?;
        log::info!("[OfflineWorker] activating version {}", self.config.version);

        let whitelist = self.config.whitelist();
        for name in self.storage.keys() {
            if !whitelist.contains(&name.as_str()) {
                log::info!("[OfflineWorker] deleting old cache {}", name);
                self.storage.delete(&name);
            }
        }

        self.lifecycle.transition(WorkerState::Activated)?;
        self.clients_claimed = true;
        log::info!("[OfflineWorker] activation complete");
        Ok(())
    }

    /// Force immediate activation of an installed worker.
    pub fn skip_waiting(&mut self) {
        self.skip_waiting_requested = true;
        if self.lifecycle.state() == WorkerState::Installed {
            if let Err(err) = self.activate() {
                log::warn!("[OfflineWorker] skip waiting: {}", err);
            }
        }
    }

    // ── Fetch interception ──────────────────────────────────

    /// Intercept one request. Mutating methods are never proxied: no
    /// partition is read or written for them.
    pub fn handle_fetch(&mut self, request: &Request) -> FetchResult {
        if request.method != RequestMethod::Get {
            return FetchResult::Passthrough;
        }

        let strategy = self.routes.classify(request.path());
        log::debug!("[OfflineWorker] GET {} -> {:?}", request.url, strategy);

        match strategy {
            Strategy::CacheFirst => self.cache_first(request),
            Strategy::NetworkFirstDynamic => self.network_first_dynamic(request),
            Strategy::NetworkFirstDocument => self.network_first_document(request),
        }
    }

    /// Static assets: a hit never touches the network. Misses are fetched
    /// and, when successful, copied into the static partition. A failed
    /// image fetch degrades to the cached placeholder icon.
    fn cache_first(&mut self, request: &Request) -> FetchResult {
        if let Some(stored) = self.storage.match_in(&self.config.static_cache, request) {
            return FetchResult::Served {
                response: stored.clone(),
                source: FetchSource::Cache,
            };
        }

        match self.network.fetch(request) {
            Ok(response) => {
                if response.status == 200 && response.response_type != ResponseType::Error {
                    let _ = self
                        .storage
                        .put_in(&self.config.static_cache, request, response.clone());
                }
                FetchResult::Served {
                    response,
                    source: FetchSource::Network,
                }
            }
            Err(err) => {
                log::warn!("[OfflineWorker] fetch failed for {}: {}", request.url, err);
                if request.destination == RequestDestination::Image {
                    let icon_request = Request::new(self.config.fallback_icon_path.as_str());
                    if let Some(icon) = self.storage.match_request(&icon_request) {
                        return FetchResult::Served {
                            response: icon.clone(),
                            source: FetchSource::Fallback,
                        };
                    }
                }
                FetchResult::Unresolved
            }
        }
    }

    /// Dynamic routes: the live response always wins. Exact 200s are
    /// copied into the dynamic partition as the offline fallback.
    fn network_first_dynamic(&mut self, request: &Request) -> FetchResult {
        match self.network.fetch(request) {
            Ok(response) => {
                if response.status == 200 {
                    let _ = self
                        .storage
                        .put_in(&self.config.dynamic_cache, request, response.clone());
                }
                FetchResult::Served {
                    response,
                    source: FetchSource::Network,
                }
            }
            Err(err) => {
                log::warn!("[OfflineWorker] fetch failed for {}: {}", request.url, err);
                match self.storage.match_in(&self.config.dynamic_cache, request) {
                    Some(stored) => FetchResult::Served {
                        response: stored.clone(),
                        source: FetchSource::Cache,
                    },
                    None => FetchResult::Unresolved,
                }
            }
        }
    }

    /// Documents: network first, HTML 200s cached. Offline navigations
    /// fall back to the dynamic partition, then the pre-cached offline
    /// page, then the synthesized inline document.
    fn network_first_document(&mut self, request: &Request) -> FetchResult {
        match self.network.fetch(request) {
            Ok(response) => {
                if response.status == 200 && response.is_html() {
                    let _ = self
                        .storage
                        .put_in(&self.config.dynamic_cache, request, response.clone());
                }
                FetchResult::Served {
                    response,
                    source: FetchSource::Network,
                }
            }
            Err(err) => {
                log::warn!("[OfflineWorker] fetch failed for {}: {}", request.url, err);
                if let Some(stored) = self.storage.match_in(&self.config.dynamic_cache, request) {
                    return FetchResult::Served {
                        response: stored.clone(),
                        source: FetchSource::Cache,
                    };
                }
                if request.is_navigation() {
                    let offline_request = Request::new(self.config.offline_path.as_str());
                    if let Some(page) = self
                        .storage
                        .match_in(&self.config.static_cache, &offline_request)
                    {
                        return FetchResult::Served {
                            response: page.clone(),
                            source: FetchSource::Cache,
                        };
                    }
                    return FetchResult::Served {
                        response: offline_page_response(),
                        source: FetchSource::Fallback,
                    };
                }
                FetchResult::Unresolved
            }
        }
    }

    // ── Control channel ─────────────────────────────────────

    /// Handle a message from the controlling page. Unrecognized messages
    /// are ignored. Returns the recognized command, if any.
    pub fn handle_message(&mut self, raw: &str) -> Option<ClientMessage> {
        let message = parse_message(raw);
        match message {
            Some(ClientMessage::SkipWaiting) => self.skip_waiting(),
            Some(ClientMessage::ClearCache) => {
                let removed = self.storage.delete_all();
                log::info!("[OfflineWorker] cleared {} cache partitions", removed);
            }
            None => log::debug!("[OfflineWorker] ignoring unrecognized message"),
        }
        message
    }

    // ── Background sync ─────────────────────────────────────

    /// Handle a tagged background sync event: one fire-and-forget call to
    /// the synchronization endpoint. A connection-level success counts as
    /// synced; retry scheduling stays with the platform.
    pub fn handle_sync(&self, event: &SyncEvent) -> SyncOutcome {
        if event.tag != self.config.sync_tag {
            return SyncOutcome::Ignored;
        }

        log::info!("[OfflineWorker] background sync for tag {}", event.tag);
        let request = Request::new(self.config.sync_endpoint.as_str());
        match self.network.fetch(&request) {
            Ok(_) => {
                log::info!("[OfflineWorker] data synchronized");
                SyncOutcome::Synced
            }
            Err(err) => {
                log::error!("[OfflineWorker] sync failed: {}", err);
                if event.last_chance {
                    log::warn!("[OfflineWorker] platform will not retry this sync");
                }
                SyncOutcome::Failed
            }
        }
    }

    // ── Push ────────────────────────────────────────────────

    /// Build the notification for a push delivery.
    pub fn handle_push(&self, event: &PushEvent) -> Notification {
        log::info!("[OfflineWorker] push received");
        build_notification(event, &self.config)
    }

    /// Resolve a click on a displayed notification.
    pub fn handle_notification_click(&self, click: &NotificationClick) -> ClickOutcome {
        match click.action.as_deref() {
            Some("explore") => ClickOutcome::OpenWindow(self.config.app_root.clone()),
            _ => ClickOutcome::Dismissed,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────
