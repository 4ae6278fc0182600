//! Skiff Offline Worker
//!
//! Offline cache proxy engine for the Skiff app shell. The worker sits at
//! the network edge of the host shell: every outgoing GET request is
//! intercepted, classified against an ordered route table, and resolved by
//! one of three caching strategies (cache-first, network-first with cache
//! fallback, network-first with offline-page fallback). The host drives
//! the worker through its lifecycle (`install` → `activate`) and delivers
//! fetch, message, sync, and push events to it; each event is handled
//! independently.
//!
//! # Architecture
//!
//! - `fetch`: request/response model and the [`Network`] edge trait
//! - `cache`: named cache partitions keyed by request identity
//! - `route`: ordered URL classification rules (first match wins)
//! - `config`: worker configuration + JSON config loading
//! - `lifecycle`: worker state machine and transition validation
//! - `worker`: the [`OfflineWorker`] event handlers
//! - `message`: control channel messages from the controlling page
//! - `offline`: synthesized offline fallback document
//! - `sync`: background sync events
//! - `push`: push events and notification building

#![no_std]

extern crate alloc;

pub mod cache;
pub mod config;
pub mod fetch;
pub mod lifecycle;
pub mod message;
pub mod offline;
pub mod push;
pub mod route;
pub mod sync;
pub mod worker;

pub use cache::{Cache, CacheError, CacheStorage};
pub use config::WorkerConfig;
pub use fetch::{
    FetchResult, FetchSource, Network, NetworkError, Request, RequestDestination, RequestMethod,
    RequestMode, Response, ResponseType,
};
pub use lifecycle::{LifecycleError, WorkerState};
pub use message::ClientMessage;
pub use push::{ClickOutcome, Notification, NotificationClick, PushEvent};
pub use route::{RoutePredicate, RouteRule, RouteTable, Strategy};
pub use sync::{SyncEvent, SyncOutcome};
pub use worker::OfflineWorker;
