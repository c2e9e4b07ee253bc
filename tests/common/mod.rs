//! Shared test doubles for the talk site collaborators.
//!
//! - `RecordingTalkStore` - canned talks, fixed insert id, records every call
//! - `FailingTalkStore` - every call fails with a storage error
//! - `FixedTimezones` - fixed identifier list, counts lookups
//! - `RecordingRenderer` - records each view/payload pair instead of rendering

#![allow(dead_code, unused_macros)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use talksite::errors::AppError;
use talksite::models::talk::{StoreError, Talk, TalkStore};
use talksite::render::{Renderer, View, ViewPayload};
use talksite::services::timezone::TimezoneLookup;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const RECOGNIZED_ZONES: [&str; 3] = ["America/Chicago", "Europe/Oslo", "UTC"];

pub fn sample_talk(id: i64) -> Talk {
    Talk {
        id,
        twitter_username: "ferris".to_string(),
        title: "Fearless concurrency in practice".to_string(),
        summary: "Send, Sync and what they buy you.".to_string(),
        timezone: "Europe/Oslo".to_string(),
    }
}

/// Build an initialized actix service with the site routes and 404 fallback.
macro_rules! init_site {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx))
                .configure(talksite::app::configure)
                .default_service(actix_web::web::to(talksite::app::not_found)),
        )
        .await
    };
}

// ============================================================================
// STORES
// ============================================================================

#[derive(Debug)]
pub struct RecordingTalkStore {
    insert_id: i64,
    talks: HashMap<i64, Talk>,
    inserted: Mutex<Vec<Talk>>,
    lookups: Mutex<Vec<i64>>,
}

impl RecordingTalkStore {
    /// Store that hands out `insert_id` and knows the given talks.
    pub fn new(insert_id: i64, talks: Vec<Talk>) -> Self {
        Self {
            insert_id,
            talks: talks.into_iter().map(|t| (t.id, t)).collect(),
            inserted: Mutex::new(Vec::new()),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(1, vec![])
    }

    pub fn inserted(&self) -> Vec<Talk> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> Vec<i64> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl TalkStore for RecordingTalkStore {
    async fn insert(&self, talk: &Talk) -> Result<i64, StoreError> {
        self.inserted.lock().unwrap().push(talk.clone());
        Ok(self.insert_id)
    }

    async fn get_by_id(&self, id: i64) -> Result<Talk, StoreError> {
        self.lookups.lock().unwrap().push(id);
        self.talks.get(&id).cloned().ok_or(StoreError::NotFound)
    }
}

#[derive(Debug, Default)]
pub struct FailingTalkStore {
    pub inserts: AtomicUsize,
    pub lookups: AtomicUsize,
}

#[async_trait]
impl TalkStore for FailingTalkStore {
    async fn insert(&self, _talk: &Talk) -> Result<i64, StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Storage("connection refused".to_string()))
    }

    async fn get_by_id(&self, _id: i64) -> Result<Talk, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Storage("connection refused".to_string()))
    }
}

// ============================================================================
// TIME ZONES
// ============================================================================

#[derive(Debug)]
pub struct FixedTimezones {
    zones: Vec<String>,
    calls: AtomicUsize,
}

impl FixedTimezones {
    pub fn new(zones: &[&str]) -> Self {
        Self {
            zones: zones.iter().map(|z| z.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn recognized() -> Self {
        Self::new(&RECOGNIZED_ZONES)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn zones(&self) -> Vec<String> {
        self.zones.clone()
    }
}

impl TimezoneLookup for FixedTimezones {
    fn load_time_zones(&self, filter: &str) -> Vec<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.zones
            .iter()
            .filter(|z| z.contains(filter))
            .cloned()
            .collect()
    }
}

// ============================================================================
// RENDERER
// ============================================================================

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Mutex<Vec<(View, Option<ViewPayload>)>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<(View, Option<ViewPayload>)> {
        self.calls.lock().unwrap().clone()
    }

    /// The single recorded render call.
    pub fn only_call(&self) -> (View, Option<ViewPayload>) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one render, got {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, view: View, payload: Option<ViewPayload>) -> Result<String, AppError> {
        let html = format!("<rendered {}>", view.name());
        self.calls.lock().unwrap().push((view, payload));
        Ok(html)
    }
}
