//! Paged results collection
//!
//! Holds the parks fetched for one search query together with its page
//! cursor. Next-page fetches append to the held items; previous-page fetches
//! replace them wholesale with the fetched page. At most one fetch per
//! collection is in flight at any time.

use std::sync::Arc;

use parking_lot::Mutex;
use pf_core::FetchAdapter;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::PaginationMode;
use crate::model::Park;
use crate::parsers::{self, ParkPage};
use crate::sources::Endpoints;
use crate::DataError;

/// Identity of one collection instance
pub type CollectionId = Uuid;

/// Why a page request did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Already on the last page
    Exhausted,
    /// Already on the first page
    AtFirstPage,
    /// Another fetch for this collection has not completed
    InFlight,
    /// The first page has not been loaded yet
    NotLoaded,
    /// The collection was fetched in one request
    Flat,
}

/// Result of a next/previous page request
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// `new_items` were appended after the existing items
    Appended { page: u32, new_items: Vec<Park> },
    /// The held items were replaced by `items`
    Replaced { page: u32, items: Vec<Park> },
    /// Nothing was requested and nothing changed
    Skipped(SkipReason),
}

/// Point-in-time copy of a collection's state
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSnapshot {
    pub id: CollectionId,
    pub query_string: String,
    pub items: Vec<Park>,
    pub current_page: u32,
    pub total_pages: u32,
    pub fetch_in_flight: bool,
}

#[derive(Debug, Default)]
struct CollectionState {
    items: Vec<Park>,
    current_page: u32,
    total_pages: u32,
    fetch_in_flight: bool,
    loaded: bool,
}

/// Direction of a page fetch
#[derive(Debug, Clone, Copy)]
enum PageRequest {
    First,
    Next,
    Previous,
}

/// Search results for one query string
pub struct ParksCollection {
    id: CollectionId,
    query_string: String,
    fetcher: Arc<dyn FetchAdapter>,
    endpoints: Endpoints,
    mode: PaginationMode,
    state: Mutex<CollectionState>,
}

impl ParksCollection {
    pub fn new(
        query_string: &str,
        fetcher: Arc<dyn FetchAdapter>,
        endpoints: Endpoints,
        mode: PaginationMode,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            query_string: query_string.to_string(),
            fetcher,
            endpoints,
            mode,
            state: Mutex::new(CollectionState::default()),
        }
    }

    pub fn id(&self) -> CollectionId {
        self.id
    }

    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    /// Fetch page 1 (or the whole result set in flat mode), replacing any
    /// held items. Total pages default to 1 when the server omits them.
    pub async fn fetch_first_page(&self) -> Result<CollectionSnapshot, DataError> {
        let Some(guard) = self.begin_fetch() else {
            debug!("Collection {} already fetching, first page request ignored", self.id);
            return Ok(self.snapshot());
        };

        let page = self.fetch_page(PageRequest::First, 1).await;
        let mut state = self.state.lock();
        guard.finish(&mut state);
        let page = page?;

        state.total_pages = page.total_pages.unwrap_or(1);
        state.current_page = 1;
        state.items = page.parks;
        state.loaded = true;

        info!(
            "Loaded {} parks for '{}' (page 1 of {})",
            state.items.len(),
            self.query_string,
            state.total_pages
        );
        drop(state);
        Ok(self.snapshot())
    }

    /// Fetch the following page and append its parks. A no-op on the last
    /// page or while another fetch is running; no request is issued then.
    pub async fn fetch_next_page(&self) -> Result<PageOutcome, DataError> {
        let (guard, page_number) = match self.begin_page(PageRequest::Next) {
            Ok(started) => started,
            Err(reason) => return Ok(PageOutcome::Skipped(reason)),
        };

        let page = self.fetch_page(PageRequest::Next, page_number).await;
        let mut state = self.state.lock();
        guard.finish(&mut state);
        let page = page?;

        state.current_page = page_number;
        state.total_pages = page.total_pages.unwrap_or(state.total_pages).max(page_number);
        state.items.extend(page.parks.iter().cloned());

        debug!(
            "Appended {} parks, collection {} now holds {}",
            page.parks.len(),
            self.id,
            state.items.len()
        );
        Ok(PageOutcome::Appended {
            page: page_number,
            new_items: page.parks,
        })
    }

    /// Fetch the preceding page and replace the held parks with it
    pub async fn fetch_previous_page(&self) -> Result<PageOutcome, DataError> {
        let (guard, page_number) = match self.begin_page(PageRequest::Previous) {
            Ok(started) => started,
            Err(reason) => return Ok(PageOutcome::Skipped(reason)),
        };

        let page = self.fetch_page(PageRequest::Previous, page_number).await;
        let mut state = self.state.lock();
        guard.finish(&mut state);
        let page = page?;

        state.current_page = page_number;
        state.total_pages = page.total_pages.unwrap_or(state.total_pages).max(page_number);
        state.items = page.parks.clone();

        debug!("Replaced collection {} with page {}", self.id, page_number);
        Ok(PageOutcome::Replaced {
            page: page_number,
            items: page.parks,
        })
    }

    pub fn snapshot(&self) -> CollectionSnapshot {
        let state = self.state.lock();
        CollectionSnapshot {
            id: self.id,
            query_string: self.query_string.clone(),
            items: state.items.clone(),
            current_page: state.current_page,
            total_pages: state.total_pages,
            fetch_in_flight: state.fetch_in_flight,
        }
    }

    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }

    pub fn current_page(&self) -> u32 {
        self.state.lock().current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.state.lock().total_pages
    }

    pub fn is_fetching(&self) -> bool {
        self.state.lock().fetch_in_flight
    }

    pub fn has_next_page(&self) -> bool {
        let state = self.state.lock();
        self.mode == PaginationMode::Paged && state.loaded && state.current_page < state.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        let state = self.state.lock();
        self.mode == PaginationMode::Paged && state.loaded && state.current_page > 1
    }

    fn begin_fetch(&self) -> Option<InFlightGuard<'_>> {
        let mut state = self.state.lock();
        if state.fetch_in_flight {
            return None;
        }
        state.fetch_in_flight = true;
        Some(InFlightGuard {
            state: &self.state,
            armed: true,
        })
    }

    /// Check the cursor and claim the in-flight slot for a page move
    fn begin_page(&self, request: PageRequest) -> Result<(InFlightGuard<'_>, u32), SkipReason> {
        {
            let state = self.state.lock();
            if self.mode == PaginationMode::Flat {
                return Err(SkipReason::Flat);
            }
            if !state.loaded {
                return Err(SkipReason::NotLoaded);
            }
            if state.fetch_in_flight {
                debug!("Collection {} already fetching, page request ignored", self.id);
                return Err(SkipReason::InFlight);
            }
            match request {
                PageRequest::Next if state.current_page >= state.total_pages => {
                    debug!("Collection {} exhausted at page {}", self.id, state.current_page);
                    return Err(SkipReason::Exhausted);
                }
                PageRequest::Previous if state.current_page <= 1 => {
                    return Err(SkipReason::AtFirstPage);
                }
                _ => {}
            }
        }

        let guard = self.begin_fetch().ok_or(SkipReason::InFlight)?;
        let current = self.state.lock().current_page;
        let page_number = match request {
            PageRequest::Previous => current - 1,
            _ => current + 1,
        };
        Ok((guard, page_number))
    }

    async fn fetch_page(&self, request: PageRequest, page: u32) -> Result<ParkPage, DataError> {
        let page_param = match self.mode {
            PaginationMode::Flat => None,
            PaginationMode::Paged => Some(page),
        };
        let url = self.endpoints.search_page(&self.query_string, page_param);
        debug!("Fetching {:?} page {} of '{}'", request, page, self.query_string);

        let body = self.fetcher.get_json(&url).await?;
        parsers::parse_park_page(&body, &self.endpoints.api().total_pages_field)
    }
}

/// Clears the in-flight flag when a fetch completes or its future is dropped
struct InFlightGuard<'a> {
    state: &'a Mutex<CollectionState>,
    armed: bool,
}

impl InFlightGuard<'_> {
    fn finish(mut self, state: &mut CollectionState) {
        state.fetch_in_flight = false;
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.lock().fetch_in_flight = false;
        }
    }
}
