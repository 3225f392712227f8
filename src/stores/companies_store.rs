use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;

use crate::api::{companies_api, ApiClient};
use crate::domain::CompanyLead;
use crate::stores::observable::Observable;

pub const DEFAULT_PAGE_SIZE: u32 = 5;

#[derive(Debug, Clone)]
pub struct CompaniesState {
    /// Current page only; older pages are not kept around.
    pub companies: Vec<CompanyLead>,
    /// Multi-select for the bulk send, keyed by website string. Survives
    /// page navigation.
    pub selected_websites: HashSet<String>,
    pub total_companies: u64,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for CompaniesState {
    fn default() -> Self {
        CompaniesState {
            companies: Vec::new(),
            selected_websites: HashSet::new(),
            total_companies: 0,
            current_page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 0,
            loading: false,
            error: None,
        }
    }
}

pub struct CompaniesStore {
    state: Observable<CompaniesState>,
    client: Arc<ApiClient>,
}

impl CompaniesStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        CompaniesStore {
            state: Observable::default(),
            client,
        }
    }

    pub fn state(&self) -> CompaniesState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<CompaniesState> {
        self.state.subscribe()
    }

    /// Fetches one page of leads. The server's `page` and `page_size` are
    /// authoritative; `total_pages` is recomputed locally from them. On
    /// failure the page is cleared but the pagination counters stay put.
    pub async fn fetch_companies(&self, search_history_id: Uuid, page: u32, page_size: u32) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
            s.current_page = page;
        });

        match companies_api::fetch_companies(&self.client, search_history_id, page, page_size)
            .await
        {
            Ok(envelope) => {
                self.state.update(|s| {
                    s.companies = envelope.items;
                    s.total_companies = envelope.total;
                    s.current_page = envelope.page;
                    s.page_size = envelope.page_size;
                    s.total_pages = total_pages(envelope.total, envelope.page_size);
                    s.loading = false;
                });
            }
            Err(e) => {
                log::error!("Failed to fetch companies for {search_history_id}: {e}");
                self.state.update(|s| {
                    s.companies.clear();
                    s.error = Some("Failed to fetch companies.".to_string());
                    s.loading = false;
                });
            }
        }
    }

    pub fn toggle_selection(&self, website: &str) {
        self.state.update(|s| {
            if !s.selected_websites.remove(website) {
                s.selected_websites.insert(website.to_string());
            }
        });
    }

    pub fn is_selected(&self, website: &str) -> bool {
        self.state.get().selected_websites.contains(website)
    }

    pub fn clear_selection(&self) {
        self.state.update(|s| s.selected_websites.clear());
    }

    /// Forwards the selected leads from the currently loaded page to the
    /// webhook endpoint. Selections made on pages that are no longer loaded
    /// are not materialized into the payload. On success the whole selection
    /// set is cleared; on failure it is left untouched.
    pub async fn send_selected_companies(&self) -> anyhow::Result<usize> {
        let snapshot = self.state.get();
        let payload: Vec<CompanyLead> = snapshot
            .companies
            .iter()
            .filter(|c| snapshot.selected_websites.contains(&c.website))
            .cloned()
            .collect();

        if payload.is_empty() {
            log::debug!("No selected companies on the loaded page, nothing to send");
            return Ok(0);
        }

        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match companies_api::send_webhook(&self.client, &payload).await {
            Ok(()) => {
                self.state.update(|s| {
                    s.selected_websites.clear();
                    s.loading = false;
                });
                Ok(payload.len())
            }
            Err(e) => {
                log::error!("Failed to send selected companies: {e}");
                self.state.update(|s| {
                    s.error = Some("Failed to send selected companies.".to_string());
                    s.loading = false;
                });
                Err(e.into())
            }
        }
    }

    /// Clears everything; used when the containing view closes so stale data
    /// does not flash on the next open.
    pub fn reset(&self) {
        self.state.set(CompaniesState::default());
    }
}

fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(page_size as u64)).unwrap_or(u32::MAX)
}
