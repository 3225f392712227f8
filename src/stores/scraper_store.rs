use std::sync::Arc;

use tokio::sync::watch;

use crate::api::{scraping_api, ApiClient};
use crate::domain::SearchHistoryEntry;
use crate::stores::observable::Observable;

#[derive(Debug, Clone, Default)]
pub struct ScraperState {
    pub loading: bool,
    pub error: Option<String>,
    pub success_message: Option<String>,
}

/// Fire-and-wait wrapper around the Google-Maps scraping job. The call runs
/// for minutes as a single request: no progress stream, no cancellation. The
/// UI keeps a blocking indicator up off the `loading` flag.
pub struct ScraperStore {
    state: Observable<ScraperState>,
    client: Arc<ApiClient>,
}

impl ScraperStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        ScraperStore {
            state: Observable::default(),
            client,
        }
    }

    pub fn state(&self) -> ScraperState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScraperState> {
        self.state.subscribe()
    }

    /// A 200 response still carries its own verdict: `status == "success"`
    /// populates `success_message`, anything else lands in `error` like a
    /// transport failure would.
    pub async fn run_google_maps_scraping(&self, entry: &SearchHistoryEntry) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
            s.success_message = None;
        });

        match scraping_api::run_scraping(&self.client, entry).await {
            Ok(job) => {
                self.state.update(|s| {
                    s.loading = false;
                    if job.status == "success" {
                        s.success_message = Some(job.message);
                    } else if job.message.is_empty() {
                        s.error = Some("An unknown error occurred.".to_string());
                    } else {
                        s.error = Some(job.message);
                    }
                });
            }
            Err(e) => {
                log::error!("Scraping job failed: {e}");
                self.state.update(|s| {
                    s.loading = false;
                    s.error = Some("Scraping failed. Please try again.".to_string());
                });
            }
        }
    }
}
