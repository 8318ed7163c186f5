use anyhow::{Context, Result, bail};
use async_trait::async_trait;

use crate::config::DEBUG_FLAGS;
use crate::domain::Observation;

/// A place observations can be loaded from. The dashboard only ships the
/// HTTP feed, but the seam keeps tests and demo data off the network.
#[async_trait]
pub trait ObservationSource: Send + Sync {
    fn signature(&self) -> &'static str;
    async fn load(&self) -> Result<Vec<Observation>>;
}

/// The production source: one GET of the merged JSON feed.
///
/// No retry and no timeout; a failed attempt stays failed until the next
/// reload cycle re-runs the whole pipeline.
pub struct HttpSource {
    pub url: String,
}

#[async_trait]
impl ObservationSource for HttpSource {
    fn signature(&self) -> &'static str {
        "http feed"
    }

    async fn load(&self) -> Result<Vec<Observation>> {
        let url = cache_busted(&self.url, chrono::Utc::now().timestamp_millis());

        let response = reqwest::Client::new()
            .get(&url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .context("feed returned a non-OK status")?;

        let records: Vec<Observation> = response
            .json()
            .await
            .context("feed payload is not a JSON observation array")?;
        Ok(records)
    }
}

/// In-memory source for tests and offline demos.
pub struct StaticSource(pub Vec<Observation>);

#[async_trait]
impl ObservationSource for StaticSource {
    fn signature(&self) -> &'static str {
        "static records"
    }

    async fn load(&self) -> Result<Vec<Observation>> {
        Ok(self.0.clone())
    }
}

/// Try each source in order and return the first usable collection, sorted
/// by date ascending. An empty collection counts as a failure: the feed is
/// all-or-nothing, there is no partial-success handling.
pub async fn load_observations(
    sources: &[Box<dyn ObservationSource>],
) -> Result<(Vec<Observation>, &'static str)> {
    let mut last_error: Option<anyhow::Error> = None;

    for source in sources {
        match source.load().await {
            Ok(mut records) => {
                if records.is_empty() {
                    last_error = Some(anyhow::anyhow!(
                        "{} returned no observation records",
                        source.signature()
                    ));
                    continue;
                }
                records.sort_by_key(|obs| obs.date);

                if DEBUG_FLAGS.print_fetch {
                    log::info!(
                        "Loaded {} observation records from {}",
                        records.len(),
                        source.signature()
                    );
                }
                return Ok((records, source.signature()));
            }
            Err(e) => {
                log::warn!("Observation source {} failed: {:#}", source.signature(), e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(e),
        None => bail!("no observation sources configured"),
    }
}

/// Append a timestamp query parameter so intermediate caches never serve a
/// stale feed.
fn cache_busted(url: &str, stamp_ms: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}t={stamp_ms}")
}
