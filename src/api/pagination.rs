//! Offset-based pagination over Jira's `startAt`/`maxResults` convention.
//!
//! Every paged endpoint returns an envelope carrying its offset, page size,
//! and (depending on the endpoint) a `total` and an `isLast` flag.
//! [`collect_pages`] walks such an endpoint from offset zero and accumulates
//! the items of every page.

use std::future::Future;

use tracing::debug;

use super::error::Result;

/// Paging metadata reported by a single page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// Offset of the first item in this page.
    pub start_at: u32,
    /// Page size the server applied.
    pub max_results: u32,
    /// Total number of items, when the endpoint reports one.
    pub total: Option<u32>,
    /// Explicit last-page flag, when the endpoint reports one.
    pub is_last: Option<bool>,
}

impl PageInfo {
    /// Whether no further page should be requested after this one.
    ///
    /// `start_at` is the offset this page was requested with. The offset
    /// echoed back by the server is not trusted, since some endpoints omit it.
    ///
    /// A page is final when Jira flags it as last, when the reported total is
    /// smaller than the page size, when it came back empty, or when the items
    /// received so far reach the reported total.
    pub fn is_final(&self, start_at: u32, received: usize) -> bool {
        if self.is_last == Some(true) || received == 0 {
            return true;
        }

        match self.total {
            Some(total) => {
                total < self.max_results || start_at as u64 + received as u64 >= total as u64
            }
            None => false,
        }
    }
}

/// A decoded page of results.
pub trait Page {
    /// The item type collected from each page.
    type Item;

    /// Paging metadata for this page.
    fn info(&self) -> PageInfo;

    /// Consume the page, yielding its items.
    fn into_items(self) -> Vec<Self::Item>;
}

/// Fetch pages sequentially starting at offset zero and accumulate their items.
///
/// `fetch` receives the `startAt` offset for each request. The offset advances
/// by the number of items actually received, so a server that clamps the page
/// size never causes items to be skipped. The first failing page aborts the
/// walk and its error is returned.
pub async fn collect_pages<P, F, Fut>(mut fetch: F) -> Result<Vec<P::Item>>
where
    P: Page,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<P>>,
{
    let mut items = Vec::new();
    let mut start_at = 0u32;

    loop {
        let page = fetch(start_at).await?;
        let info = page.info();
        let batch = page.into_items();
        let received = batch.len();
        items.extend(batch);

        debug!(
            start_at,
            received,
            total = ?info.total,
            is_last = ?info.is_last,
            accumulated = items.len(),
            "Fetched page"
        );

        if info.is_final(start_at, received) {
            break;
        }
        start_at = start_at.saturating_add(received as u32);
    }

    Ok(items)
}
