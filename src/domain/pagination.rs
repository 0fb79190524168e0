//! Cursor-driven pagination over list operations
//!
//! A [`Pager`] is either *has-more* or *exhausted*. Each `get_next` call issues
//! one list request with the last seen cursor and moves to *exhausted* once a
//! page comes back without a next-page cursor. Pages are fetched strictly one
//! after another.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use reqwest::Url;

use super::error::SdkError;

const RELATIVE_URL_BASE: &str = "http://localhost";

/// A list envelope that may point at a following page
pub trait PagedResult {
    type Item;

    /// Cursor for the next page, if the service returned one
    fn next_cursor(&self) -> Option<String>;

    fn into_items(self) -> Vec<Self::Item>;
}

/// List params that carry a page cursor
pub trait PageCursor {
    fn cursor(&self) -> Option<String>;

    fn set_cursor(&mut self, cursor: &str) -> Result<(), SdkError>;
}

/// Extract a query parameter from an absolute or relative URL
pub fn query_param_from_url(url: &str, name: &str) -> Option<String> {
    let parsed = Url::parse(url)
        .or_else(|_| Url::parse(RELATIVE_URL_BASE).and_then(|base| base.join(url)))
        .ok()?;

    parsed
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

type FetchPage<P, R> = Arc<dyn Fn(P) -> BoxFuture<'static, Result<R, SdkError>> + Send + Sync>;

/// Iterates a cursor-paginated list operation
pub struct Pager<P, R> {
    fetch: FetchPage<P, R>,
    params: P,
    next: Option<String>,
    has_next: bool,
}

impl<P, R> std::fmt::Debug for Pager<P, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("next", &self.next)
            .field("has_next", &self.has_next)
            .finish()
    }
}

impl<P, R> Pager<P, R>
where
    P: PageCursor + Clone + Send + Sync + 'static,
    R: PagedResult + Send + 'static,
    R::Item: Send + 'static,
{
    /// Create a pager. The initial params must not carry a cursor.
    pub fn new<F, Fut>(params: P, fetch: F) -> Result<Self, SdkError>
    where
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, SdkError>> + Send + 'static,
    {
        if params.cursor().is_some() {
            return Err(SdkError::invalid_parameter(
                "the pagination cursor should not be set on the initial params",
            ));
        }

        Ok(Self {
            fetch: Arc::new(move |params| Box::pin(fetch(params))),
            params,
            next: None,
            has_next: true,
        })
    }

    /// True while more results may be available
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Fetch the next page of items
    pub async fn get_next(&mut self) -> Result<Vec<R::Item>, SdkError> {
        if !self.has_next {
            return Err(SdkError::NoMoreResults);
        }

        let mut params = self.params.clone();
        if let Some(ref cursor) = self.next {
            params.set_cursor(cursor)?;
        }

        let page = (self.fetch)(params).await?;

        self.next = page.next_cursor();
        if self.next.is_none() {
            self.has_next = false;
        }

        tracing::trace!(has_next = self.has_next, "Fetched page");

        Ok(page.into_items())
    }

    /// Fetch every remaining page and concatenate the items in order
    pub async fn get_all(&mut self) -> Result<Vec<R::Item>, SdkError> {
        let mut results = Vec::new();
        while self.has_next() {
            results.extend(self.get_next().await?);
        }
        Ok(results)
    }

    /// Stream items page by page
    pub fn into_stream(self) -> BoxStream<'static, Result<R::Item, SdkError>> {
        stream::try_unfold(self, |mut pager| async move {
            if !pager.has_next() {
                return Ok::<_, SdkError>(None);
            }
            let items = pager.get_next().await?;
            Ok(Some((
                stream::iter(items.into_iter().map(Ok::<_, SdkError>)),
                pager,
            )))
        })
        .try_flatten()
        .boxed()
    }
}
