// src/middleware/cache.rs
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Rendered pages keyed by route or selected section.
#[derive(Clone)]
pub struct CacheService {
    page_cache: Arc<Cache<String, String>>,
}

impl CacheService {
    pub fn new(ttl: Duration) -> Self {
        Self {
            page_cache: Arc::new(
                Cache::builder()
                    .max_capacity(64)
                    .time_to_live(ttl)
                    .build(),
            ),
        }
    }

    pub async fn get_page(&self, key: &str) -> Option<String> {
        self.page_cache.get(key).await
    }

    pub async fn set_page(&self, key: String, value: String) {
        self.page_cache.insert(key, value).await;
    }

    /// Returns the cached page, rendering and storing it on a miss.
    pub async fn page_or_render<F>(&self, key: String, render: F) -> String
    where
        F: FnOnce() -> String,
    {
        if let Some(page) = self.get_page(&key).await {
            return page;
        }

        tracing::debug!("Page cache miss: {}", key);
        let page = render();
        self.set_page(key, page.clone()).await;
        page
    }
}
