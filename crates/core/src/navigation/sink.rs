//! Navigation sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::PageReference;

/// Capability to move the user to another page.
///
/// Fire-and-forget: the trade form never waits on, or inspects the outcome of,
/// a navigation request.
pub trait NavigationSink: Send + Sync {
    fn navigate(&self, page: PageReference);
}

/// No-op implementation for headless contexts.
#[derive(Clone, Default)]
pub struct NoOpNavigationSink;

impl NavigationSink for NoOpNavigationSink {
    fn navigate(&self, _page: PageReference) {}
}

/// Mock sink for testing - records every requested page.
#[derive(Clone, Default)]
pub struct MockNavigationSink {
    pages: Arc<Mutex<Vec<PageReference>>>,
}

impl MockNavigationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all requested pages, oldest first.
    pub fn pages(&self) -> Vec<PageReference> {
        self.pages.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<PageReference> {
        self.pages.lock().unwrap().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.pages.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.lock().unwrap().is_empty()
    }
}

impl NavigationSink for MockNavigationSink {
    fn navigate(&self, page: PageReference) {
        self.pages.lock().unwrap().push(page);
    }
}
