// web_app/controller/mod.rs - Search controller
//
// Owns everything the gallery page shows: session, cards, load-more
// visibility, notifications and lightbox. It never touches the network or
// the DOM. Entry points hand back a `FetchRequest`; the caller performs it
// (server function in the browser, `ImageSource` natively) and feeds the
// result to `apply_response`.

pub mod error;
pub mod lightbox;
pub mod session;

pub use error::SearchError;
pub use lightbox::Lightbox;
pub use session::SearchSession;

use crate::web_app::model::{Card, ImageHit, Notification, NotifyKind, SearchResponse, MSG_END_OF_RESULTS, PER_PAGE};

/// A fetch the caller must perform on behalf of the controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    pub page: u32,
    /// Search that issued the request; older generations are discarded
    pub generation: u64,
}

/// What applying a response did to the gallery
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Rendered { added: usize, end_reached: bool },
    Empty,
    Failed(SearchError),
    /// Response belonged to a superseded search and was dropped
    Stale,
}

/// Anything that can fetch one page of Pixabay results
#[allow(async_fn_in_trait)]
pub trait ImageSource {
    async fn fetch(&self, query: &str, page: u32) -> Result<SearchResponse, SearchError>;
}

#[derive(Clone, Debug, Default)]
pub struct SearchController {
    session: SearchSession,
    cards: Vec<Card>,
    load_more_visible: bool,
    notifications: Vec<Notification>,
    next_notification_id: u64,
    generation: u64,
    pending: usize,
    lightbox: Lightbox,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn lightbox_mut(&mut self) -> &mut Lightbox {
        &mut self.lightbox
    }

    /// Card shown by the lightbox, if it is open
    pub fn lightbox_card(&self) -> Option<&Card> {
        self.lightbox.current().and_then(|i| self.cards.get(i))
    }

    /// Number of requests handed out and not yet applied
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Start a new search from raw form input
    ///
    /// A blank query raises a warning and returns `None`; nothing else
    /// changes. Otherwise the gallery is cleared, the session reset to page 1
    /// and the first page requested.
    pub fn submit_search(&mut self, raw_query: &str) -> Option<FetchRequest> {
        let query = raw_query.trim();
        if query.is_empty() {
            self.report(&SearchError::EmptyQuery);
            return None;
        }

        self.cards.clear();
        self.lightbox.close();
        self.lightbox.refresh(0);
        self.load_more_visible = false;
        self.session.reset(query.to_string());
        self.generation += 1;

        tracing::info!(query, generation = self.generation, "search submitted");
        Some(self.request())
    }

    /// Request the next page of the current search
    ///
    /// Returns `None` before any search or once the last page was reached.
    /// `load_more_visible` is kept in step with this rule.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if !self.session.has_query() || self.session.is_exhausted() {
            tracing::debug!(session = ?self.session, "load more ignored");
            return None;
        }

        self.session.advance();
        tracing::info!(query = %self.session.query, page = self.session.page, "loading more");
        Some(self.request())
    }

    /// Apply the result of a fetch previously handed out
    ///
    /// A failed fetch does not roll back the page it asked for.
    pub fn apply_response(
        &mut self,
        request: &FetchRequest,
        result: Result<SearchResponse, SearchError>,
    ) -> FetchOutcome {
        self.pending = self.pending.saturating_sub(1);

        if request.generation != self.generation {
            tracing::debug!(
                query = %request.query,
                page = request.page,
                generation = request.generation,
                current = self.generation,
                "discarding stale response"
            );
            return FetchOutcome::Stale;
        }

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(query = %request.query, page = request.page, "fetch failed: {}", e);
                self.report(&e);
                self.sync_load_more();
                return FetchOutcome::Failed(e);
            }
        };

        if response.hits.is_empty() {
            self.report(&SearchError::NoResults);
            self.sync_load_more();
            return FetchOutcome::Empty;
        }

        self.session.record_total(response.total_hits, PER_PAGE);
        for hit in &response.hits {
            self.render_card(hit);
        }

        // A late page may land after a later one exhausted the session
        let end_reached = request.page >= self.session.total_pages;
        if end_reached {
            self.notify(NotifyKind::Info, MSG_END_OF_RESULTS);
        }
        self.sync_load_more();
        self.lightbox.refresh(self.cards.len());

        tracing::info!(
            query = %request.query,
            page = request.page,
            total_pages = self.session.total_pages,
            added = response.hits.len(),
            "page rendered"
        );
        FetchOutcome::Rendered { added: response.hits.len(), end_reached }
    }

    /// Perform `request` against `source` and apply the result
    pub async fn fetch_page<S: ImageSource>(&mut self, source: &S, request: FetchRequest) -> FetchOutcome {
        let result = source.fetch(&request.query, request.page).await;
        self.apply_response(&request, result)
    }

    /// Append one card for `hit` to the gallery
    pub fn render_card(&mut self, hit: &ImageHit) {
        self.cards.push(Card::from_hit(hit));
    }

    /// Remove a notification once it has been shown
    pub fn dismiss(&mut self, id: u64) {
        self.notifications.retain(|n| n.id != id);
    }

    /// Show the button exactly when `load_more` would issue a request
    fn sync_load_more(&mut self) {
        self.load_more_visible = self.session.total_pages > 0 && !self.session.is_exhausted();
    }

    fn request(&mut self) -> FetchRequest {
        self.pending += 1;
        FetchRequest {
            query: self.session.query.clone(),
            page: self.session.page,
            generation: self.generation,
        }
    }

    fn report(&mut self, error: &SearchError) {
        self.notify(error.notify_kind(), error.user_message());
    }

    fn notify(&mut self, kind: NotifyKind, message: &str) {
        self.next_notification_id += 1;
        tracing::warn!(%kind, "{}", message);
        self.notifications.push(Notification {
            id: self.next_notification_id,
            kind,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::web_app::model::{MSG_EMPTY_QUERY, MSG_NO_RESULTS};

    #[test]
    fn test_blank_query_warns_without_request() {
        let mut controller = SearchController::new();
        assert!(controller.submit_search("   \t ").is_none());
        assert_eq!(controller.pending(), 0);
        assert_eq!(controller.notifications().len(), 1);
        assert_eq!(controller.notifications()[0].kind, NotifyKind::Warning);
        assert_eq!(controller.notifications()[0].message, MSG_EMPTY_QUERY);
    }

    #[test]
    fn test_submit_trims_and_resets() {
        let mut controller = SearchController::new();
        let request = controller.submit_search("  cats ").unwrap();
        assert_eq!(request.query, "cats");
        assert_eq!(request.page, 1);
        assert_eq!(controller.session().query, "cats");
        assert!(controller.is_loading());
    }

    #[test]
    fn test_load_more_before_search_is_ignored() {
        let mut controller = SearchController::new();
        assert!(controller.load_more().is_none());
        assert_eq!(controller.session().page, 1);
    }

    #[test]
    fn test_zero_hits_reports_no_results() {
        let mut controller = SearchController::new();
        let request = controller.submit_search("cats").unwrap();
        let outcome = controller.apply_response(&request, Ok(fixtures::response(0, 0)));
        assert_eq!(outcome, FetchOutcome::Empty);
        assert!(controller.cards().is_empty());
        assert_eq!(controller.notifications()[0].message, MSG_NO_RESULTS);
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut controller = SearchController::new();
        let first = controller.submit_search("cats").unwrap();
        let second = controller.submit_search("dogs").unwrap();

        let outcome = controller.apply_response(&first, Ok(fixtures::response(120, 40)));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(controller.cards().is_empty());

        let outcome = controller.apply_response(&second, Ok(fixtures::response(120, 40)));
        assert_eq!(outcome, FetchOutcome::Rendered { added: 40, end_reached: false });
        assert_eq!(controller.cards().len(), 40);
    }

    #[test]
    fn test_dismiss_removes_only_that_notification() {
        let mut controller = SearchController::new();
        controller.submit_search("");
        controller.submit_search(" ");
        let ids: Vec<u64> = controller.notifications().iter().map(|n| n.id).collect();
        assert_eq!(ids, [1, 2]);

        controller.dismiss(1);
        assert_eq!(controller.notifications().len(), 1);
        assert_eq!(controller.notifications()[0].id, 2);
    }

    #[test]
    fn test_new_search_closes_lightbox() {
        let mut controller = SearchController::new();
        let request = controller.submit_search("cats").unwrap();
        controller.apply_response(&request, Ok(fixtures::response(10, 10)));
        controller.lightbox_mut().open(3);
        assert_eq!(controller.lightbox_card(), Some(&controller.cards()[3]));

        controller.submit_search("dogs");
        assert!(!controller.lightbox().is_open());
        assert!(controller.lightbox().is_empty());
    }
}
