//! Application state — the container list and log view state machines.
//!
//! List: Loading → Ready | Failed (rendered as an empty-list placeholder).
//! Log view: Closed → Loading → Shown | Failed, independent of the list.
//! A refresh re-enters Loading; fetch errors never propagate to the user.

use crate::api::{ApiClient, ApiError};
use crate::model::ContainerSummary;

#[derive(Debug, Clone, PartialEq)]
pub enum ListFetch {
    Loading,
    Ready(Vec<ContainerSummary>),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogView {
    Closed,
    Loading { name: String },
    Shown { name: String, text: String },
    Failed { name: String },
}

pub struct AppState {
    pub list: ListFetch,
    pub selected: usize,
    pub log_view: LogView,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            list: ListFetch::Loading,
            selected: 0,
            log_view: LogView::Closed,
            should_quit: false,
        }
    }

    /// Containers currently available for display. Empty while loading or
    /// after a failed fetch — the error placeholder is a rendering concern.
    pub fn containers(&self) -> &[ContainerSummary] {
        match &self.list {
            ListFetch::Ready(containers) => containers,
            _ => &[],
        }
    }

    pub fn selected_container(&self) -> Option<&ContainerSummary> {
        self.containers().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let count = self.containers().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    // ── List fetch transitions ──────────────────────────────────

    pub fn begin_list_fetch(&mut self) {
        self.list = ListFetch::Loading;
    }

    pub fn finish_list_fetch(&mut self, result: Result<Vec<ContainerSummary>, ApiError>) {
        match result {
            Ok(containers) => {
                // Keep the cursor in range across refreshes.
                if self.selected >= containers.len() {
                    self.selected = containers.len().saturating_sub(1);
                }
                self.list = ListFetch::Ready(containers);
            }
            Err(e) => {
                tracing::warn!("Container list fetch failed: {}", e);
                self.selected = 0;
                self.list = ListFetch::Failed;
            }
        }
    }

    // ── Log view transitions ────────────────────────────────────

    pub fn begin_log_fetch(&mut self, name: String) {
        self.log_view = LogView::Loading { name };
    }

    pub fn finish_log_fetch(&mut self, result: Result<String, ApiError>) {
        let name = match &self.log_view {
            LogView::Loading { name } => name.clone(),
            // View was closed before the fetch finished; drop the result.
            _ => return,
        };
        self.log_view = match result {
            Ok(text) => LogView::Shown { name, text },
            Err(e) => {
                tracing::warn!(container = %name, "Log fetch failed: {}", e);
                LogView::Failed { name }
            }
        };
    }

    pub fn close_log_view(&mut self) {
        self.log_view = LogView::Closed;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct App {
    pub state: AppState,
    api: ApiClient,
}

impl App {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: AppState::new(),
            api,
        }
    }

    /// Fetch the container list. Awaited inline, so at most one list
    /// fetch is ever outstanding.
    pub async fn refresh(&mut self) {
        self.state.begin_list_fetch();
        let result = self.api.list_containers().await;
        self.state.finish_list_fetch(result);
    }

    /// Open the log view for the selected container and fetch its tail.
    pub async fn open_selected_logs(&mut self) {
        let Some(container) = self.state.selected_container() else {
            return;
        };
        let id = container.id.clone();
        let name = container.name.clone();

        self.state.begin_log_fetch(name);
        let result = self.api.container_logs(&id).await;
        self.state.finish_log_fetch(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(id: &str, name: &str) -> ContainerSummary {
        ContainerSummary {
            id: id.to_string(),
            name: name.to_string(),
            image: "nginx:latest".to_string(),
            state: "running".to_string(),
            ports: vec![],
        }
    }

    fn transport_error() -> ApiError {
        ApiError::Gateway {
            status: 500,
            message: "Docker connection failed".to_string(),
        }
    }

    #[test]
    fn test_starts_loading() {
        let state = AppState::new();
        assert_eq!(state.list, ListFetch::Loading);
        assert_eq!(state.log_view, LogView::Closed);
    }

    #[test]
    fn test_successful_fetch_is_ready() {
        let mut state = AppState::new();
        state.finish_list_fetch(Ok(vec![container("a", "web")]));
        assert_eq!(state.containers().len(), 1);
        assert_eq!(state.selected_container().unwrap().name, "web");
    }

    #[test]
    fn test_failed_fetch_shows_empty_placeholder() {
        let mut state = AppState::new();
        state.finish_list_fetch(Err(transport_error()));
        assert_eq!(state.list, ListFetch::Failed);
        assert!(state.containers().is_empty());
        assert!(state.selected_container().is_none());
    }

    #[test]
    fn test_refresh_reenters_loading() {
        let mut state = AppState::new();
        state.finish_list_fetch(Ok(vec![container("a", "web")]));
        state.begin_list_fetch();
        assert_eq!(state.list, ListFetch::Loading);
    }

    #[test]
    fn test_selection_clamped_after_shrinking_refresh() {
        let mut state = AppState::new();
        state.finish_list_fetch(Ok(vec![
            container("a", "web"),
            container("b", "db"),
            container("c", "cache"),
        ]));
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);

        state.finish_list_fetch(Ok(vec![container("a", "web")]));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = AppState::new();
        state.finish_list_fetch(Ok(vec![container("a", "web"), container("b", "db")]));
        state.select_previous();
        assert_eq!(state.selected, 0);
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_log_view_lifecycle() {
        let mut state = AppState::new();
        state.begin_log_fetch("web".to_string());
        assert!(matches!(state.log_view, LogView::Loading { .. }));

        state.finish_log_fetch(Ok("line 1\nline 2\n".to_string()));
        match &state.log_view {
            LogView::Shown { name, text } => {
                assert_eq!(name, "web");
                assert_eq!(text, "line 1\nline 2\n");
            }
            other => panic!("expected Shown, got {other:?}"),
        }

        state.close_log_view();
        assert_eq!(state.log_view, LogView::Closed);
    }

    #[test]
    fn test_log_fetch_error_shows_placeholder() {
        let mut state = AppState::new();
        state.begin_log_fetch("web".to_string());
        state.finish_log_fetch(Err(transport_error()));
        assert!(matches!(state.log_view, LogView::Failed { .. }));
    }

    #[test]
    fn test_log_result_after_close_is_dropped() {
        let mut state = AppState::new();
        state.begin_log_fetch("web".to_string());
        state.close_log_view();
        state.finish_log_fetch(Ok("late".to_string()));
        assert_eq!(state.log_view, LogView::Closed);
    }

    #[test]
    fn test_log_view_independent_of_list_state() {
        let mut state = AppState::new();
        state.finish_list_fetch(Ok(vec![container("a", "web")]));
        state.begin_log_fetch("web".to_string());
        state.begin_list_fetch();
        assert!(matches!(state.log_view, LogView::Loading { .. }));
    }
}
