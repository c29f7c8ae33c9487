//! Presentation state of the stream list screen: what is selected and which
//! actions are enabled for the current [`MainUiState`].

use qsstreams::Stream;
use tracing::debug;

use crate::main_state::MainUiState;
use crate::navigation::Route;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainScreenState {
    ui_state: MainUiState,
    selected: Option<Stream>,
}

impl MainScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a new view state. On a non-empty `Success` with nothing
    /// selected, the first stream becomes the selection.
    pub fn apply(&mut self, ui_state: MainUiState) {
        if self.selected.is_none() {
            if let Some(first) = ui_state.streams().first() {
                debug!(name = %first.name, "Auto-selecting first stream");
                self.selected = Some(first.clone());
            }
        }
        self.ui_state = ui_state;
    }

    pub fn ui_state(&self) -> &MainUiState {
        &self.ui_state
    }

    /// Selects `stream` if it belongs to the current list.
    pub fn select(&mut self, stream: &Stream) -> bool {
        if !self.ui_state.streams().contains(stream) {
            return false;
        }
        self.selected = Some(stream.clone());
        true
    }

    pub fn selected(&self) -> Option<&Stream> {
        self.selected.as_ref()
    }

    pub fn streams(&self) -> &[Stream] {
        self.ui_state.streams()
    }

    pub fn fetch_enabled(&self) -> bool {
        !self.ui_state.is_loading() && !self.ui_state.is_success()
    }

    pub fn play_enabled(&self) -> bool {
        self.ui_state.is_success() && self.selected.is_some()
    }

    pub fn retry_enabled(&self) -> bool {
        self.ui_state.is_error()
    }

    /// Route to the playback screen for the selection, when play is enabled.
    pub fn play_route(&self) -> Option<Route> {
        if !self.play_enabled() {
            return None;
        }
        self.selected.as_ref().map(Route::playback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn streams() -> Vec<Stream> {
        vec![
            Stream::new("A", "AuthA", "UrlA"),
            Stream::new("B", "AuthB", "UrlB"),
        ]
    }

    #[test]
    fn test_enablement_per_state() {
        let mut screen = MainScreenState::new();
        assert!(screen.fetch_enabled());
        assert!(!screen.play_enabled());
        assert!(!screen.retry_enabled());

        screen.apply(MainUiState::Loading);
        assert!(!screen.fetch_enabled());
        assert!(!screen.play_enabled());

        screen.apply(MainUiState::Error {
            message: "Oops".into(),
        });
        assert!(screen.fetch_enabled());
        assert!(screen.retry_enabled());
        assert!(!screen.play_enabled());

        screen.apply(MainUiState::Success { streams: streams() });
        assert!(!screen.fetch_enabled());
        assert!(screen.play_enabled());
        assert!(!screen.retry_enabled());
    }

    #[test]
    fn test_first_stream_auto_selected() {
        let mut screen = MainScreenState::new();
        screen.apply(MainUiState::Success { streams: streams() });
        assert_eq!(screen.selected(), Some(&streams()[0]));

        assert!(screen.select(&streams()[1]));
        screen.apply(MainUiState::Success { streams: streams() });
        assert_eq!(screen.selected(), Some(&streams()[1]));
    }

    #[test]
    fn test_empty_success_has_no_selection() {
        let mut screen = MainScreenState::new();
        screen.apply(MainUiState::Success { streams: vec![] });
        assert!(screen.selected().is_none());
        assert!(!screen.play_enabled());
        assert!(screen.play_route().is_none());
    }

    #[test]
    fn test_select_unknown_stream_rejected() {
        let mut screen = MainScreenState::new();
        screen.apply(MainUiState::Success { streams: streams() });
        assert!(!screen.select(&Stream::new("Z", "Nobody", "UrlZ")));
        assert_eq!(screen.selected(), Some(&streams()[0]));
    }

    #[test]
    fn test_play_route_targets_selection() {
        let mut screen = MainScreenState::new();
        screen.apply(MainUiState::Success { streams: streams() });
        assert_eq!(screen.play_route(), Some(Route::playback(&streams()[0])));
    }
}
