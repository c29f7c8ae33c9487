//! Presentation layer of QuikStream.
//!
//! - [`MainViewModel`] turns the stream fetch into a [`MainUiState`]
//! - [`MainScreenState`] tracks the selection and enabled actions
//! - [`Route`] encodes the selected stream into the playback route
//! - [`PlaybackViewModel`] owns the playback session behind that route
//!
//! Nothing here draws anything; a front end renders these states.

pub mod main_screen;
pub mod main_state;
pub mod main_view_model;
pub mod navigation;
pub mod playback_view_model;

pub use main_screen::MainScreenState;
pub use main_state::{MainUiState, UNKNOWN_ERROR_MESSAGE};
pub use main_view_model::MainViewModel;
pub use navigation::{NavArgs, Route};
pub use playback_view_model::PlaybackViewModel;
