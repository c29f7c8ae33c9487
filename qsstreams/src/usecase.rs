//! Use case exposing the repository's stream list to presentation code.

use crate::models::Stream;
use crate::repository::{ResultStream, StreamRepository};
use std::sync::Arc;

/// Fetches the stream list; a direct delegation to [`StreamRepository`]
#[derive(Clone)]
pub struct GetStreamsUseCase {
    repository: Arc<dyn StreamRepository>,
}

impl GetStreamsUseCase {
    pub fn new(repository: Arc<dyn StreamRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(&self) -> ResultStream<Vec<Stream>> {
        self.repository.get_streams()
    }
}
