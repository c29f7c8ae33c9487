//! Stream catalogue for QuikStream
//!
//! This crate fetches the list of playable videos from the remote JSON
//! endpoint and exposes it to presentation code as a short sequence of
//! [`FetchResult`] states.
//!
//! # Layers
//!
//! - [`StreamClient`]: one HTTP GET, returns the raw [`StreamsResponse`]
//! - [`StreamRepositoryImpl`]: `Loading` then `Success(Vec<Stream>)` or `Error`
//! - [`GetStreamsUseCase`]: seam between domain and presentation
//!
//! # Example
//!
//! ```no_run
//! use futures::StreamExt;
//! use qsstreams::{FetchResult, GetStreamsUseCase, StreamClient, StreamRepositoryImpl};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StreamClient::new()?;
//!     let repository = StreamRepositoryImpl::new(Arc::new(client));
//!     let use_case = GetStreamsUseCase::new(Arc::new(repository));
//!
//!     let mut states = use_case.invoke();
//!     while let Some(state) = states.next().await {
//!         if let FetchResult::Success(streams) = state {
//!             println!("{} streams", streams.len());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config_ext;
pub mod error;
pub mod models;
pub mod repository;
pub mod result;
pub mod usecase;

// Re-exports
pub use client::{ClientBuilder, StreamClient, StreamSource};
pub use config_ext::StreamsConfigExt;
pub use error::{Error, Result};
pub use models::{Stream, StreamResponse, StreamsResponse, AUTHOR_KEY, NAME_KEY, URL_KEY};
pub use repository::{ResultStream, StreamRepository, StreamRepositoryImpl};
pub use result::FetchResult;
pub use usecase::GetStreamsUseCase;
