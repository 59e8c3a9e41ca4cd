// * Network layer: HTTP client, request identity and the fetcher contract

pub mod client;
pub mod errors;
pub mod fetcher;
pub mod identity;

pub use client::FastClient;
pub use errors::NetworkError;
pub use fetcher::{FetchMode, PageFetcher, RawContent};
pub use identity::IdentityProfile;
