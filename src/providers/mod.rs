//! Provider endpoints: where the list comes from, how each provider is asked
//! for its API version, and a reachability probe for list maintenance.

pub mod check;
pub mod fetcher;
pub mod source;
pub mod types;

pub use check::check_providers;
pub use fetcher::ProviderVersionFetcher;
pub use source::load_providers;
pub use types::{ProviderEndpoint, ProviderVersion};
