//! Writing the reconciled list as static artifacts for the browser page.

pub mod publisher;

pub use publisher::{PublishWriter, TIMESTAMP_JS, VERSIONS_JS, VERSIONS_JSON};
