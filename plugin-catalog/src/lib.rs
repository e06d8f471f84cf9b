#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod batch;
pub mod catalog;
pub mod discovery;
pub mod rate_limit;
pub mod resolver;
pub mod runner;
pub mod summary;
pub mod text;

pub use batch::{process_candidates, ResultMap};
pub use catalog::{build_catalog, write_catalog, CatalogEntry, CatalogError};
pub use discovery::{
    aggregate_candidates, CandidateSet, DiscoveryError, RepositoryOwner, RepositoryRecord,
};
pub use rate_limit::{check_search_rate_limit, log_search_rate_limit, RateLimitInfo};
pub use resolver::{parse_metadata, MetadataResolver, PluginMetadata, ResolveError};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{ProcessingResult, RunSummary};
pub use text::strip_color_markup;
