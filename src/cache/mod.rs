//! Article result cache keyed by source identifier.

pub mod result;
pub mod types;


pub use result::ResultCache;
pub use types::{CacheStatus, SLANT_STATUS_HEADER, SLANT_STATUS_HEALTHY};
