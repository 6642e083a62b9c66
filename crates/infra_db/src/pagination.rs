//! Offset/limit pagination primitives
//!
//! Every list operation takes a `Page`: `skip` records to omit from the
//! front of the key ordering and `limit` records to return at most. Defaults
//! are 0/20 and there is no upper bound on `limit`; a caller may request an
//! entire table.

use serde::Deserialize;

const DEFAULT_LIMIT: i64 = 20;

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Offset/limit window over a stable key ordering
///
/// Deserializes directly from `?skip=&limit=` query parameters; missing
/// parameters fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Page {
    /// Creates a page, clamping negative inputs to zero
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip: skip.max(0),
            limit: limit.max(0),
        }
    }

    /// The OFFSET value to bind, never negative
    pub fn offset(&self) -> i64 {
        self.skip.max(0)
    }

    /// The LIMIT value to bind, never negative
    pub fn limit(&self) -> i64 {
        self.limit.max(0)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}
