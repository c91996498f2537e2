//! Segment trie URL router.
//!
//! Patterns are `/`-delimited and each segment is literal text, an open
//! parameter `{name}` or a regex-constrained parameter `{name:regex}`.
//! Lookups walk the trie depth-first with backtracking and report either a
//! handler with its path variables or a typed miss.
//!
//! ```
//! use segment_router_rs::{HttpMethod, MatchOutcome, Router};
//!
//! let router = Router::new(None);
//! router.get("/name/{age:[0-9]+}", "age").unwrap();
//! router.seal();
//!
//! match router.find(HttpMethod::Get, "/name/30").unwrap() {
//!     MatchOutcome::Matched { handler, params } => {
//!         assert_eq!(handler, "age");
//!         assert_eq!(params.get("age"), Some("30"));
//!     }
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

pub mod enums;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod readonly;
pub mod router;
pub mod tree;

pub use enums::{HttpMethod, MethodMask, UnknownMethod};
pub use matcher::{Cancellation, MatchOutcome, NeverCancel, PathParams};
pub use readonly::RouterReadOnly;
pub use router::{
    Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError, RouterResult,
};
pub use tree::{RouteInfo, RouteTree, TreeError};
