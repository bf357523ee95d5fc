//! Free-text query parsing for past-paper search.
//!
//! Students type queries like `phy u1 jan 24` or `p1jan21`. This crate turns them into
//! structured filters using fixed alias tables, without any knowledge of which papers
//! actually exist:
//!
//! - **Subjects**: `phy`, `chem`, `maths`, ... resolve to canonical subject names
//! - **Units**: `u1`, `p2`, `fp1`, ... resolve within the detected subject
//! - **Sessions**: `jan`, `jun`, `oct`, ... resolve to full month names
//! - **Years**: `24` or `2024`
//!
//! It also provides the normalization and session-equivalence rules the search engine
//! uses when comparing queries against catalog entries.
//!
//! # Example
//!
//! ```
//! use pastpapers_query::{get_equivalent_sessions, parse_search_query};
//!
//! let parsed = parse_search_query("chem u2 may 23");
//! assert_eq!(parsed.subject.as_deref(), Some("chemistry"));
//! assert_eq!(parsed.year, Some(2023));
//! assert!(get_equivalent_sessions("may").contains(&"june".to_string()));
//! ```

#![warn(missing_docs)]

pub mod aliases;
mod normalize;
mod parser;
mod sessions;

pub use normalize::normalize_search_term;
pub use parser::{DEFAULT_MAX_YEAR, MIN_YEAR, ParsedQuery, QueryParser, parse_search_query};
pub use sessions::{get_equivalent_sessions, sessions_equivalent};
