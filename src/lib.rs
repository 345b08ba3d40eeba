//! Minification size estimation for CSS and JavaScript
//!
//! Entry points:
//!
//! - [`estimator`] holds the CSS and JavaScript scanners that count the
//!   characters a minifier would keep.
//! - [`language`] maps file extensions and names to a scanner.
//! - [`analysis`], [`tools`] and [`handler`] expose the estimators as MCP tools.

pub mod analysis;
pub mod estimator;
pub mod handler;
pub mod language;
pub mod tools;

pub use estimator::{compute_css_token_length, compute_js_token_length};
