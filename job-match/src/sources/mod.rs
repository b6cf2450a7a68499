//! Listing source implementations.
//!
//! Each module provides a struct implementing [`crate::source::ListingSource`].

pub mod hacker_news;

pub use hacker_news::HackerNewsSource;
