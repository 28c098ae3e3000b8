//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! conversion tests and as default values for factory builders.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let beer = fixture::beer::entity();
//!
//! let stout = fixture::beer::entity_builder()
//!     .beer_type("STOUT")
//!     .build();
//! ```

pub mod beer;
