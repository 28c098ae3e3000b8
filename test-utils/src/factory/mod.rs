//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let beer = factory::create_beer(&db).await?;
//!
//!     // Customize with the builder
//!     let empty = factory::beer::BeerFactory::new(&db)
//!         .name("Brahma Chopp")
//!         .quantity(0)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `beer` - Create beer entities
//! - `helpers` - Shared counter for unique test values

pub mod beer;
pub mod helpers;

pub use beer::create_beer;
