//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic. All queries, inserts, updates and deletes go
//! through here.

pub mod beer;
