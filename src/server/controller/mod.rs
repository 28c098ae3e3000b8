//! HTTP request handlers.
//!
//! Controllers extract and validate request data, convert DTOs to params, call the
//! service layer and convert the results back to DTOs.

pub mod beer;
pub mod extract;
