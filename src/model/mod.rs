//! Wire types shared by the HTTP API and its documentation.

pub mod api;
pub mod beer;
