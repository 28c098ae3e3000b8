use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored beer type is not one of the known names
    ///
    /// Means the `type` column was written by something other than this
    /// application. Results in a 500 Internal Server Error with a generic
    /// message returned to client.
    #[error("Failed to parse beer type from stored value '{value}'")]
    ParseBeerType {
        /// The stored value that failed to parse
        value: String,
    },
}
