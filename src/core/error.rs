use thiserror::Error;

/// Failure talking to the billing API.
///
/// Every variant is terminal for the customer it occurred on; the batch
/// moves on to the next customer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Connection, TLS, or timeout failure before a status was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a status of 400 or above.
    #[error("API request failed with status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, if the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Terminal failure for a single customer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CustomerError {
    /// No remote customer matches the email.
    #[error("Customer not found with email {email}")]
    NotFound {
        /// The email that was looked up.
        email: String,
    },

    /// The lookup request failed.
    #[error("lookup failed: {0}")]
    Lookup(ApiError),

    /// The update request failed.
    #[error("update failed: {0}")]
    Update(ApiError),
}

impl CustomerError {
    /// The underlying API error, unless the customer simply was not found.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Lookup(e) | Self::Update(e) => Some(e),
            Self::NotFound { .. } => None,
        }
    }
}

/// Errors that abort a whole run rather than a single customer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VatSyncError {
    /// Reading input or writing the outcome log failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The customer input could not be parsed.
    #[error("invalid customer input: {0}")]
    Input(String),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The API client could not be constructed.
    #[error(transparent)]
    Api(#[from] ApiError),
}
