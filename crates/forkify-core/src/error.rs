//! Error types for the Forkify core library.

/// Errors that can occur while searching for or loading recipes.
///
/// Shopping-list and likes operations never fail: they are total functions
/// that treat unknown ids as no-ops. Every variant here comes from talking
/// to the remote recipe API or from loading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A search request could not be completed.
    #[error("Search failed for '{query}': {message}")]
    Search {
        /// Query that was being searched
        query: String,
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A recipe could not be fetched.
    #[error("Fetch failed for recipe {id}: {message}")]
    Fetch {
        /// Recipe id that was being fetched
        id: String,
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The API reported that the recipe does not exist.
    #[error("Recipe not found: {id}")]
    NotFound {
        /// Recipe id that was not found
        id: String,
    },

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// What was being requested
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// User input was rejected
    #[error("Validation error: {message}")]
    Validation {
        /// Field or aspect that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for Forkify operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is retryable.
    ///
    /// Network-level search and fetch failures, server errors (5xx) and
    /// rate limiting (429) are transient. A missing recipe or a body that
    /// does not decode will fail the same way next time.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Search { .. } => true,
            Error::Fetch { .. } => true,
            Error::Http { status, .. } => *status >= 500 || *status == 429,
            Error::NotFound { .. } => false,
            Error::Serialization(_) => false,
            Error::Validation { .. } => false,
            Error::Config { .. } => false,
        }
    }

    /// Creates a new search error with a message.
    pub fn search<Q, M>(query: Q, message: M) -> Self
    where
        Q: Into<String>,
        M: Into<String>,
    {
        Error::Search {
            query: query.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new search error with a message and source error.
    pub fn search_with_source<Q, M, E>(query: Q, message: M, source: E) -> Self
    where
        Q: Into<String>,
        M: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Search {
            query: query.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new fetch error with a message.
    pub fn fetch<I, M>(id: I, message: M) -> Self
    where
        I: Into<String>,
        M: Into<String>,
    {
        Error::Fetch {
            id: id.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new fetch error with a message and source error.
    pub fn fetch_with_source<I, M, E>(id: I, message: M, source: E) -> Self
    where
        I: Into<String>,
        M: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Fetch {
            id: id.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a not-found error for a recipe id.
    pub fn not_found<I: Into<String>>(id: I) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Creates an HTTP status error.
    pub fn http<M: Into<String>>(status: u16, message: M) -> Self {
        Error::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
