/// Errors from the remote source.
///
/// Any of these aborts a bulk listing fetch. Homeworld lookups swallow the
/// network-class variants and only surface [`RemoteFetchError::InvalidReference`].
#[derive(Debug, thiserror::Error)]
pub enum RemoteFetchError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote source answered with a non-2xx status code.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body was not the JSON shape we expected.
    #[error("Unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A resource reference that cannot be turned into a request URL.
    #[error("Invalid resource reference '{0}'")]
    InvalidReference(String),

    /// Fetching a single character by id failed.
    #[error("Failed to fetch character {id}: {source}")]
    Character {
        id: i64,
        #[source]
        source: Box<RemoteFetchError>,
    },
}
