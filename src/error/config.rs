use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Bind address could not be parsed as a socket address.
    ///
    /// Check the `BIND_ADDR` environment variable; it must be of the form
    /// `host:port`.
    #[error("Invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        /// The value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: std::net::AddrParseError,
    },
}
