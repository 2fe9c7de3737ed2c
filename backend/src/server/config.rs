//! HTTP server configuration object.

use std::net::SocketAddr;

use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration for the given bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided, the server uses database-backed repositories; without
    /// it, in-memory repositories serve the persisted-entity routes.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_starts_without_a_pool() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().expect("valid address");
        let config = ServerConfig::new(addr);
        assert_eq!(config.bind_addr(), addr);
        assert!(config.db_pool.is_none());
    }
}
