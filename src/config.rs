use std::net::SocketAddr;

/// Database file, relative to the working directory.
pub const DATABASE_URL: &str = "sqlite://./courses.db";
pub const PORT: u16 = 8000;

/// Fixed server settings. Nothing here is read from flags or the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DATABASE_URL.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], PORT)),
        }
    }
}
