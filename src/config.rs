//! Runtime configuration for the qbox.
//!
//! The API endpoint selection used to live in a pair of process-wide
//! globals. It is now an owned value constructed at startup and handed to
//! whatever component talks to the server.

use heapless::String;

/// Longest endpoint (hostname or URL) the box will store.
pub const MAX_ENDPOINT_LEN: usize = 64;

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    EndpointTooLong,
}

pub type Result<T> = core::result::Result<T, ConfigError>;

/// Remote API selection: the active endpoint slot and where it points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    addr: u8,
    endpoint: String<MAX_ENDPOINT_LEN>,
}

impl ApiConfig {
    /// Slot 0, no endpoint stored yet.
    pub fn new() -> Self {
        Self {
            addr: 0,
            endpoint: String::new(),
        }
    }

    /// Active endpoint slot.
    pub fn addr(&self) -> u8 {
        self.addr
    }

    pub fn set_addr(&mut self, addr: u8) {
        self.addr = addr;
    }

    /// The stored endpoint, if one has been set.
    pub fn endpoint(&self) -> Option<&str> {
        if self.endpoint.is_empty() {
            None
        } else {
            Some(self.endpoint.as_str())
        }
    }

    /// Stores a new endpoint. On overflow the previous value is kept.
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        if endpoint.len() > MAX_ENDPOINT_LEN {
            return Err(ConfigError::EndpointTooLong);
        }
        self.endpoint.clear();
        self.endpoint
            .push_str(endpoint)
            .map_err(|_| ConfigError::EndpointTooLong)?;
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}
