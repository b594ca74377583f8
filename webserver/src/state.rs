//! Webserver state management

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use protocol::{Catalogs, HtmlRenderer};

/// State shared by every request handler
pub struct WebServerState {
    pub bind_address: SocketAddr,

    /// Catalogs loaded once at startup
    pub catalogs: Catalogs,

    pub renderer: HtmlRenderer,

    protocols_generated: AtomicU64,
    encyclopedia_lookups: AtomicU64,
    server_start_time: Instant,
}

impl WebServerState {
    pub fn new(bind_address: SocketAddr, catalogs: Catalogs) -> Self {
        Self {
            bind_address,
            catalogs,
            renderer: HtmlRenderer::new(),
            protocols_generated: AtomicU64::new(0),
            encyclopedia_lookups: AtomicU64::new(0),
            server_start_time: Instant::now(),
        }
    }

    pub fn record_protocol(&self) -> u64 {
        self.protocols_generated.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn record_lookup(&self) -> u64 {
        self.encyclopedia_lookups.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn protocols_generated(&self) -> u64 {
        self.protocols_generated.load(Ordering::Relaxed)
    }

    pub fn encyclopedia_lookups(&self) -> u64 {
        self.encyclopedia_lookups.load(Ordering::Relaxed)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::{ReferenceCatalog, SpeciesCatalog};

    #[test]
    fn test_counters_start_at_zero_and_increment() {
        let state = WebServerState::new(
            "127.0.0.1:8000".parse().unwrap(),
            Catalogs::new(SpeciesCatalog::fallback(), ReferenceCatalog::unavailable()),
        );
        assert_eq!(state.protocols_generated(), 0);
        assert_eq!(state.record_protocol(), 1);
        assert_eq!(state.record_protocol(), 2);
        assert_eq!(state.record_lookup(), 1);
        assert_eq!(state.encyclopedia_lookups(), 1);
        assert!(state.uptime_seconds() < 5);
    }
}
