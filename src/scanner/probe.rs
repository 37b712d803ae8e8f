//! TCP connect probe.
//!
//! Completes a TCP handshake and closes the connection straight away.
//! No application data is sent or read.

use crate::types::Port;
use async_trait::async_trait;
use std::io;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

/// Decides whether a single port on the target accepts connections.
///
/// The scanner drives every port through a shared prober, so
/// implementations must be safe to call from many workers at once.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Return `true` only if the port is reachable.
    async fn probe(&self, port: Port) -> bool;
}

/// Connect-scan prober backed by the operating system's socket API.
///
/// Every failure (refused, unreachable, name resolution, timeout) reads
/// as a closed port.
#[derive(Debug, Clone)]
pub struct TcpConnectProber {
    address: String,
    timeout: Duration,
}

impl TcpConnectProber {
    /// Create a prober for `address` (IP literal or host name).
    ///
    /// A zero timeout is replaced by one millisecond so a connect can
    /// never wait without bound.
    pub fn new(address: impl Into<String>, timeout: Duration) -> Self {
        Self {
            address: address.into(),
            timeout: timeout.max(Duration::from_millis(1)),
        }
    }

    /// Target address as given.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Connect timeout applied to each probe.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn attempt_connect(&self, port: Port) -> io::Result<TcpStream> {
        // Name resolution happens inside connect and shares the deadline.
        match timeout(
            self.timeout,
            TcpStream::connect((self.address.as_str(), port.as_u16())),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(io::ErrorKind::TimedOut.into()),
        }
    }
}

#[async_trait]
impl Prober for TcpConnectProber {
    async fn probe(&self, port: Port) -> bool {
        match self.attempt_connect(port).await {
            Ok(stream) => {
                drop(stream);
                true
            }
            Err(e) => {
                trace!(address = %self.address, %port, error = %e, "probe failed");
                false
            }
        }
    }
}
