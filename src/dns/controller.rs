//! DNS configuration control for a single adapter.

use thiserror::Error;
use tracing::info;

use super::DnsServers;
use crate::command::{CommandError, CommandRunner};

const NETSH: &str = "netsh";

/// Error type for DNS configuration operations.
///
/// Failure is always typed; error text never masquerades as resolver
/// data, so callers can tell the two apart programmatically.
#[derive(Debug, Error)]
pub enum DnsError {
    /// Reading the current resolver settings failed.
    #[error("failed to read DNS settings for '{adapter}': {source}")]
    Read {
        /// The adapter that was queried.
        adapter: String,
        /// Underlying command failure.
        #[source]
        source: CommandError,
    },

    /// Applying a resolver configuration failed.
    #[error("failed to apply DNS settings for '{adapter}': {source}")]
    Apply {
        /// The adapter that was being configured.
        adapter: String,
        /// Underlying command failure.
        #[source]
        source: CommandError,
    },
}

/// Issues netsh DNS commands against one adapter at a time.
///
/// All operations take the adapter `name` produced by discovery. Each is
/// a synchronous one-shot read or write; nothing is cached between calls
/// and no compensating rollback is attempted on failure.
#[derive(Debug, Clone)]
pub struct DnsController<R> {
    runner: R,
}

impl<R: CommandRunner> DnsController<R> {
    /// Creates a controller over the given command runner.
    pub const fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Returns the raw decoded text of `netsh interface ip show dns`.
    ///
    /// The text is display-only diagnostic output and is never
    /// machine-parsed by this component.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::Read`] when the underlying command fails.
    pub async fn current(&self, adapter: &str) -> Result<String, DnsError> {
        let name = format!("name={adapter}");
        self.runner
            .run(NETSH, &["interface", "ip", "show", "dns", &name])
            .await
            .map(|output| output.stdout)
            .map_err(|source| DnsError::Read {
                adapter: adapter.to_owned(),
                source,
            })
    }

    /// Applies a static resolver configuration.
    ///
    /// Issues `set dns source=static` with the primary address and then,
    /// only when a secondary is present, `add dns ... index=2` with the
    /// secondary. The `add` form is required: a second `set` would
    /// overwrite the primary instead of supplementing it. The second
    /// command is not attempted when the first fails.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::Apply`] carrying the first command failure.
    pub async fn set_static(&self, adapter: &str, servers: &DnsServers) -> Result<(), DnsError> {
        let name = format!("name={adapter}");
        let primary = format!("addr={}", servers.primary());
        self.apply(
            adapter,
            &["interface", "ip", "set", "dns", &name, "source=static", &primary],
        )
        .await?;

        if let Some(secondary) = servers.secondary() {
            let addr = format!("addr={secondary}");
            self.apply(
                adapter,
                &["interface", "ip", "add", "dns", &name, &addr, "index=2"],
            )
            .await?;
        }

        info!(adapter, servers = %servers, "static DNS applied");
        Ok(())
    }

    /// Reverts the adapter to DHCP-assigned resolvers.
    ///
    /// Idempotent: repeating the call on an already-dynamic adapter
    /// succeeds and leaves the state unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::Apply`] when the underlying command fails.
    pub async fn reset_dynamic(&self, adapter: &str) -> Result<(), DnsError> {
        let name = format!("name={adapter}");
        self.apply(
            adapter,
            &["interface", "ip", "set", "dns", &name, "source=dhcp"],
        )
        .await?;

        info!(adapter, "DNS reset to dynamic assignment");
        Ok(())
    }

    async fn apply(&self, adapter: &str, args: &[&str]) -> Result<(), DnsError> {
        self.runner
            .run(NETSH, args)
            .await
            .map(|_| ())
            .map_err(|source| DnsError::Apply {
                adapter: adapter.to_owned(),
                source,
            })
    }
}
