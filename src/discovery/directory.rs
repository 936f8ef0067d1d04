//! Two-tier adapter discovery.

use tracing::{debug, error, warn};

use super::adapter::{Adapter, UNKNOWN_INDEX, UNKNOWN_KIND};
use super::parse;
use super::query::{AdapterQuery, AdapterRecord};
use crate::command::CommandRunner;

const NETSH: &str = "netsh";

/// Resolves the canonical set of enabled, connected network adapters.
///
/// Discovery tries the structured system query first because it carries a
/// true friendly name, and degrades to parsing `netsh interface show
/// interface` output when the query source is unavailable or yields
/// nothing usable. Enrichment failures (adapter type, interface index)
/// degrade to sentinel values; partial information is preferred over
/// dropping an adapter.
///
/// [`AdapterDirectory::list`] never fails: total failure of both tiers is
/// reported through the log and ends in an empty list the caller must
/// refuse to proceed on.
#[derive(Debug, Clone)]
pub struct AdapterDirectory<Q, R> {
    query: Q,
    runner: R,
}

impl<Q: AdapterQuery, R: CommandRunner> AdapterDirectory<Q, R> {
    /// Creates a directory over the given structured source and runner.
    pub const fn new(query: Q, runner: R) -> Self {
        Self { query, runner }
    }

    /// Enumerates currently enabled, connected adapters.
    ///
    /// The result reflects one enumeration pass and is valid only until
    /// the next refresh; call again instead of caching across DNS
    /// operations.
    pub async fn list(&self) -> Vec<Adapter> {
        match self.query.records() {
            Ok(records) => {
                let adapters = self.from_records(records).await;
                if !adapters.is_empty() {
                    return adapters;
                }
                warn!("structured adapter query yielded nothing usable, falling back to netsh parsing");
            }
            Err(e) => {
                warn!(error = %e, "structured adapter query failed, falling back to netsh parsing");
            }
        }

        let adapters = self.from_interface_table().await;
        if adapters.is_empty() {
            report_no_adapters();
        }
        adapters
    }

    /// Primary tier: validates raw records and enriches them with a type.
    async fn from_records(&self, records: Vec<AdapterRecord>) -> Vec<Adapter> {
        let mut adapters = Vec::new();
        for record in records {
            if let Some(adapter) = self.adapter_from_record(record).await {
                adapters.push(adapter);
            }
        }
        adapters
    }

    /// Validates one record. Records that are disabled, or missing any
    /// required field, are skipped rather than failing the enumeration.
    async fn adapter_from_record(&self, record: AdapterRecord) -> Option<Adapter> {
        if record.enabled != Some(true) {
            return None;
        }
        let name = record.connection_id.filter(|id| !id.is_empty())?;
        let description = record.description?;
        let index = record.interface_index?;
        let kind = self.lookup_kind(&name).await;
        Some(Adapter::new(name, description, index.to_string(), kind))
    }

    /// Best-effort adapter type via `netsh interface show interface <name>`.
    async fn lookup_kind(&self, name: &str) -> String {
        match self
            .runner
            .run(NETSH, &["interface", "show", "interface", name])
            .await
        {
            Ok(output) => parse::find_field(&output.stdout, "Type")
                .unwrap_or_else(|| UNKNOWN_KIND.to_owned()),
            Err(e) => {
                debug!(adapter = name, error = %e, "adapter type lookup failed");
                UNKNOWN_KIND.to_owned()
            }
        }
    }

    /// Fallback tier: parses `netsh interface show interface` output.
    async fn from_interface_table(&self) -> Vec<Adapter> {
        if !self.runner.is_available(NETSH).await {
            error!("netsh is not invocable; cannot enumerate interfaces");
            return Vec::new();
        }

        let output = match self
            .runner
            .run(NETSH, &["interface", "show", "interface"])
            .await
        {
            Ok(output) => output,
            Err(e) => {
                error!(error = %e, "netsh interface listing failed");
                return Vec::new();
            }
        };

        let mut adapters = Vec::new();
        for row in parse::parse_interface_table(&output.stdout) {
            if !row.is_active() {
                continue;
            }
            let index = self.lookup_index(&row.name).await;
            adapters.push(Adapter::new(row.name.clone(), row.name, index, row.kind));
        }
        adapters
    }

    /// Best-effort numeric index via `netsh interface ipv4 show interfaces`.
    ///
    /// The bare `interface=` token with the value as the following
    /// argument matches what netsh accepts for this query.
    async fn lookup_index(&self, name: &str) -> String {
        match self
            .runner
            .run(
                NETSH,
                &["interface", "ipv4", "show", "interfaces", "interface=", name],
            )
            .await
        {
            Ok(output) => parse::find_field(&output.stdout, "Idx")
                .unwrap_or_else(|| UNKNOWN_INDEX.to_owned()),
            Err(e) => {
                debug!(adapter = name, error = %e, "interface index lookup failed");
                UNKNOWN_INDEX.to_owned()
            }
        }
    }
}

/// Total discovery failure: explain likely causes instead of crashing
/// later on an empty list.
fn report_no_adapters() {
    error!("no active network adapters could be discovered");
    error!(
        "possible causes: not running on Windows, netsh or the adapter \
         query service disabled, or missing administrator privileges"
    );
}
