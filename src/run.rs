//! Application execution logic.
//!
//! This module dispatches the one-shot subcommands and drives the
//! interactive DNS-switching session.

use std::io::Write;

use regex::Regex;
use thiserror::Error;

use dns_switch::command::SystemRunner;
use dns_switch::config::{Command, ConfigError, DnsPreset, Settings};
use dns_switch::discovery::platform::PlatformQuery;
use dns_switch::discovery::{Adapter, AdapterDirectory};
use dns_switch::dns::{DnsController, DnsError, DnsServers, ServersError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Type alias for the application's adapter directory.
type AppDirectory<'a> = AdapterDirectory<PlatformQuery, &'a SystemRunner>;

/// Type alias for the application's DNS controller.
type AppController<'a> = DnsController<&'a SystemRunner>;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Discovery produced nothing to operate on.
    #[error("no usable network adapters were found")]
    NoAdapters,

    /// A preset could not be converted to a server pair.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The given server addresses were invalid.
    #[error(transparent)]
    Servers(#[from] ServersError),

    /// A DNS read or write failed.
    #[error(transparent)]
    Dns(#[from] DnsError),

    /// Reading interactive input failed.
    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

/// Executes the requested subcommand, or the interactive session when no
/// subcommand was given.
///
/// # Errors
///
/// Returns [`RunError`] when discovery yields nothing, a DNS operation
/// fails in one-shot mode, or interactive input cannot be read. Inside
/// the interactive session, failed DNS operations are reported and the
/// session continues.
///
/// # Coverage Note
///
/// Excluded from coverage: requires netsh and, for the interactive path,
/// a live stdin.
#[cfg(not(tarpaulin_include))]
pub async fn execute(settings: Settings, command: Option<Command>) -> Result<(), RunError> {
    let runner = SystemRunner::new(settings.decode, settings.timeout);
    let directory: AppDirectory<'_> = AdapterDirectory::new(PlatformQuery::new(), &runner);
    let controller: AppController<'_> = DnsController::new(&runner);

    match command {
        Some(Command::List) => {
            let adapters = discover(&directory, settings.match_filter.as_ref()).await?;
            print_adapters(&adapters);
            Ok(())
        }
        Some(Command::Show { adapter }) => {
            let report = controller.current(&adapter).await?;
            println!("{}", report.trim_end());
            Ok(())
        }
        Some(Command::Set {
            adapter,
            primary,
            secondary,
        }) => {
            let servers = resolve_servers(&settings.presets, &primary, secondary)?;
            controller.set_static(&adapter, &servers).await?;
            println!("DNS for '{adapter}' set to {servers}");
            Ok(())
        }
        Some(Command::Reset { adapter }) => {
            controller.reset_dynamic(&adapter).await?;
            println!("DNS for '{adapter}' reset to automatic assignment");
            Ok(())
        }
        // `init` never reaches the runtime; main handles it up front.
        Some(Command::Init { .. }) => Ok(()),
        None => interactive(&settings, &directory, &controller).await,
    }
}

/// Enumerates adapters and applies the optional name filter.
///
/// # Errors
///
/// Returns [`RunError::NoAdapters`] when nothing survives discovery and
/// filtering; DNS operations must not proceed against an empty list.
async fn discover(
    directory: &AppDirectory<'_>,
    filter: Option<&Regex>,
) -> Result<Vec<Adapter>, RunError> {
    let adapters = filter_adapters(directory.list().await, filter);
    if adapters.is_empty() {
        return Err(RunError::NoAdapters);
    }
    Ok(adapters)
}

/// Keeps only adapters whose name matches the filter, if one is set.
fn filter_adapters(adapters: Vec<Adapter>, filter: Option<&Regex>) -> Vec<Adapter> {
    match filter {
        Some(filter) => adapters
            .into_iter()
            .filter(|adapter| filter.is_match(&adapter.name))
            .collect(),
        None => adapters,
    }
}

/// Prints the numbered adapter listing.
fn print_adapters(adapters: &[Adapter]) {
    println!("Active network adapters:");
    for (position, adapter) in adapters.iter().enumerate() {
        println!("  {}. {adapter}", position + 1);
    }
}

/// Resolves the `set` arguments to a server pair.
///
/// A lone primary that matches a preset name (case-insensitively) selects
/// that preset; anything else is taken as a literal address. An explicit
/// secondary always forces the literal interpretation.
fn resolve_servers(
    presets: &[DnsPreset],
    primary: &str,
    secondary: Option<String>,
) -> Result<DnsServers, RunError> {
    if secondary.is_none() {
        if let Some(preset) = presets
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(primary))
        {
            return Ok(preset.servers()?);
        }
    }
    Ok(DnsServers::new(primary, secondary)?)
}

/// One adapter-listing prompt outcome.
#[derive(Debug, PartialEq, Eq)]
enum Selection {
    /// Zero-based position into the printed listing.
    Adapter(usize),
    Quit,
}

/// Parses an adapter selection. Listing positions are one-based as
/// printed; `q` quits.
fn parse_selection(input: &str, count: usize) -> Option<Selection> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Some(Selection::Quit);
    }
    let number: usize = input.parse().ok()?;
    (1..=count)
        .contains(&number)
        .then(|| Selection::Adapter(number - 1))
}

/// One menu prompt outcome.
#[derive(Debug, PartialEq, Eq)]
enum MenuChoice {
    /// Zero-based position into the preset table.
    Preset(usize),
    Custom,
    Reset,
    Reselect,
    Quit,
}

/// Parses a menu choice. Entries `1..=preset_count` select a preset; the
/// fixed entries follow in menu order; `q` quits.
fn parse_choice(input: &str, preset_count: usize) -> Option<MenuChoice> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Some(MenuChoice::Quit);
    }
    let number: usize = input.parse().ok()?;
    if number == 0 {
        return None;
    }
    if number <= preset_count {
        return Some(MenuChoice::Preset(number - 1));
    }
    match number - preset_count {
        1 => Some(MenuChoice::Custom),
        2 => Some(MenuChoice::Reset),
        3 => Some(MenuChoice::Reselect),
        4 => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Outcome of one adapter's menu loop.
#[derive(Debug, PartialEq, Eq)]
enum SessionOutcome {
    Reselect,
    Quit,
}

/// Runs the interactive session: pick an adapter, then loop on the menu
/// until the user reselects or quits.
///
/// Excluded from coverage - requires live stdin and netsh.
#[cfg(not(tarpaulin_include))]
async fn interactive(
    settings: &Settings,
    directory: &AppDirectory<'_>,
    controller: &AppController<'_>,
) -> Result<(), RunError> {
    println!("dns-switch interactive session (q quits at any prompt)");

    loop {
        // Re-enumerate each round; the adapter set is valid only until
        // the next refresh.
        let adapters = discover(directory, settings.match_filter.as_ref()).await?;
        print_adapters(&adapters);

        let Some(adapter) = pick_adapter(&adapters)? else {
            return Ok(());
        };
        let adapter = adapter.clone();

        if adapter_menu(settings, controller, &adapter).await? == SessionOutcome::Quit {
            return Ok(());
        }
    }
}

/// Menu loop for one selected adapter.
///
/// DNS operation failures are printed and the loop continues; only input
/// failures end the session.
///
/// Excluded from coverage - requires live stdin and netsh.
#[cfg(not(tarpaulin_include))]
async fn adapter_menu(
    settings: &Settings,
    controller: &AppController<'_>,
    adapter: &Adapter,
) -> Result<SessionOutcome, RunError> {
    loop {
        show_current(controller, &adapter.name).await;
        print_menu(&adapter.name, &settings.presets);

        let line = prompt("Choice: ")?;
        match parse_choice(&line, settings.presets.len()) {
            Some(MenuChoice::Preset(position)) => {
                let servers = settings.presets[position].servers()?;
                apply_static(controller, &adapter.name, &servers).await;
            }
            Some(MenuChoice::Custom) => custom_entry(controller, &adapter.name).await?,
            Some(MenuChoice::Reset) => match controller.reset_dynamic(&adapter.name).await {
                Ok(()) => println!("DNS reset to automatic assignment."),
                Err(e) => eprintln!("Error: {e}"),
            },
            Some(MenuChoice::Reselect) => return Ok(SessionOutcome::Reselect),
            Some(MenuChoice::Quit) => return Ok(SessionOutcome::Quit),
            None => println!("Unrecognized choice."),
        }
    }
}

/// Shows the adapter's current DNS settings, as reported by netsh.
///
/// Excluded from coverage - requires netsh.
#[cfg(not(tarpaulin_include))]
async fn show_current(controller: &AppController<'_>, name: &str) {
    match controller.current(name).await {
        Ok(report) => println!("\n{}", report.trim_end()),
        Err(e) => eprintln!("Error: {e}"),
    }
}

/// Prints the menu for one adapter: presets first, fixed entries after.
fn print_menu(name: &str, presets: &[DnsPreset]) {
    println!("\nOptions for '{name}':");
    for (position, preset) in presets.iter().enumerate() {
        match preset.secondary.as_deref() {
            Some(secondary) => println!(
                "  {}. {} ({}, {secondary})",
                position + 1,
                preset.name,
                preset.primary
            ),
            None => println!("  {}. {} ({})", position + 1, preset.name, preset.primary),
        }
    }
    let base = presets.len();
    println!("  {}. Custom servers", base + 1);
    println!("  {}. Reset to automatic (DHCP)", base + 2);
    println!("  {}. Choose another adapter", base + 3);
    println!("  {}. Quit", base + 4);
}

/// Prompts for custom server addresses and applies them.
///
/// Excluded from coverage - requires live stdin and netsh.
#[cfg(not(tarpaulin_include))]
async fn custom_entry(controller: &AppController<'_>, name: &str) -> Result<(), RunError> {
    let primary = prompt("Primary DNS server (blank to cancel): ")?;
    if primary.is_empty() {
        return Ok(());
    }
    let secondary = prompt("Secondary DNS server (blank for none): ")?;
    let secondary = (!secondary.is_empty()).then_some(secondary);

    match DnsServers::new(primary, secondary) {
        Ok(servers) => apply_static(controller, name, &servers).await,
        Err(e) => println!("Invalid servers: {e}"),
    }
    Ok(())
}

/// Applies a static configuration, reporting failure without ending the
/// session.
///
/// Excluded from coverage - requires netsh.
#[cfg(not(tarpaulin_include))]
async fn apply_static(controller: &AppController<'_>, name: &str, servers: &DnsServers) {
    match controller.set_static(name, servers).await {
        Ok(()) => println!("DNS set to {servers}."),
        Err(e) => eprintln!("Error: {e}"),
    }
}

/// Prompts for an adapter selection until the input is usable.
///
/// Excluded from coverage - requires live stdin.
#[cfg(not(tarpaulin_include))]
fn pick_adapter(adapters: &[Adapter]) -> Result<Option<&Adapter>, RunError> {
    loop {
        let line = prompt("Select an adapter (number, q to quit): ")?;
        match parse_selection(&line, adapters.len()) {
            Some(Selection::Adapter(position)) => return Ok(Some(&adapters[position])),
            Some(Selection::Quit) => return Ok(None),
            None => println!("Unrecognized selection."),
        }
    }
}

/// Prints a prompt and reads one trimmed line from stdin.
///
/// Excluded from coverage - requires live stdin.
#[cfg(not(tarpaulin_include))]
fn prompt(message: &str) -> Result<String, RunError> {
    print!("{message}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    let read = std::io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input stream closed",
        )
        .into());
    }
    Ok(line.trim().to_owned())
}
