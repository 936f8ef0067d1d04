//! Tests for the pure helpers behind the session and subcommands.

use regex::Regex;

use dns_switch::config::DnsPreset;
use dns_switch::discovery::Adapter;

use super::{
    MenuChoice, RunError, Selection, filter_adapters, parse_choice, parse_selection,
    resolve_servers,
};

fn presets() -> Vec<DnsPreset> {
    vec![
        DnsPreset {
            name: "Google".to_owned(),
            primary: "8.8.8.8".to_owned(),
            secondary: Some("8.8.4.4".to_owned()),
        },
        DnsPreset {
            name: "Quad9".to_owned(),
            primary: "9.9.9.9".to_owned(),
            secondary: None,
        },
    ]
}

#[test]
fn selection_accepts_listing_positions() {
    assert_eq!(parse_selection("1", 3), Some(Selection::Adapter(0)));
    assert_eq!(parse_selection(" 3 ", 3), Some(Selection::Adapter(2)));
}

#[test]
fn selection_rejects_out_of_range_and_garbage() {
    assert_eq!(parse_selection("0", 3), None);
    assert_eq!(parse_selection("4", 3), None);
    assert_eq!(parse_selection("first", 3), None);
    assert_eq!(parse_selection("", 3), None);
}

#[test]
fn selection_quits_on_q() {
    assert_eq!(parse_selection("q", 3), Some(Selection::Quit));
    assert_eq!(parse_selection("Q", 3), Some(Selection::Quit));
}

#[test]
fn choice_maps_presets_then_fixed_entries() {
    assert_eq!(parse_choice("1", 2), Some(MenuChoice::Preset(0)));
    assert_eq!(parse_choice("2", 2), Some(MenuChoice::Preset(1)));
    assert_eq!(parse_choice("3", 2), Some(MenuChoice::Custom));
    assert_eq!(parse_choice("4", 2), Some(MenuChoice::Reset));
    assert_eq!(parse_choice("5", 2), Some(MenuChoice::Reselect));
    assert_eq!(parse_choice("6", 2), Some(MenuChoice::Quit));
}

#[test]
fn choice_rejects_zero_and_past_the_menu() {
    assert_eq!(parse_choice("0", 2), None);
    assert_eq!(parse_choice("7", 2), None);
    assert_eq!(parse_choice("reset", 2), None);
}

#[test]
fn choice_quits_on_q_and_trims_whitespace() {
    assert_eq!(parse_choice(" q ", 2), Some(MenuChoice::Quit));
    assert_eq!(parse_choice(" 2\n", 2), Some(MenuChoice::Preset(1)));
}

#[test]
fn choice_shifts_fixed_entries_with_the_preset_count() {
    assert_eq!(parse_choice("1", 0), Some(MenuChoice::Custom));
    assert_eq!(parse_choice("4", 0), Some(MenuChoice::Quit));
}

#[test]
fn resolve_servers_matches_preset_names_case_insensitively() {
    let servers = resolve_servers(&presets(), "google", None).unwrap();
    assert_eq!(servers.primary(), "8.8.8.8");
    assert_eq!(servers.secondary(), Some("8.8.4.4"));
}

#[test]
fn resolve_servers_takes_unknown_names_as_addresses() {
    let servers = resolve_servers(&presets(), "1.1.1.1", None).unwrap();
    assert_eq!(servers.primary(), "1.1.1.1");
    assert_eq!(servers.secondary(), None);
}

#[test]
fn resolve_servers_with_secondary_is_always_literal() {
    let servers =
        resolve_servers(&presets(), "208.67.222.222", Some("208.67.220.220".to_owned())).unwrap();
    assert_eq!(servers.primary(), "208.67.222.222");
    assert_eq!(servers.secondary(), Some("208.67.220.220"));
}

#[test]
fn resolve_servers_rejects_a_blank_primary() {
    let result = resolve_servers(&presets(), "  ", None);
    assert!(matches!(result, Err(RunError::Servers(_))));
}

#[test]
fn filter_keeps_only_matching_adapter_names() {
    let adapters = vec![
        Adapter::new("Ethernet", "Ethernet NIC", "12", "Dedicated"),
        Adapter::new("Wi-Fi", "Wireless NIC", "7", "Dedicated"),
    ];
    let filter = Regex::new("^Wi-").unwrap();

    let filtered = filter_adapters(adapters, Some(&filter));

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Wi-Fi");
}

#[test]
fn no_filter_keeps_everything() {
    let adapters = vec![Adapter::new("Ethernet", "Ethernet NIC", "12", "Dedicated")];
    assert_eq!(filter_adapters(adapters, None).len(), 1);
}
