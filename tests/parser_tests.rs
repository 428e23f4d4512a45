mod common;

use common::{summary_output, summary_row, wlan_output};
use wlc_bssid_inventory::parser::{
    parse_ap_summary, parse_wlan_table, FieldSplit, IndexedRowRecognizer, RadioBand,
    RowRecognizer, SummaryRowRecognizer, TableLayout, WlanBinding,
};
use wlc_bssid_inventory::utils::error::CollectError;

#[test]
fn test_summary_preserves_discovery_order() {
    let aps = [("AP-C", "Hall"), ("AP-A", "Lab"), ("AP-B", "Roof")];

    let dir = parse_ap_summary(&summary_output(&aps)).unwrap();

    assert_eq!(dir.len(), 3);
    let names: Vec<&str> = dir.names().iter().map(String::as_str).collect();
    assert_eq!(names, vec!["AP-C", "AP-A", "AP-B"]);
    assert_eq!(dir.location("AP-A"), Some("Lab"));
    assert_eq!(dir.location("AP-Z"), None);
}

#[test]
fn test_summary_duplicate_keeps_first_position() {
    let text = summary_output(&[("AP1", "Old"), ("AP2", "Lab"), ("AP1", "New")]);

    let dir = parse_ap_summary(&text).unwrap();

    assert_eq!(dir.names(), &["AP1".to_string(), "AP2".to_string()]);
    assert_eq!(dir.location("AP1"), Some("New"));
}

#[test]
fn test_summary_rejects_wrapped_row() {
    // A long name pushed onto its own line loses the column arrangement
    let text = format!(
        "AP-with-a-very-long-name-that-wraps\n{}\n",
        summary_row("AP2", "Lab")
    );

    let dir = parse_ap_summary(&text).unwrap();

    assert_eq!(dir.names(), &["AP2".to_string()]);
}

#[test]
fn test_summary_banner_only_is_empty() {
    let result = parse_ap_summary(&summary_output(&[]));
    assert!(matches!(result, Err(CollectError::EmptyDirectory)));
}

#[test]
fn test_summary_concrete_row() {
    let dir = parse_ap_summary("AP1  0  x  y  Floor1  z  w  0  [ok]").unwrap();
    assert_eq!(dir.len(), 1);
    assert_eq!(dir.location("AP1"), Some("Floor1"));
}

#[test]
fn test_wlan_table_from_fixture() {
    let bindings = parse_wlan_table(&wlan_output("AP1", RadioBand::Dot11A, 3));

    let interfaces: Vec<&str> = bindings.iter().map(|b| b.interface_name.as_str()).collect();
    assert_eq!(interfaces, vec!["wlan-1", "wlan-2", "wlan-3"]);
}

#[test]
fn test_wlan_table_counts_only_full_rows() {
    let text = "\
WLAN ID   Interface   BSSID
-------   ---------   -----
1         mgmt        00:11:22:33:44:01
2         lonely
3         guest       00:11:22:33:44:03
 4        indented    00:11:22:33:44:04
Total WLANs: 3
";

    let bindings = parse_wlan_table(text);

    assert_eq!(
        bindings,
        vec![
            WlanBinding::new("mgmt", "00:11:22:33:44:01"),
            WlanBinding::new("guest", "00:11:22:33:44:03"),
        ]
    );
}

#[test]
fn test_wlan_table_empty_output() {
    assert!(parse_wlan_table("").is_empty());
}

#[test]
fn test_recognizers_are_independent_of_splitting() {
    let line = "1   guest net   00:11:22:33:44:55";

    assert!(IndexedRowRecognizer.recognizes(line));
    assert!(!SummaryRowRecognizer.recognizes(line));
    assert_eq!(FieldSplit::Columns.split(line).len(), 3);
    assert_eq!(FieldSplit::Tokens.split(line).len(), 4);
}

#[test]
fn test_layout_with_custom_recognizer() {
    let layout = TableLayout::new(|line: &str| line.starts_with("AP"), FieldSplit::Tokens, 2);

    let rows: Vec<Vec<&str>> = layout.rows("AP1 up\nAP2\nxx yy\n").collect();

    assert_eq!(rows, vec![vec!["AP1", "up"]]);
}
