//! Integration tests for consoles bound against style tables.

use chromatic::{
    installed, is_valid_level_option, Arg, Console, ConsoleOptions, Error, LevelOption,
    MemorySink, StreamSelector, StyleOptions, StyleTable,
};
use serde_json::json;
use serial_test::serial;

struct Captured {
    console: Console,
    out: MemorySink,
    err: MemorySink,
}

fn build(table: &StyleTable, options: ConsoleOptions) -> Captured {
    let out = MemorySink::new();
    let err = MemorySink::new();
    let console = Console::new(table, options.stdout(out.clone()).stderr(err.clone())).unwrap();
    Captured { console, out, err }
}

#[test]
fn test_levels_route_to_streams() {
    let captured = build(
        &StyleTable::new(),
        ConsoleOptions::from_value(&json!({
            "levels": {
                "error": ["err", "red"],
                "success": ["out", "bright.green"],
                "trace": null
            }
        }))
        .unwrap(),
    );

    captured.console.error(&[Arg::from("failed")]).unwrap();
    captured.console.emit("success", &[Arg::from("ok")]).unwrap();
    captured.console.emit("trace", &[Arg::from("raw")]).unwrap();

    assert_eq!(
        captured.err.lines(),
        vec!["\u{1b}[38;2;255;0;0mfailed\u{1b}[0m".to_string()]
    );
    assert_eq!(
        captured.out.lines(),
        vec![
            "\u{1b}[1m\u{1b}[38;2;0;128;0mok\u{1b}[0m\u{1b}[0m".to_string(),
            "raw".to_string(),
        ]
    );
}

#[test]
fn test_configured_levels_replace_defaults() {
    let captured = build(
        &StyleTable::new(),
        ConsoleOptions::from_value(&json!({ "levels": { "success": "green" } })).unwrap(),
    );

    assert!(captured.console.method("success").is_some());
    assert!(captured.console.method("error").is_none());

    // Unbound levels are written unstyled; error and warn keep the err stream.
    captured.console.error(&[Arg::from("boom")]).unwrap();
    captured.console.warn(&[Arg::from("careful")]).unwrap();
    captured.console.info(&[Arg::from("plain")]).unwrap();
    assert_eq!(
        captured.err.lines(),
        vec!["boom".to_string(), "careful".to_string()]
    );
    assert_eq!(captured.out.lines(), vec!["plain".to_string()]);
}

#[test]
fn test_level_styles_need_included_colors() {
    let options = ConsoleOptions::default().level("note", LevelOption::styled("bright.orange"));

    let err = Console::new(&StyleTable::new(), options.clone()).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownStyleTag {
            tag: "orange".to_string()
        }
    );

    let table = StyleTable::build(&StyleOptions::default().include(["orange"])).unwrap();
    let captured = build(&table, options);
    captured.console.emit("note", &[Arg::from("n")]).unwrap();
    assert_eq!(
        captured.out.lines(),
        vec!["\u{1b}[1m\u{1b}[38;2;255;165;0mn\u{1b}[0m\u{1b}[0m".to_string()]
    );
}

#[test]
fn test_mixed_arguments_in_one_line() {
    let captured = build(&StyleTable::new(), ConsoleOptions::default());
    let retries = 3;
    let hosts = ["a", "b"];

    captured
        .console
        .warn(&[
            Arg::from("retrying"),
            Arg::value(&retries),
            Arg::from("times on"),
            Arg::value(&hosts),
        ])
        .unwrap();

    assert_eq!(
        captured.out.lines(),
        vec![
            "\u{1b}[1m\u{1b}[38;2;255;255;0mretrying\u{1b}[0m\u{1b}[0m 3 \u{1b}[1m\u{1b}[38;2;255;255;0mtimes on\u{1b}[0m\u{1b}[0m [\"a\", \"b\"]"
                .to_string()
        ]
    );
}

#[test]
fn test_level_option_predicate() {
    assert!(is_valid_level_option(&json!(["err", "red"])));
    assert!(is_valid_level_option(&json!(null)));
    assert!(!is_valid_level_option(&json!(["nope", "red"])));
    assert!(!is_valid_level_option(&json!(42)));
}

#[test]
fn test_method_streams() {
    let captured = build(&StyleTable::new(), ConsoleOptions::default());
    let streams: Vec<(&str, StreamSelector)> = captured
        .console
        .methods()
        .iter()
        .map(|method| (method.name(), method.stream()))
        .collect();

    assert_eq!(
        streams,
        vec![
            ("error", StreamSelector::Err),
            ("warn", StreamSelector::Out),
            ("info", StreamSelector::Out),
            ("log", StreamSelector::Out),
            ("debug", StreamSelector::Out),
        ]
    );
}

#[test]
#[serial]
fn test_install_is_explicit() {
    let first = build(
        &StyleTable::new(),
        ConsoleOptions::default().levels([("first", LevelOption::Plain)]),
    );
    first.console.install();
    assert!(installed().unwrap().method("first").is_some());

    let second = build(
        &StyleTable::new(),
        ConsoleOptions::default().levels([("second", LevelOption::Plain)]),
    );
    assert!(installed().unwrap().method("first").is_some());

    second.console.install();
    let global = installed().unwrap();
    assert!(global.method("second").is_some());
    assert!(global.method("first").is_none());

    global.emit("second", &[Arg::from("via global")]).unwrap();
    assert_eq!(second.out.lines(), vec!["via global".to_string()]);
}
