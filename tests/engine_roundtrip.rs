#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Round-trip and stability properties of the engine.
//!
//! For every valid document D: `parse(write(D))` preserves section order,
//! key order, and literal values, and `write(parse(write(D)))` equals
//! `write(D)` byte for byte.

use inifmt::ini::{Interpolation, Options, parse, parse_default, write};

/// A spread of valid inputs covering the structural features the round-trip
/// contract has to preserve.
const CORPUS: &[&str] = &[
    "",
    "[server]\nhost = localhost\nport = 8080\n",
    "root = /var\n[a]\nk = 1\n",
    "[DEFAULT]\nroot = /var\n\n[x]\npath = %(root)s/data\n",
    "[multi]\nk = first\n  second\n\n  fourth\n",
    "[a]\nk=1\n[b]\nk=2\n[c]\nk=3\n",
    "; comment\n[s]\n# another\nk : v\n",
    "[s]\nempty =\nfull = x\n",
];

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn parse_write_parse_preserves_structure() {
    for text in CORPUS {
        let doc = parse_default(text).expect("corpus entry parses");
        let reparsed = parse_default(&write(&doc)).expect("own output parses");
        assert_eq!(
            reparsed.sections(),
            doc.sections(),
            "section order changed for {text:?}"
        );
        for name in doc.sections() {
            let original: Vec<(String, String)> = doc
                .section(name)
                .expect("section exists")
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            let round_tripped: Vec<(String, String)> = reparsed
                .section(name)
                .expect("section survives")
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            assert_eq!(round_tripped, original, "pairs changed in [{name}] for {text:?}");
        }
        assert_eq!(reparsed, doc);
    }
}

#[test]
fn write_parse_write_is_stable() {
    for text in CORPUS {
        let once = write(&parse_default(text).expect("corpus entry parses"));
        let twice = write(&parse_default(&once).expect("own output parses"));
        assert_eq!(twice, once, "serialization not stable for {text:?}");
    }
}

#[test]
fn mutations_survive_a_round_trip() {
    let mut doc = parse_default("[server]\nhost = localhost\n").expect("valid");
    doc.set("server", "port", "8080").expect("append");
    doc.add_section("client").expect("fresh section");
    doc.set("client", "retries", "3").expect("append");
    doc.set("DEFAULT", "timeout", "30").expect("default key");
    doc.remove_key("server", "host").expect("section exists");

    let reparsed = parse_default(&write(&doc)).expect("own output parses");
    assert_eq!(reparsed.sections(), ["server", "client"]);
    assert_eq!(reparsed.get("server", "port").unwrap(), "8080");
    assert_eq!(reparsed.get("client", "retries").unwrap(), "3");
    assert_eq!(reparsed.get("client", "timeout").unwrap(), "30");
    assert!(reparsed.get_raw("server", "host").is_err());
}

#[test]
fn inheritance_works_through_the_full_pipeline() {
    let text = "[DEFAULT]\nroot = /var\n[x]\npath = %(root)s/data\n";
    let reparsed = parse_default(&write(&parse_default(text).expect("valid"))).expect("output");
    assert_eq!(reparsed.get("x", "path").unwrap(), "/var/data");
    assert_eq!(
        reparsed.get_raw("x", "path").unwrap(),
        "%(root)s/data",
        "the stored value must keep its placeholder"
    );
}

#[test]
fn extended_interpolation_round_trips_with_matching_options() {
    let options = Options::default().with_interpolation(Interpolation::Extended);
    let text = "[server]\nhost = localhost\n[client]\nurl = http://${server:host}/api\n";
    let doc = parse(text, options.clone()).expect("valid");
    let reparsed = parse(&write(&doc), options).expect("own output");
    assert_eq!(
        reparsed.get("client", "url").unwrap(),
        "http://localhost/api"
    );
}

// ---------------------------------------------------------------------------
// Canonical output shape
// ---------------------------------------------------------------------------

#[test]
fn canonical_formatting_snapshot() {
    let text = "root=/var\n[server]\nhost:localhost\nbanner = line one\n  line two\n";
    let doc = parse_default(text).expect("valid");
    insta::assert_snapshot!(write(&doc).trim_end(), @r"
[DEFAULT]
root = /var

[server]
host = localhost
banner = line one
	line two
");
}
