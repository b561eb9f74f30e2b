// Host-side tests for project data parsing and the bundled fallback.

use folio_core::{entrance_delay_secs, fallback_projects, parse_projects};

#[test]
fn empty_collection_parses_to_zero_projects() {
    let projects = parse_projects("[]").expect("empty array parses");
    assert!(projects.is_empty());
}

#[test]
fn well_formed_collection_preserves_source_order() {
    let json = r#"[
        {"title": "First", "image": "a.png", "description": "one", "live": "https://a"},
        {"title": "Second", "image": "b.png", "description": "two", "live": "https://b"}
    ]"#;
    let projects = parse_projects(json).expect("valid json parses");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].title, "First");
    assert_eq!(projects[1].title, "Second");
}

#[test]
fn malformed_json_is_an_error() {
    assert!(parse_projects("{not json").is_err());
}

#[test]
fn missing_field_is_an_error() {
    let json = r#"[{"title": "No image", "description": "x", "live": "https://x"}]"#;
    assert!(parse_projects(json).is_err());
}

#[test]
fn fallback_has_exactly_four_entries_in_fixed_order() {
    let a = fallback_projects();
    let b = fallback_projects();
    assert_eq!(a.len(), 4);
    assert_eq!(a, b, "fallback must be stable across calls");
    let titles: Vec<&str> = a.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Weather Dashboard",
            "Task Tracker",
            "Recipe Finder",
            "Music Visualizer"
        ]
    );
}

#[test]
fn entrance_delay_staggers_by_tenths_of_a_second() {
    assert_eq!(entrance_delay_secs(0), 0.0);
    assert!((entrance_delay_secs(1) - 0.1).abs() < 1e-6);
    assert!((entrance_delay_secs(7) - 0.7).abs() < 1e-6);
}
