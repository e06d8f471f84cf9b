//! Offline pipeline tests: metadata parsing through catalog output.

use plugin_catalog::{
    build_catalog, parse_metadata, write_catalog, CandidateSet, RepositoryOwner, RepositoryRecord,
    ResultMap,
};
use tempfile::TempDir;

fn record(full_name: &str, stars: u32, pushed_at: &str, language: Option<&str>) -> RepositoryRecord {
    RepositoryRecord {
        full_name: full_name.to_string(),
        name: full_name.split('/').next_back().unwrap().to_string(),
        default_branch: "master".to_string(),
        language: language.map(str::to_string),
        stargazers_count: stars,
        pushed_at: Some(pushed_at.to_string()),
        is_template: false,
        owner: RepositoryOwner {
            login: full_name.split('/').next().unwrap().to_string(),
        },
    }
}

#[test]
fn builds_and_writes_the_catalog() {
    let mut candidates = CandidateSet::new();
    let mut resolved = ResultMap::new();

    candidates.insert(
        "anuke/shiny".to_string(),
        record("anuke/shiny", 50, "2021-01-01T00:00:00Z", Some("Java")),
    );
    resolved.insert(
        "anuke/shiny".to_string(),
        parse_metadata(
            r#"{
                "displayName": "[accent]Shiny[]",
                "author": "anuke",
                "description": "Adds shiny things.",
                "minGameVersion": "105.2"
            }"#,
        )
        .unwrap(),
    );

    // Relaxed syntax document, no declared version: defaults to "104" and
    // falls below the gate.
    candidates.insert(
        "old/relic".to_string(),
        record("old/relic", 90, "2019-05-01T00:00:00Z", None),
    );
    resolved.insert(
        "old/relic".to_string(),
        parse_metadata("{\n  displayName: Relic\n  author: somebody\n}").unwrap(),
    );

    candidates.insert(
        "kot/lin".to_string(),
        record("kot/lin", 50, "2020-06-01T00:00:00Z", Some("Kotlin")),
    );
    resolved.insert(
        "kot/lin".to_string(),
        parse_metadata("{\n  minGameVersion: 105\n}").unwrap(),
    );

    let entries = build_catalog(&candidates, &resolved);

    // "old/relic" is gated out despite having the most stars; the two
    // 50-star survivors order by push timestamp.
    let repos: Vec<&str> = entries.iter().map(|e| e.repo.as_str()).collect();
    assert_eq!(repos, ["kot/lin", "anuke/shiny"]);

    assert_eq!(entries[0].name, "lin");
    assert_eq!(entries[0].author, "kot");
    assert!(entries[0].has_java);
    assert_eq!(entries[0].description, "No description provided.");
    assert_eq!(entries[0].min_game_version, "105");

    assert_eq!(entries[1].name, "Shiny");
    assert_eq!(entries[1].description, "Adds shiny things.");
    assert_eq!(entries[1].last_updated, "2021-01-01T00:00:00Z");
    assert_eq!(entries[1].stars, 50);

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("plugins.json");
    write_catalog(&entries, &path).unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    let array = parsed.as_array().unwrap();

    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["repo"], "kot/lin");
    assert_eq!(array[0]["hasJava"], true);
    assert_eq!(array[1]["lastUpdated"], "2021-01-01T00:00:00Z");
    assert_eq!(array[1]["minGameVersion"], "105.2");
    // Pretty-printed output.
    assert!(body.contains('\n'));
}

#[test]
fn catalog_file_is_fully_overwritten() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("plugins.json");
    std::fs::write(&path, "stale content from a previous run, quite long").unwrap();

    write_catalog(&[], &path).unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    assert_eq!(body, "[]");
}

#[test]
fn empty_inputs_produce_an_empty_catalog() {
    let entries = build_catalog(&CandidateSet::new(), &ResultMap::new());
    assert!(entries.is_empty());
}
