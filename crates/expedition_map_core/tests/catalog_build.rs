use expedition_map_core::{
    is_placeable_landmark, CatalogSources, MapPosition, Marker, MarkerCatalog, MarkerCategory,
    MarkerFilter,
};
use serde_json::json;

fn sources() -> CatalogSources {
    CatalogSources::from_json(
        &json!({
            "landmarks": [
                { "name": "lm_statue", "title": "Statue", "description": "A statue", "x": 10, "z": 5 },
                { "name": "lm_no_x", "title": "Lost", "z": 5 },
                { "name": "lm_no_z", "x": 1 },
                { "name": "lm_bad_x", "x": "10", "z": 5 },
                { "name": "lm_untitled", "x": -3.5, "z": 0 }
            ]
        })
        .to_string(),
        &json!({ "friends": [ { "name": "friend_a", "x": 10, "z": 5 }, { "name": "friend_b", "x": 0, "z": 0 } ] })
            .to_string(),
        &json!([
            { "coordinates": { "x": 7, "z": 9 }, "solution_text": "up\nleft", "images": ["a.png", "b.png"] },
            { "coordinates": { "x": 7, "z": 9 }, "solution_text": "down" }
        ])
        .to_string(),
        &json!({ "mailboxes": [ { "name": "mailbox_1", "x": 100, "z": 50 } ] }).to_string(),
    )
    .expect("fixture sources should parse")
}

#[test]
fn output_length_counts_only_valid_entries() {
    let catalog = MarkerCatalog::build(&sources());

    assert_eq!(catalog.len(), 2 + 2 + 2 + 1);
    assert_eq!(catalog.dropped_landmarks(), 3);
    assert_eq!(catalog.count_by_category(MarkerCategory::Exhibit), 2);
    assert_eq!(catalog.count_by_category(MarkerCategory::Friend), 2);
    assert_eq!(catalog.count_by_category(MarkerCategory::Solution), 2);
    assert_eq!(catalog.count_by_category(MarkerCategory::Mailbox), 1);
}

#[test]
fn landmark_position_is_offset_and_swapped() {
    let catalog = MarkerCatalog::build(&sources());
    let statue = catalog.find("lm_statue").expect("statue marker");

    assert_eq!(statue.position, MapPosition::new(205.0, 210.0));
    assert_eq!(statue.title(), Some("Statue"));
    assert_eq!(statue.description(), Some("A statue"));
}

#[test]
fn landmark_missing_text_defaults_to_empty() {
    let catalog = MarkerCatalog::build(&sources());
    let untitled = catalog.find("lm_untitled").expect("untitled marker");

    assert_eq!(untitled.position, MapPosition::new(200.0, 196.5));
    assert_eq!(untitled.title(), Some(""));
    assert_eq!(untitled.description(), Some(""));
}

#[test]
fn friend_and_mailbox_positions_are_raw() {
    let catalog = MarkerCatalog::build(&sources());

    let friend = catalog.find("friend_a").expect("friend marker");
    assert_eq!(friend.position, MapPosition::new(5.0, 10.0));
    assert_eq!(friend.title(), None);

    let mailbox = catalog.find("mailbox_1").expect("mailbox marker");
    assert_eq!(mailbox.position, MapPosition::new(50.0, 100.0));
    assert_eq!(mailbox.category(), MarkerCategory::Mailbox);
}

#[test]
fn co_located_solutions_get_distinct_ids() {
    let catalog = MarkerCatalog::build(&sources());
    let solutions: Vec<&Marker> = catalog
        .markers()
        .iter()
        .filter(|marker| marker.category() == MarkerCategory::Solution)
        .collect();

    assert_eq!(solutions.len(), 2);
    assert_eq!(solutions[0].id, "solution_7_9_0");
    assert_eq!(solutions[1].id, "solution_7_9_1");
    assert_eq!(solutions[0].position, MapPosition::new(9.0, 7.0));
    assert_eq!(solutions[0].solution_text(), Some("up\nleft"));
    assert_eq!(
        solutions[0].image_refs(),
        Some(&["a.png".to_string(), "b.png".to_string()][..])
    );
    assert_eq!(solutions[1].image_refs(), None);
}

#[test]
fn order_is_exhibits_friends_solutions_mailboxes() {
    let catalog = MarkerCatalog::build(&sources());
    let categories: Vec<MarkerCategory> =
        catalog.markers().iter().map(Marker::category).collect();

    assert_eq!(
        categories,
        vec![
            MarkerCategory::Exhibit,
            MarkerCategory::Exhibit,
            MarkerCategory::Friend,
            MarkerCategory::Friend,
            MarkerCategory::Solution,
            MarkerCategory::Solution,
            MarkerCategory::Mailbox,
        ]
    );
    assert_eq!(catalog.markers()[0].id, "lm_statue");
    assert_eq!(catalog.markers()[1].id, "lm_untitled");
}

#[test]
fn every_position_is_finite() {
    let catalog = MarkerCatalog::build(&sources());
    assert!(catalog.markers().iter().all(|marker| marker.position.is_finite()));
}

#[test]
fn building_twice_yields_equal_catalogs() {
    let sources = sources();
    assert_eq!(MarkerCatalog::build(&sources), MarkerCatalog::build(&sources));
}

#[test]
fn empty_sources_build_empty_catalog() {
    let catalog = MarkerCatalog::build(&CatalogSources::default());
    assert!(catalog.is_empty());
    assert_eq!(catalog.dropped_landmarks(), 0);
    assert_eq!(catalog.rejected_entries(), 0);
}

#[test]
fn exhibits_are_exactly_the_placeable_landmarks() {
    let sources = sources();
    let catalog = MarkerCatalog::build(&sources);
    let placeable: Vec<&str> = sources
        .landmarks
        .iter()
        .filter(|record| is_placeable_landmark(record))
        .map(|record| record.name.as_str())
        .collect();
    let exhibits: Vec<&str> = catalog
        .markers()
        .iter()
        .filter(|marker| marker.category() == MarkerCategory::Exhibit)
        .map(|marker| marker.id.as_str())
        .collect();

    assert_eq!(exhibits, placeable);
    assert_eq!(
        catalog.dropped_landmarks(),
        sources.landmarks.len() - placeable.len()
    );
}

#[test]
fn malformed_entry_is_skipped_without_losing_its_source() {
    let sources = CatalogSources::from_json(
        &json!({
            "landmarks": [
                { "name": "lm_bad_title", "title": 5, "x": 1, "z": 1 },
                { "name": "lm_ok", "title": "Fine", "x": 2, "z": 2 }
            ]
        })
        .to_string(),
        &json!({ "friends": [ { "name": "friend_no_z", "x": 3 }, { "name": "friend_ok", "x": 4, "z": 4 } ] })
            .to_string(),
        &json!([ { "coordinates": { "x": 1, "z": 1 }, "solution_text": "left" } ]).to_string(),
        &json!({ "mailboxes": [ { "name": "mailbox_1", "x": 5, "z": 5 } ] }).to_string(),
    )
    .expect("one bad entry must not fail its document");
    let catalog = MarkerCatalog::build(&sources);

    assert_eq!(catalog.rejected_entries(), 2);
    assert_eq!(catalog.dropped_landmarks(), 0);
    assert!(catalog.find("lm_bad_title").is_none());
    assert!(catalog.find("friend_no_z").is_none());
    assert_eq!(catalog.find("lm_ok").and_then(Marker::title), Some("Fine"));
    assert!(catalog.find("friend_ok").is_some());
    assert!(catalog.find("solution_1_1_0").is_some());
    assert!(catalog.find("mailbox_1").is_some());
}

#[test]
fn negative_zero_solution_coordinate_gets_plain_zero_id() {
    let sources = CatalogSources::from_json(
        r#"{"landmarks": []}"#,
        r#"{"friends": []}"#,
        r#"[{"coordinates": {"x": -0.0, "z": 4}, "solution_text": "up"}]"#,
        r#"{"mailboxes": []}"#,
    )
    .unwrap();
    let catalog = MarkerCatalog::build(&sources);

    assert_eq!(catalog.markers()[0].id, "solution_0_4_0");
}

#[test]
fn find_returns_first_match_for_duplicate_ids() {
    let sources = CatalogSources::from_json(
        r#"{"landmarks": [{"name": "dup", "title": "first", "x": 0, "z": 0}]}"#,
        r#"{"friends": [{"name": "dup", "x": 1, "z": 1}]}"#,
        "[]",
        r#"{"mailboxes": []}"#,
    )
    .unwrap();
    let catalog = MarkerCatalog::build(&sources);

    let found = catalog.find("dup").unwrap();
    assert_eq!(found.category(), MarkerCategory::Exhibit);
    assert_eq!(found.title(), Some("first"));
}

#[test]
fn default_filter_hides_solutions_and_keeps_order() {
    let catalog = MarkerCatalog::build(&sources());
    let filter = MarkerFilter::default();
    let visible: Vec<&str> = catalog
        .visible(&filter)
        .map(|marker| marker.id.as_str())
        .collect();

    assert_eq!(
        visible,
        vec!["lm_statue", "lm_untitled", "friend_a", "friend_b", "mailbox_1"]
    );
}

#[test]
fn toggled_filter_shows_solutions() {
    let catalog = MarkerCatalog::build(&sources());
    let mut filter = MarkerFilter::none();
    filter.toggle(MarkerCategory::Solution);

    assert_eq!(catalog.visible(&filter).count(), 2);
}

#[test]
fn marker_serialization_uses_expected_wire_fields() {
    let catalog = MarkerCatalog::build(&sources());

    let exhibit = serde_json::to_value(catalog.find("lm_statue").unwrap()).unwrap();
    assert_eq!(exhibit["id"], "lm_statue");
    assert_eq!(exhibit["type"], "exhibit");
    assert_eq!(exhibit["position"], json!([205.0, 210.0]));
    assert_eq!(exhibit["title"], "Statue");
    assert!(exhibit.get("solution_text").is_none());

    let friend = serde_json::to_value(catalog.find("friend_a").unwrap()).unwrap();
    assert_eq!(friend["type"], "friend");
    assert!(friend.get("title").is_none());

    let solution = serde_json::to_value(catalog.find("solution_7_9_0").unwrap()).unwrap();
    assert_eq!(solution["type"], "solution");
    assert_eq!(solution["solution_text"], "up\nleft");
    assert_eq!(solution["images"], json!(["a.png", "b.png"]));
}
