use reserves_anon_core::{anonymize, anonymize_rooms, collect_titles, Room, TitleMapping};
use serde_json::{json, Value};

fn rooms_from(value: Value) -> Vec<Room> {
    serde_json::from_value(value).unwrap()
}

fn to_json(rooms: &[Room]) -> Value {
    serde_json::to_value(rooms).unwrap()
}

#[test]
fn worked_example_maps_titles_in_sorted_order() {
    let rooms = rooms_from(json!([
        {
            "room": "101",
            "entries": [
                { "title": "Acme Corp", "note": "x" },
                { "title": "Acme Corp" },
                { "title": "Beta LLC" }
            ]
        }
    ]));

    let (output, mapping) = anonymize_rooms(&rooms);

    let pairs: Vec<_> = mapping.iter().collect();
    assert_eq!(pairs, vec![("Acme Corp", "A"), ("Beta LLC", "B")]);
    assert_eq!(
        to_json(&output),
        json!([
            {
                "room": "101",
                "entries": [
                    { "title": "A", "note": "x" },
                    { "title": "A" },
                    { "title": "B" }
                ]
            }
        ])
    );
}

#[test]
fn same_title_gets_same_label_across_rooms() {
    let rooms = rooms_from(json!([
        { "room": "101", "entries": [{ "title": "Zeta" }, { "title": "Acme" }] },
        { "room": "102", "entries": [{ "title": "Acme" }] },
        { "room": 7, "entries": [{ "title": "Zeta" }, { "title": "Mid" }] }
    ]));

    let (output, _) = anonymize_rooms(&rooms);

    assert_eq!(
        to_json(&output),
        json!([
            { "room": "101", "entries": [{ "title": "C" }, { "title": "A" }] },
            { "room": "102", "entries": [{ "title": "A" }] },
            { "room": 7, "entries": [{ "title": "C" }, { "title": "B" }] }
        ])
    );
}

#[test]
fn counts_and_order_are_preserved() {
    let rooms = rooms_from(json!([
        { "room": "a", "entries": [{ "title": "X" }, { "title": "Y" }, {}] },
        { "room": "b", "entries": [] },
        { "room": null, "entries": [{ "title": "X" }] }
    ]));

    let (output, _) = anonymize_rooms(&rooms);

    assert_eq!(output.len(), rooms.len());
    for (input_room, output_room) in rooms.iter().zip(&output) {
        assert_eq!(input_room.room, output_room.room);
        assert_eq!(input_room.entries().len(), output_room.entries().len());
    }
}

#[test]
fn non_title_fields_pass_through_unchanged() {
    let rooms = rooms_from(json!([
        {
            "room": "201",
            "entries": [
                {
                    "title": "Gamma Inc",
                    "start": "2024-04-01T09:00:00",
                    "seats": 12,
                    "tags": ["board", "quarterly"],
                    "contact": { "name": "山田", "ext": null }
                }
            ]
        }
    ]));

    let (output, _) = anonymize_rooms(&rooms);

    let before = rooms[0].entries()[0].as_value().as_object().unwrap();
    let after = output[0].entries()[0].as_value().as_object().unwrap();
    assert_eq!(before.len(), after.len());
    for (key, value) in before {
        if key == "title" {
            continue;
        }
        assert_eq!(after.get(key), Some(value), "field {key} changed");
    }
    assert_eq!(after["title"], "A");
}

#[test]
fn entries_without_title_stay_without_title() {
    let rooms = rooms_from(json!([
        { "room": "301", "entries": [{ "note": "walk-in" }, { "title": "Acme" }] }
    ]));

    let (output, _) = anonymize_rooms(&rooms);

    let first = output[0].entries()[0].as_value();
    assert_eq!(first, &json!({ "note": "walk-in" }));
    assert!(!output[0].entries()[0].has_title_field());
}

#[test]
fn empty_and_missing_entries_produce_empty_lists() {
    let rooms = rooms_from(json!([
        { "room": "401", "entries": [] },
        { "room": "402" }
    ]));

    let (output, mapping) = anonymize_rooms(&rooms);

    assert!(mapping.is_empty());
    assert_eq!(
        to_json(&output),
        json!([
            { "room": "401", "entries": [] },
            { "room": "402", "entries": [] }
        ])
    );
}

#[test]
fn extra_room_keys_are_not_carried_over() {
    let rooms = rooms_from(json!([
        { "room": "501", "floor": 3, "entries": [{ "title": "Acme" }] }
    ]));

    let (output, _) = anonymize_rooms(&rooms);

    assert_eq!(
        to_json(&output),
        json!([{ "room": "501", "entries": [{ "title": "A" }] }])
    );
}

#[test]
fn non_string_titles_and_non_object_entries_pass_through() {
    let rooms = rooms_from(json!([
        {
            "room": "601",
            "entries": [{ "title": 42 }, "loose string", { "title": "Acme" }]
        }
    ]));

    assert_eq!(collect_titles(&rooms), vec!["Acme"]);

    let (output, _) = anonymize_rooms(&rooms);
    assert_eq!(
        to_json(&output),
        json!([
            {
                "room": "601",
                "entries": [{ "title": 42 }, "loose string", { "title": "A" }]
            }
        ])
    );
}

#[test]
fn collect_titles_keeps_duplicates_in_source_order() {
    let rooms = rooms_from(json!([
        { "room": "1", "entries": [{ "title": "B" }, { "title": "A" }] },
        { "room": "2", "entries": [{ "title": "B" }] }
    ]));

    assert_eq!(collect_titles(&rooms), vec!["B", "A", "B"]);
}

#[test]
fn repeated_runs_are_structurally_identical() {
    let rooms = rooms_from(json!([
        { "room": "701", "entries": [{ "title": "Omega" }, { "title": "Alpha" }] },
        { "room": "702", "entries": [{ "title": "Omega", "n": 1 }] }
    ]));

    let (first, first_mapping) = anonymize_rooms(&rooms);
    let (second, second_mapping) = anonymize_rooms(&rooms);

    assert_eq!(first, second);
    assert_eq!(first_mapping, second_mapping);
}

#[test]
fn mapping_over_twenty_six_titles_uses_double_letters() {
    let titles: Vec<String> = (0..28).map(|i| format!("Org {i:02}")).collect();
    let entries: Vec<Value> = titles.iter().map(|title| json!({ "title": title })).collect();
    let rooms = rooms_from(json!([{ "room": "801", "entries": entries }]));

    let mapping = TitleMapping::build(&rooms);
    let output = anonymize(&rooms, &mapping);

    assert_eq!(mapping.label_for("Org 00"), Some("A"));
    assert_eq!(mapping.label_for("Org 25"), Some("Z"));
    assert_eq!(mapping.label_for("Org 26"), Some("AA"));
    assert_eq!(mapping.label_for("Org 27"), Some("AB"));
    assert_eq!(output[0].entries()[27].title(), Some("AB"));
}
