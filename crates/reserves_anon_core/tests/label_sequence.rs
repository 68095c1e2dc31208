use reserves_anon_core::{generate_labels, label_for_index};
use std::collections::HashSet;

#[test]
fn twenty_seven_labels_wrap_to_double_letters() {
    let labels: Vec<String> = generate_labels(27).collect();

    assert_eq!(labels.len(), 27);
    assert_eq!(labels[0], "A");
    assert_eq!(labels[25], "Z");
    assert_eq!(labels[26], "AA");
}

#[test]
fn labels_are_distinct_and_strictly_increasing() {
    let labels: Vec<String> = generate_labels(2_000).collect();

    let unique: HashSet<&String> = labels.iter().collect();
    assert_eq!(unique.len(), labels.len());

    for pair in labels.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        assert!(
            prev.len() < next.len() || (prev.len() == next.len() && prev < next),
            "{prev} should precede {next}"
        );
    }
}

#[test]
fn zero_count_yields_nothing() {
    assert_eq!(generate_labels(0).next(), None);
}

#[test]
fn each_call_starts_fresh() {
    let first: Vec<String> = generate_labels(3).collect();
    let second: Vec<String> = generate_labels(3).collect();
    assert_eq!(first, vec!["A", "B", "C"]);
    assert_eq!(first, second);
}

#[test]
fn matches_bijective_numeration_not_plain_base_26() {
    // Plain base-26 would give "BA" for 26 and "BB" for 27.
    assert_eq!(label_for_index(26), "AA");
    assert_eq!(label_for_index(27), "AB");
    assert_eq!(label_for_index(51), "AZ");
    assert_eq!(label_for_index(52), "BA");
    assert_eq!(label_for_index(26 + 26 * 26), "AAA");
}
