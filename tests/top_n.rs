// tests/top_n.rs
use ga_bridges::analysis::top_longest;
use ga_bridges::data::{BridgeRecord, Dataset};

fn bridge(id: &str, length: Option<f64>, pos: Option<(f64, f64)>) -> BridgeRecord {
    BridgeRecord {
        structure_length: length,
        longitude: pos.map(|p| p.0),
        latitude: pos.map(|p| p.1),
        place_name: Some(format!("Place {id}")),
        age: Some(40),
        ..BridgeRecord::new(id)
    }
}

fn ids(sel: &ga_bridges::analysis::TopNSelection) -> Vec<String> {
    sel.records.iter().map(|r| r.structure_number.clone()).collect()
}

fn abc() -> Dataset {
    Dataset::from_records(vec![
        bridge("A", Some(100.0), Some((-84.0, 33.0))),
        bridge("B", Some(200.0), Some((-82.0, 31.0))),
        bridge("C", Some(50.0), None),
    ])
    .unwrap()
}

#[test]
fn longest_first() {
    let ds = abc();
    assert_eq!(ids(&top_longest(&ds, 2)), vec!["B", "A"]);
}

#[test]
fn size_is_min_of_n_and_dataset() {
    let ds = abc();
    assert_eq!(top_longest(&ds, 1).len(), 1);
    assert_eq!(top_longest(&ds, 3).len(), 3);
    assert_eq!(top_longest(&ds, 500).len(), 3);
    assert!(top_longest(&ds, 0).is_empty());
}

#[test]
fn sorted_descending_and_idempotent() {
    let records = (0..200)
        .map(|i| bridge(&i.to_string(), Some(((i * 37) % 101) as f64), None))
        .collect();
    let ds = Dataset::from_records(records).unwrap();

    let first = top_longest(&ds, 50);
    let lengths: Vec<f64> = first.records.iter().map(|r| r.structure_length.unwrap()).collect();
    assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(ids(&first), ids(&top_longest(&ds, 50)));
}

#[test]
fn ties_keep_file_order() {
    let ds = Dataset::from_records(vec![
        bridge("x", Some(10.0), None),
        bridge("y", Some(30.0), None),
        bridge("z", Some(10.0), None),
        bridge("w", Some(30.0), None),
    ])
    .unwrap();
    assert_eq!(ids(&top_longest(&ds, 4)), vec!["y", "w", "x", "z"]);
}

#[test]
fn rows_without_length_are_not_ranked() {
    let ds = Dataset::from_records(vec![bridge("a", None, None), bridge("b", Some(1.0), None)]).unwrap();
    assert_eq!(ids(&top_longest(&ds, 50)), vec!["b"]);
    assert_eq!(top_longest(&ds, 2).len(), 1);
}

#[test]
fn summaries_positions_and_centroid() {
    let ds = abc();
    let sel = top_longest(&ds, 3);

    let s = sel.summaries();
    assert_eq!(s[0].place.as_deref(), Some("Place B"));
    assert_eq!(s[0].length, 200.0);
    assert_eq!(s[0].age, Some(40));

    assert_eq!(sel.positions(), vec![Some((-82.0, 31.0)), Some((-84.0, 33.0)), None]);
    assert_eq!(sel.centroid(), Some((-83.0, 32.0)));
    assert_eq!(sel.top(2), s[..2].to_vec());
}

#[test]
fn centroid_needs_coordinates() {
    let ds = Dataset::from_records(vec![bridge("a", Some(5.0), None)]).unwrap();
    assert_eq!(top_longest(&ds, 50).centroid(), None);
}
