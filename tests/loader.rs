// tests/loader.rs
use std::fs;
use std::path::PathBuf;

use ga_bridges::store::{load_dataset, load_from_reader, LoadError};

const HEADER: &str = "Structure Number,County Name,43A - Main Span Material,106 - Year Reconstructed,\
Year Built,49 - Structure Length (ft.),16 - Latitude (decimal),17 - Longitude (decimal),\
City - InfoBridge Place Name,Bridge Age (yr)";

fn csv_of(rows: &[&str]) -> String {
    let mut s = format!("{HEADER}\n");
    for r in rows {
        s.push_str(r);
        s.push('\n');
    }
    s
}

fn tmp_file(name: &str, contents: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ga_bridges_loader_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p.push("bridges.csv");
    fs::write(&p, contents).unwrap();
    p
}

#[test]
fn typed_fields_and_missing_cells() {
    let text = csv_of(&[
        "001,Fulton,Steel,1990,1965,120.5,33.75,-84.39,Atlanta,59",
        "002,Cobb,,,1970,,,,,",
        "003,Cobb,Concrete,No Data Present,1980.0,50,34.0,-84.5,Marietta,44",
    ]);
    let ds = load_from_reader(text.as_bytes()).unwrap();
    assert_eq!(ds.len(), 3);

    let a = ds.get("001").unwrap();
    assert_eq!(a.county.as_deref(), Some("Fulton"));
    assert_eq!(a.main_span_material.as_deref(), Some("Steel"));
    assert_eq!(a.year_reconstructed, Some(1990));
    assert_eq!(a.year_built, Some(1965));
    assert_eq!(a.structure_length, Some(120.5));
    assert_eq!(a.position(), Some((-84.39, 33.75)));
    assert_eq!(a.place_name.as_deref(), Some("Atlanta"));
    assert_eq!(a.age, Some(59));

    let b = ds.get("002").unwrap();
    assert_eq!(b.main_span_material, None);
    assert_eq!(b.year_reconstructed, None);
    assert_eq!(b.structure_length, None);
    assert_eq!(b.position(), None);
    assert_eq!(b.place_label(), "No Data Present");
    assert_eq!(b.age, None);

    let c = ds.get("003").unwrap();
    assert_eq!(c.year_reconstructed, None, "non-numeric year is dropped");
    assert_eq!(c.year_built, Some(1980));
}

#[test]
fn rows_keep_file_order_and_counties_sort() {
    let text = csv_of(&[
        "9,Ware,Steel,,1950,10,,,,",
        "1,Appling,Steel,,1950,10,,,,",
        "5,Cobb,Steel,,1950,10,,,,",
        "7,Appling,Steel,,1950,10,,,,",
    ]);
    let ds = load_from_reader(text.as_bytes()).unwrap();
    let ids: Vec<&str> = ds.iter().map(|r| r.structure_number.as_str()).collect();
    assert_eq!(ids, vec!["9", "1", "5", "7"]);
    assert_eq!(ds.counties(), vec!["Appling", "Cobb", "Ware"]);
    assert_eq!(ds.default_counties(2), vec!["Appling", "Cobb"]);
}

#[test]
fn extra_columns_are_ignored() {
    let text = format!("Extra,{HEADER}\nx,001,Fulton,Steel,,,10,,,,\n");
    let ds = load_from_reader(text.as_bytes()).unwrap();
    assert_eq!(ds.get("001").unwrap().structure_length, Some(10.0));
}

#[test]
fn missing_column_is_an_error() {
    let text = "Structure Number,County Name\n1,Fulton\n";
    match load_from_reader(text.as_bytes()) {
        Err(LoadError::MissingColumn(c)) => assert_eq!(c, "43A - Main Span Material"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn duplicate_structure_number_is_an_error() {
    let text = csv_of(&["A,Fulton,Steel,,,1,,,,", "A,Cobb,Steel,,,2,,,,"]);
    match load_from_reader(text.as_bytes()) {
        Err(LoadError::DuplicateId { id, line }) => {
            assert_eq!(id, "A");
            assert_eq!(line, 3);
        }
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn overlong_row_is_an_error() {
    // Unquoted comma in the place name pushes the age into an 11th field
    let text = csv_of(&["001,Fulton,Steel,1990,1965,120.5,33.75,-84.39,Atlanta, GA,59"]);
    match load_from_reader(text.as_bytes()) {
        Err(LoadError::RowWidth { line, expected, found }) => {
            assert_eq!((line, expected, found), (2, 10, 11));
        }
        other => panic!("expected RowWidth, got {other:?}"),
    }
}

#[test]
fn short_row_pads_missing_cells() {
    let text = csv_of(&["001,Fulton,Steel,1990,1965,120.5"]);
    let ds = load_from_reader(text.as_bytes()).unwrap();
    let a = ds.get("001").unwrap();
    assert_eq!(a.structure_length, Some(120.5));
    assert_eq!(a.position(), None);
    assert_eq!(a.age, None);
}

#[test]
fn quoted_comma_in_place_name_loads() {
    let text = csv_of(&["001,Fulton,Steel,1990,1965,120.5,33.75,-84.39,\"Atlanta, GA\",59"]);
    let ds = load_from_reader(text.as_bytes()).unwrap();
    let a = ds.get("001").unwrap();
    assert_eq!(a.place_name.as_deref(), Some("Atlanta, GA"));
    assert_eq!(a.age, Some(59));
}

#[test]
fn blank_structure_number_is_an_error() {
    let text = csv_of(&[",Fulton,Steel,,,1,,,,"]);
    assert!(matches!(load_from_reader(text.as_bytes()), Err(LoadError::MissingId { line: 2 })));
}

#[test]
fn load_from_disk() {
    let path = tmp_file("disk", &csv_of(&["001,Fulton,Steel,1990,1965,120.5,33.75,-84.39,Atlanta,59"]));
    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.len(), 1);
}

#[test]
fn missing_file_is_fatal() {
    let mut p = std::env::temp_dir();
    p.push("ga_bridges_loader_nope/does_not_exist.csv");
    assert!(matches!(load_dataset(&p), Err(LoadError::Io { .. })));
}
