use sitegen_core::Domain;
use sitegen_store::error::StoreError;
use sitegen_store::{list_data_files, load_domain, read_record};
use std::fs;
use tempfile::TempDir;

#[test]
fn lists_matching_files_in_name_order() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path();
    fs::write(dir.join("sponsor-b.txt"), "SPONSOR NAME: B\n").expect("write");
    fs::write(dir.join("sponsor-a.txt"), "SPONSOR NAME: A\n").expect("write");
    fs::write(dir.join("sponsor-README.txt"), "how to\n").expect("write");
    fs::write(dir.join("README.txt"), "how to\n").expect("write");
    fs::write(dir.join("sponsor-c.md"), "SPONSOR NAME: C\n").expect("write");
    fs::create_dir(dir.join("sponsor-dir.txt")).expect("mkdir");

    let files = list_data_files(dir, Domain::Sponsors).expect("list");
    let names: Vec<&str> = files.iter().map(|file| file.name.as_str()).collect();
    assert_eq!(names, vec!["sponsor-a.txt", "sponsor-b.txt"]);
}

#[test]
fn missing_directory_is_an_error() {
    let temp = TempDir::new().expect("temp dir");
    let err = list_data_files(&temp.path().join("team-data"), Domain::Teams).unwrap_err();
    assert!(matches!(err, StoreError::MissingDirectory(_)));
}

#[test]
fn empty_directory_lists_nothing() {
    let temp = TempDir::new().expect("temp dir");
    let files = list_data_files(temp.path(), Domain::Alumni).expect("list");
    assert!(files.is_empty());
}

#[test]
fn load_domain_uses_block_parsing_for_alumni() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(
        temp.path().join("alumni-ada.txt"),
        "ALUMNI NAME: Ada\nALUMNI STORY: Built things.\nThen more things.\n\nALUMNI YEAR: 2019\n",
    )
    .expect("write");

    let parsed = load_domain(temp.path(), Domain::Alumni).expect("load");
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].file.name, "alumni-ada.txt");
    assert_eq!(
        parsed[0].record.get("alumni_story"),
        Some("Built things.\nThen more things.")
    );
    assert_eq!(parsed[0].record.get("alumni_year"), Some("2019"));
}

#[test]
fn read_record_reports_unreadable_file() {
    let temp = TempDir::new().expect("temp dir");
    let err = read_record(
        &temp.path().join("team-missing.txt"),
        Domain::Teams.parse_mode(),
    )
    .unwrap_err();
    assert!(matches!(err, StoreError::Read { .. }));
    assert!(err.to_string().contains("team-missing.txt"));
}

#[test]
fn latin1_bytes_are_decoded_lossily() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(
        temp.path().join("alumni-goran.txt"),
        b"ALUMNI NAME: G\xf6ran\nALUMNI YEAR: 2020\n",
    )
    .expect("write");

    let parsed = load_domain(temp.path(), Domain::Alumni).expect("load");
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].record.get("alumni_name"), Some("G\u{fffd}ran"));
    assert_eq!(parsed[0].record.get("alumni_year"), Some("2020"));
}
