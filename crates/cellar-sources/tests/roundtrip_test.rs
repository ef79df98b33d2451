use cellar_core::{CleanedRecord, Dataset, OutputSchema};
use cellar_sources::{read_path, write_path};

#[test]
fn test_write_then_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("wine.csv");
    let output = dir.path().join("wine_clean.csv");

    std::fs::write(
        &input,
        "date,message\n2019-05-01,\"2012 foo - $30\nlovely\"\n2019-05-02,nv bar - $12\n",
    )
    .unwrap();

    let records = read_path(&input).unwrap();
    assert_eq!(records.len(), 2);

    let (dataset, _) = Dataset::from_cleaned(
        records
            .iter()
            .map(|r| CleanedRecord::new(r.date.clone(), r.message.replace('\n', " ")))
            .collect(),
    );
    write_path(&output, &dataset, OutputSchema::Training).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "name,note\n2019-05-01,2012 foo - $30 lovely\n2019-05-02,nv bar - $12\n"
    );
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_path(&dir.path().join("nope.csv")).unwrap_err();

    assert!(matches!(err, cellar_core::Error::Io(_)));
}
