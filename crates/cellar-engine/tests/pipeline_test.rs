use cellar_config::Config;
use cellar_core::{CleanedRecord, RawRecord};
use cellar_text::AbsentMarker;
use cellar_engine::RecordCleaner;

const CHARVIN: &str = "2009 Charvin Ch\u{e2}teauneuf-du-Pape - $58.81 (IWC93-95)(WA92-94)

Dear Friends,
This is a stunning wine &amp; Robert Parker gave it 95pts!
Only 3 x 750ml per person... first come first served.
Thank you,
Jon";

const PETERS: &str = "NV Pierre P\u{e9}ters Cuv\u{e9}e de R\u{e9}serve - $45
Dear friends,
Chalky, saline & bright -- 100% chardonnay. Buy 6/12 bottles at $45-50+!
To order, reply to this email.";

#[test]
fn test_full_message() {
    let record = RecordCleaner::default().clean_message(CHARVIN);

    assert_eq!(record.label, "2009 charvin chateauneuf-du-pape");
    assert_eq!(record.note, "this is a stunning wine gave it amazing.");
}

#[test]
fn test_punctuation_heavy_message() {
    let record = RecordCleaner::default().clean_message(PETERS);

    assert_eq!(record.label, "nv pierre peters cuvee de reserve");
    assert_eq!(
        record.note,
        "chalky saline and bright -- 100 percent chardonnay. buy 6 and 12 bottles at 45 to 50 usd."
    );
}

#[test]
fn test_dataset_filters_and_dedupes() {
    let records = vec![
        RawRecord::new("2019-01-01", CHARVIN),
        RawRecord::new("2019-01-02", "Greetings!\nDear friends,\nA mystery wine.\nThank you"),
        RawRecord::new("2019-01-03", PETERS),
        RawRecord::new("2019-01-04", CHARVIN),
    ];

    let outcome = RecordCleaner::default().clean(records);
    let labels: Vec<_> = outcome.dataset.iter().map(|r| r.label.as_str()).collect();

    assert_eq!(
        labels,
        vec!["2009 charvin chateauneuf-du-pape", "nv pierre peters cuvee de reserve"]
    );
    assert_eq!(outcome.report.read, 4);
    assert_eq!(outcome.report.unlabeled, 1);
    assert_eq!(outcome.report.duplicates, 1);
    assert_eq!(outcome.report.redactions.get("robert parker"), Some(&2));
    assert_eq!(outcome.report.redactions.get("parker"), None);
}

#[test]
fn test_parallel_run_keeps_input_order() {
    let records: Vec<_> = (0..200)
        .map(|i| RawRecord::new(format!("d{i}"), format!("{} cuvee - $10\nnote {i}", 2000 + i)))
        .collect();

    let cleaner = RecordCleaner::default().with_workers(4).unwrap();
    let outcome = cleaner.clean(records);

    assert_eq!(outcome.dataset.len(), 200);
    for (i, record) in outcome.dataset.iter().enumerate() {
        assert_eq!(record.label, format!("{} cuvee", 2000 + i));
    }
}

#[test]
fn test_same_label_different_notes_kept() {
    let records = vec![
        RawRecord::new("d1", "2015 foo - $20\ndear friends, cherry"),
        RawRecord::new("d2", "2015 foo - $20\ndear friends, plum"),
    ];

    let outcome = RecordCleaner::default().clean(records);

    assert_eq!(
        outcome.dataset.into_records(),
        vec![
            CleanedRecord::new("2015 foo", "cherry"),
            CleanedRecord::new("2015 foo", "plum"),
        ]
    );
}

#[test]
fn test_drop_last_char_policy() {
    let message = "2010 foo - $20\ndear friends,\nripe plums";

    let default = RecordCleaner::default().clean_message(message);
    assert_eq!(default.note, "ripe plums");

    let mut config = Config::default();
    config.body.absent_marker = AbsentMarker::DropLastChar;
    let dropping = RecordCleaner::from_config(&config).unwrap().clean_message(message);

    // one character lost per absent sign-off marker
    assert_eq!(dropping.note, "ripe plu");
}

#[test]
fn test_configured_points_replacement() {
    let mut config = Config::default();
    config.note.points_replacement = "stellar".to_string();

    let record = RecordCleaner::from_config(&config)
        .unwrap()
        .clean_message("2016 foo - $30\ndear friends, a 97pts effort");

    assert_eq!(record.note, "a stellar effort");
}

#[test]
fn test_report_serializes() {
    let outcome = RecordCleaner::default().clean(vec![RawRecord::new("d1", CHARVIN)]);
    let json = serde_json::to_value(&outcome.report).unwrap();

    assert_eq!(json["kept"], 1);
    assert_eq!(json["redactions"]["robert parker"], 1);
}
