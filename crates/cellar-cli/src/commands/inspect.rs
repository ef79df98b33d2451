use anyhow::Result;
use cellar_config::Config;
use cellar_engine::RecordCleaner;

const LINE_WIDTH: usize = 100;

pub fn handle(message: Option<String>, json: bool, config: &Config) -> Result<()> {
    let message = match message {
        Some(message) => message,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    let cleaner = RecordCleaner::from_config(config)?;
    let record = cleaner.clean_message(&message);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("label: {}", record.label);
    if record.is_unlabeled() {
        println!("  (no label found; this record would be dropped)");
    }
    println!();

    let chars: Vec<char> = record.note.chars().collect();
    for line in chars.chunks(LINE_WIDTH) {
        println!("{}", line.iter().collect::<String>());
    }
    println!("{}", "-".repeat(45));

    Ok(())
}
