pub mod sink;
pub mod table;

pub use sink::{write_dataset, write_path};
pub use table::{read_path, read_records};
