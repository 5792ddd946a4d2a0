pub mod check;

pub use check::{check_file, check_files, handle_check, CheckConfig, CheckOutcome};
