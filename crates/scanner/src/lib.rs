pub mod parser;
pub mod scan;

pub use scan::{FolderDecision, ScanError, assess_folder, scan_library};
