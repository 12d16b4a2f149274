pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::resolve_results_path;
pub use paths::{format_path_with_tilde, open_results_file, validate_file_size};
pub use terminal::sanitize_cell;
