pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::default_config_path;
pub use paths::{format_path_with_tilde, safe_open_file, validate_file_size};
pub use terminal::{single_line, strip_ansi_codes};
