pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{CodecError, ConfigError, ResizeError, ResizeResult, ValidationError};
pub use validation::parse_dimension;
pub use formats::{detect_format, is_supported};
pub use fs::{DirStatus, ensure_dir, file_name};
