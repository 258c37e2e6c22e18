pub mod aggregator;
pub mod cli;
pub mod error;
pub mod record;
pub mod validate;

pub use aggregator::{most_active_cookies, process_file, ActivityAggregator, ScanMode};
pub use cli::{parse_args, Config};
pub use error::{CookieError, ErrorKind, Result};
