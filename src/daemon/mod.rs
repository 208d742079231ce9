mod service;

pub use service::{run, run_until_shutdown};
