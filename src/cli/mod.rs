pub mod orchestration;

pub use orchestration::{resolve_config, run_index, run_link, run_whitespace, CommonArgs};
