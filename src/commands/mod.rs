mod context;
pub mod init;
pub mod report;
pub mod views;

pub use context::init_tracing;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use report::{run_report, run_report_impl};
pub use views::{run_views, run_views_impl};
