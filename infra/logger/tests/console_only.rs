use swb_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_file_guard() {
    let logger = Logger::builder()
        .name("swb-console-only")
        .ansi(false)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!(assets_path = "/swagger-static", "resolved view");
    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}
