//! File sink behaviour. Kept in its own test binary because the sink is global.

#[cfg(feature = "file-logging")]
#[test]
fn tagged_messages_go_to_file_but_verbose_does_not() {
    use logger::{
        close_file_logging, enable_verbose, error, info, init_file_logging, set_level, verbose,
        warn, Level,
    };
    use std::fs;

    let dir = tempfile::tempdir().expect("temp dir");
    let log_path = dir.path().join("logs").join("planner.log");

    set_level(Level::Info);
    init_file_logging(&log_path).expect("log file should open");

    info!("Loaded course 1406344");
    warn!("Lecture without duration");
    error!("Schedule failed");
    enable_verbose();
    verbose!("verbose message stays on the console");
    close_file_logging();

    let contents = fs::read_to_string(&log_path).expect("read log file");
    assert!(contents.contains("[INFO] Loaded course 1406344"));
    assert!(contents.contains("[WARN] Lecture without duration"));
    assert!(contents.contains("[ERROR] Schedule failed"));
    assert!(!contents.contains("verbose message"));

    // Every line starts with a YYYY-MM-DD timestamp
    for line in contents.lines() {
        let date = line.split(' ').next().unwrap_or_default();
        assert_eq!(date.len(), 10, "unexpected line: {line}");
        assert_eq!(date.as_bytes()[4], b'-');
    }
}

#[cfg(feature = "file-logging")]
#[test]
fn init_fails_when_parent_is_a_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").expect("write blocker");
    assert!(logger::init_file_logging(&blocker.join("planner.log")).is_err());
}
