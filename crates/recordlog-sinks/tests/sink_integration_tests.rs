// Integration tests wiring the optional sinks into a Logger.

use recordlog::{ErrorKind, Level, Logger, LoggerConfig, Result, Transport};
use recordlog_sinks::{FileAppendTransport, YamlFormatter};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[test]
fn test_file_logger_writes_per_level_files() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(
        LoggerConfig::new().with_transport(FileAppendTransport::new(tmp.path())),
    );

    logger.log(json!({"cwd": "/srv/app"}), Level::Debug).unwrap();
    logger.log("second", Level::Debug).unwrap();
    logger.log("boom", Level::Error).unwrap();

    let debug = std::fs::read_to_string(tmp.path().join("debug.log")).unwrap();
    let lines: Vec<&str> = debug.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("\u{1b}[34m"));
    assert!(lines[0].ends_with("\u{1b}[39m "));
    assert!(lines[0].contains("\"cwd\":\"/srv/app\""));

    let error = std::fs::read_to_string(tmp.path().join("error.log")).unwrap();
    assert!(error.contains("\"message\":\"boom\""));
    assert!(error.ends_with(" \n"));

    assert!(!tmp.path().join("info.log").exists());
}

#[test]
fn test_file_transport_missing_dir_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let transport = FileAppendTransport::new(tmp.path().join("does-not-exist"));

    let err = transport.send(&Level::Info, "nowhere").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("info.log"));
}

#[test]
fn test_file_transport_refuses_level_outside_dir() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    std::fs::create_dir(&out).unwrap();
    let logger = Logger::new(LoggerConfig::new().with_transport(FileAppendTransport::new(&out)));

    let err = logger.log("x", Level::from("../escaped")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(!tmp.path().join("escaped.log").exists());
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_file_transport_error_propagates_through_log() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(
        LoggerConfig::new().with_transport(FileAppendTransport::new(tmp.path().join("gone"))),
    );

    let err = logger.log("x", Level::Warning).unwrap_err();
    assert_eq!(err.code(), "ERR_IO");
}

#[test]
fn test_yaml_logger_end_to_end() {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let sink = sent.clone();
    let logger = Logger::new(
        LoggerConfig::new()
            .with_format(YamlFormatter)
            .with_transport(move |_: &Level, message: &str| -> Result<()> {
                sink.lock().unwrap().push(message.to_string());
                Ok(())
            }),
    );

    logger.log("This is some yaml", None).unwrap();

    assert_eq!(
        sent.lock().unwrap().as_slice(),
        ["root: root\nmessage: This is some yaml\nlevel: info\n".to_string()]
    );
}

#[test]
fn test_yaml_and_file_combined() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(
        LoggerConfig::new()
            .with_root("driver")
            .with_format(YamlFormatter)
            .with_transport(FileAppendTransport::new(tmp.path())),
    );

    logger.warning("disk at 90%").unwrap();

    let written = std::fs::read_to_string(tmp.path().join("warning.log")).unwrap();
    assert!(written.starts_with("root: driver\n"));
    assert!(written.contains("level: warning"));
}
