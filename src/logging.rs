//! 日志
//!
//! 输出到stderr, stdout只留给生成结果的确认信息

use log::{self, Level, LevelFilter, Log, Metadata, Record};
use std::env;

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let color = match record.level() {
            Level::Error => 31, // Red
            Level::Warn => 93,  // BrightYellow
            Level::Info => 34,  // Blue
            Level::Debug => 32, // Green
            Level::Trace => 90, // BrightBlack
        };
        eprintln!(
            "\u{1B}[{}m[{:>5}] {}\u{1B}[0m",
            color,
            record.level(),
            record.args(),
        );
    }

    fn flush(&self) {}
}

/// 由环境变量`LOG`决定日志级别, 默认`WARN`
pub fn level_from(value: Option<&str>) -> LevelFilter {
    match value {
        Some("ERROR") => LevelFilter::Error,
        Some("WARN") => LevelFilter::Warn,
        Some("INFO") => LevelFilter::Info,
        Some("DEBUG") => LevelFilter::Debug,
        Some("TRACE") => LevelFilter::Trace,
        Some("OFF") => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

pub fn init() {
    static LOGGER: SimpleLogger = SimpleLogger;
    // 重复初始化时保留已有的logger
    if log::set_logger(&LOGGER).is_err() {
        return;
    }
    log::set_max_level(level_from(env::var("LOG").ok().as_deref()));
}
