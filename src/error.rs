//! 错误类型
//!
//!

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// 配置项缺失、类型错误或越界
    #[error("configuration error: {key}: {reason}")]
    Configuration { key: String, reason: String },
    /// 配置文件中无法解析的行
    #[error("configuration error: {}:{}: {}", .path.display(), .line, .reason)]
    Syntax {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// `check`发现过期或缺失的生成文件
    #[error("generated files are out of date: {}", display_paths(.0))]
    Stale(Vec<PathBuf>),
}

impl Error {
    pub fn config(key: &str, reason: impl Into<String>) -> Self {
        Error::Configuration {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// 配置类错误发生在写任何文件之前
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. } | Error::Syntax { .. })
    }
}

pub(crate) fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
