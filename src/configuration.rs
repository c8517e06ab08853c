//! 构建配置
//!
//! 配置模块由`NAME = VALUE`形式的赋值语句组成, 例如:
//!
//! ```text
//! RAM_ADDR_WIDTH = 16
//! RAM_FILE = 'ram.hex'
//! UART_BAUD_RATE = 115200
//! ```

use crate::config::{RAM_ADDR_WIDTH_KEY, RAM_FILE_KEY, UART_BAUD_RATE_KEY};
use crate::error::{Error, Result};
use log::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 生成器的全部输入, 只读
///
/// 只有`ram_addr_width`参与计算, 其余两项按配置中的写法原样输出
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Configuration {
    /// RAM容量的对数, 以8字节为单位
    pub ram_addr_width: u32,
    /// RAM初始化镜像, 相对HDL源码目录
    pub ram_file: String,
    pub uart_baud_rate: String,
}

/// 赋值语句右侧的值
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Int(i128),
    /// 超出`i128`的整数字面量
    Huge(String),
    Str(String),
    /// 其他表达式, 原样保留
    Other(String),
}

impl Value {
    /// 解析字面量, 失败返回`None`表示引号未闭合
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(quote) = raw.chars().next().filter(|c| *c == '\'' || *c == '"') {
            let rest = &raw[1..];
            let end = rest.find(quote)?;
            let tail = rest[end + 1..].trim_start();
            if tail.is_empty() || tail.starts_with('#') {
                return Some(Value::Str(rest[..end].to_string()));
            }
            return Some(Value::Other(raw.to_string()));
        }
        let expr = match raw.find('#') {
            Some(i) => raw[..i].trim_end(),
            None => raw,
        };
        Some(match parse_int_literal(expr) {
            Some(IntLiteral::Fits(n)) => Value::Int(n),
            Some(IntLiteral::TooLarge) => Value::Huge(expr.to_string()),
            None => Value::Other(expr.to_string()),
        })
    }

    /// 写入生成文件时的文本
    pub fn text(&self) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Huge(s) | Value::Str(s) | Value::Other(s) => s.clone(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Value::Int(n) => format!("integer {}", n),
            Value::Huge(s) => format!("integer {}", s),
            Value::Str(s) => format!("string {:?}", s),
            Value::Other(s) => format!("`{}`", s),
        }
    }
}

/// 语法合法的整数字面量
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IntLiteral {
    Fits(i128),
    TooLarge,
}

/// 解析整数字面量: 十进制或`0x`/`0o`/`0b`前缀, 允许`_`分隔
pub fn parse_int_literal(s: &str) -> Option<IntLiteral> {
    let s = s.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(d) => (true, d),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let lower = digits.to_ascii_lowercase();
    let (radix, body) = if let Some(b) = lower.strip_prefix("0x") {
        (16, b)
    } else if let Some(b) = lower.strip_prefix("0o") {
        (8, b)
    } else if let Some(b) = lower.strip_prefix("0b") {
        (2, b)
    } else {
        (10, lower.as_str())
    };
    if body.is_empty() || body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return None;
    }
    let body: String = body.chars().filter(|c| *c != '_').collect();
    // from_str_radix本身接受符号, 这里只允许数字
    if !body.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // 数字已校验, 解析失败只可能是溢出
    Some(match i128::from_str_radix(&body, radix) {
        Ok(n) => IntLiteral::Fits(if negative { -n } else { n }),
        Err(_) => IntLiteral::TooLarge,
    })
}

/// 解析能放进`i128`的整数字面量
pub fn parse_int(s: &str) -> Option<i128> {
    match parse_int_literal(s)? {
        IntLiteral::Fits(n) => Some(n),
        IntLiteral::TooLarge => None,
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// 配置模块中的全部赋值, 后出现的覆盖先出现的
#[derive(Clone, Debug, Default)]
pub struct Assignments {
    values: BTreeMap<String, Value>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取并解析配置模块
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&text, path)
    }

    /// 解析配置模块文本, `origin`仅用于错误信息
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let syntax = |line: usize, reason: &str| Error::Syntax {
            path: PathBuf::from(origin),
            line,
            reason: reason.to_string(),
        };
        let mut assignments = Self::new();
        for (i, line) in text.lines().enumerate() {
            let lineno = i + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (name, raw) = line
                .split_once('=')
                .ok_or_else(|| syntax(lineno, "expected `NAME = VALUE`"))?;
            let name = name.trim();
            if !is_identifier(name) {
                return Err(syntax(lineno, &format!("invalid name `{}`", name)));
            }
            let value = Value::parse(raw).ok_or_else(|| syntax(lineno, "unterminated string"))?;
            trace!("{}:{} {} = {:?}", origin.display(), lineno, name, value);
            assignments.set(name, value);
        }
        Ok(assignments)
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// 以命令行参数覆盖整数配置项
    pub fn override_int(&mut self, name: &str, raw: &str) -> Result<()> {
        let value = match parse_int_literal(raw) {
            Some(IntLiteral::Fits(n)) => Value::Int(n),
            Some(IntLiteral::TooLarge) => Value::Huge(raw.trim().to_string()),
            None => {
                return Err(Error::config(
                    name,
                    format!("expected an integer, found `{}`", raw),
                ))
            }
        };
        self.set(name, value);
        Ok(())
    }

    /// 以命令行参数覆盖原样输出的配置项
    pub fn override_text(&mut self, name: &str, raw: &str) {
        self.set(name, Value::Str(raw.to_string()));
    }

    fn require(&self, name: &str) -> Result<&Value> {
        self.get(name)
            .ok_or_else(|| Error::config(name, "missing from configuration"))
    }

    fn require_u32(&self, name: &str) -> Result<u32> {
        match self.require(name)? {
            Value::Int(n) if *n < 0 => Err(Error::config(
                name,
                format!("must be non-negative, found {}", n),
            )),
            Value::Int(n) => u32::try_from(*n)
                .map_err(|_| Error::config(name, format!("{} is out of range", n))),
            Value::Huge(s) => Err(Error::config(name, format!("{} is out of range", s))),
            other => Err(Error::config(
                name,
                format!("expected a non-negative integer, found {}", other.describe()),
            )),
        }
    }

    fn require_text(&self, name: &str) -> Result<String> {
        Ok(self.require(name)?.text())
    }

    /// 提取生成器需要的三个配置项, 其余名字忽略
    pub fn into_configuration(self) -> Result<Configuration> {
        let config = Configuration {
            ram_addr_width: self.require_u32(RAM_ADDR_WIDTH_KEY)?,
            ram_file: self.require_text(RAM_FILE_KEY)?,
            uart_baud_rate: self.require_text(UART_BAUD_RATE_KEY)?,
        };
        for name in self.values.keys() {
            if ![RAM_ADDR_WIDTH_KEY, RAM_FILE_KEY, UART_BAUD_RATE_KEY].contains(&name.as_str()) {
                debug!("ignoring unused configuration value {}", name);
            }
        }
        Ok(config)
    }
}

impl Configuration {
    /// 从配置模块加载
    pub fn load(path: &Path) -> Result<Self> {
        Assignments::load(path)?.into_configuration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Configuration> {
        Assignments::parse(text, Path::new("configuration.py"))?.into_configuration()
    }

    #[test]
    fn parses_module() {
        let config = parse(
            "# generated by hand\n\
             RAM_ADDR_WIDTH = 16\n\
             RAM_FILE = 'ram.hex'\n\
             UART_BAUD_RATE = 115200  # bits per second\n",
        )
        .unwrap();
        assert_eq!(
            config,
            Configuration {
                ram_addr_width: 16,
                ram_file: "ram.hex".to_string(),
                uart_baud_rate: "115200".to_string(),
            }
        );
    }

    #[test]
    fn double_quotes_and_hash_inside_string() {
        let config =
            parse("RAM_ADDR_WIDTH=0x10\nRAM_FILE = \"prog#1.hex\" # image\nUART_BAUD_RATE=9_600\n")
                .unwrap();
        assert_eq!(config.ram_addr_width, 16);
        assert_eq!(config.ram_file, "prog#1.hex");
        assert_eq!(config.uart_baud_rate, "9600");
    }

    #[test]
    fn later_assignment_wins_and_unknown_names_ignored() {
        let config = parse(
            "RAM_ADDR_WIDTH = 8\nRAM_ADDR_WIDTH = 12\nCLOCK = 'fast'\n\
             RAM_FILE = 'a.hex'\nUART_BAUD_RATE = 1\n",
        )
        .unwrap();
        assert_eq!(config.ram_addr_width, 12);
    }

    #[test]
    fn missing_width() {
        let err = parse("RAM_FILE = 'a.hex'\nUART_BAUD_RATE = 1\n").unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("RAM_ADDR_WIDTH"));
    }

    #[test]
    fn negative_width() {
        let err = parse("RAM_ADDR_WIDTH = -1\nRAM_FILE = 'a.hex'\nUART_BAUD_RATE = 1\n")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: RAM_ADDR_WIDTH: must be non-negative, found -1"
        );
    }

    #[test]
    fn non_numeric_width() {
        for value in ["'16'", "sixteen", "16.0", "2**4"] {
            let text = format!(
                "RAM_ADDR_WIDTH = {}\nRAM_FILE = 'a.hex'\nUART_BAUD_RATE = 1\n",
                value
            );
            let err = parse(&text).unwrap_err();
            assert!(err.is_configuration(), "{}", value);
            assert!(err.to_string().contains("RAM_ADDR_WIDTH"), "{}", value);
        }
    }

    #[test]
    fn ram_file_and_baud_rate_pass_through() {
        let config = parse(
            "RAM_ADDR_WIDTH = 4\nRAM_FILE = 7\nUART_BAUD_RATE = 5000000000\n",
        )
        .unwrap();
        assert_eq!(config.ram_file, "7");
        assert_eq!(config.uart_baud_rate, "5000000000");

        let config =
            parse("RAM_ADDR_WIDTH = 4\nRAM_FILE = ram\nUART_BAUD_RATE = -1\n").unwrap();
        assert_eq!(config.ram_file, "ram");
        assert_eq!(config.uart_baud_rate, "-1");

        let config = parse(
            "RAM_ADDR_WIDTH = 4\nRAM_FILE = 'a.hex'\nUART_BAUD_RATE = 99999999999999999999999999999999999999999\n",
        )
        .unwrap();
        assert_eq!(config.uart_baud_rate, "99999999999999999999999999999999999999999");
    }

    #[test]
    fn missing_baud_rate() {
        let err = parse("RAM_ADDR_WIDTH = 4\nRAM_FILE = 'a.hex'\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: UART_BAUD_RATE: missing from configuration"
        );
    }

    #[test]
    fn oversized_width_is_out_of_range() {
        let err = parse(
            "RAM_ADDR_WIDTH = 99999999999999999999999999999999999999999\n\
             RAM_FILE = 'a.hex'\nUART_BAUD_RATE = 1\n",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: RAM_ADDR_WIDTH: \
             99999999999999999999999999999999999999999 is out of range"
        );

        let mut a = Assignments::new();
        a.override_int(RAM_ADDR_WIDTH_KEY, "99999999999999999999999999999999999999999")
            .unwrap();
        a.override_text(RAM_FILE_KEY, "a.hex");
        a.override_text(UART_BAUD_RATE_KEY, "1");
        let err = a.into_configuration().unwrap_err();
        assert!(err.to_string().contains("is out of range"));
    }

    #[test]
    fn syntax_errors_report_line() {
        let err = Assignments::parse("RAM_ADDR_WIDTH = 4\nimport os\n", Path::new("cfg.py"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: cfg.py:2: expected `NAME = VALUE`"
        );
        let err = Assignments::parse("RAM_FILE = 'a.hex\n", Path::new("cfg.py")).unwrap_err();
        assert!(err.to_string().contains("unterminated string"));
        let err = Assignments::parse("1X = 4\n", Path::new("cfg.py")).unwrap_err();
        assert!(err.to_string().contains("invalid name"));
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut a =
            Assignments::parse("RAM_ADDR_WIDTH = 4\nRAM_FILE = 'a.hex'\n", Path::new("c.py"))
                .unwrap();
        a.override_int(RAM_ADDR_WIDTH_KEY, "10").unwrap();
        a.override_text(UART_BAUD_RATE_KEY, "115200");
        a.override_text(RAM_FILE_KEY, "b.hex");
        let config = a.into_configuration().unwrap();
        assert_eq!(config.ram_addr_width, 10);
        assert_eq!(config.ram_file, "b.hex");
        assert_eq!(config.uart_baud_rate, "115200");

        let err = Assignments::new()
            .override_int(RAM_ADDR_WIDTH_KEY, "wide")
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn integer_literals() {
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("0xFF"), Some(255));
        assert_eq!(parse_int("0b101"), Some(5));
        assert_eq!(parse_int("0o17"), Some(15));
        assert_eq!(parse_int("1_000"), Some(1000));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("1__0"), None);
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("--3"), None);
        assert_eq!(parse_int("+-3"), None);
        assert_eq!(
            parse_int_literal("340282366920938463463374607431768211456"),
            Some(IntLiteral::TooLarge)
        );
        assert_eq!(parse_int("340282366920938463463374607431768211456"), None);
        assert_eq!(parse_int(""), None);
    }
}
