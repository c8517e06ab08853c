pub const GENERATED_MARKER: &str = "generated - do not edit";
pub const DEFAULT_CONFIG_FILE: &str = "configuration.py";

pub const BOOT_STUB_PATH: &str = "os/os_start.S";
pub const RUNTIME_HEADER_PATH: &str = "os/os_config.h";
pub const HDL_DEFINES_PATH: &str = "src/Configuration.v";

/// HDL源码目录相对项目根目录的前缀
pub const HDL_SOURCE_PREFIX: &str = "../";

pub const BOOT_ENTRY: &str = "_start";
pub const BOOT_TARGET: &str = "run";

/// 栈顶地址仍落在32位地址空间内的最大`RAM_ADDR_WIDTH`
pub const MAX_RAM_ADDR_WIDTH: u32 = 29;

pub use crate::board::{ADDR_WIDTH, MMIO, MMIO_RESERVED_BYTES, RAM_UNIT_BYTES};

pub const RAM_ADDR_WIDTH_KEY: &str = "RAM_ADDR_WIDTH";
pub const RAM_FILE_KEY: &str = "RAM_FILE";
pub const UART_BAUD_RATE_KEY: &str = "UART_BAUD_RATE";
