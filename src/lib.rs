//! 硬件配置生成器
//!
//! 从`RAM_ADDR_WIDTH`, `RAM_FILE`, `UART_BAUD_RATE`三个配置项生成
//! 启动桩`os/os_start.S`, C头文件`os/os_config.h`与Verilog宏文件`src/Configuration.v`

pub mod artifact;
pub mod config;
pub mod configuration;
pub mod error;
pub mod generator;
pub mod layout;
pub mod logging;

#[path = "boards/soc.rs"]
mod board;

pub use configuration::{Assignments, Configuration};
pub use error::{Error, Result};
pub use generator::{check, generate};
pub use layout::MemoryLayout;
