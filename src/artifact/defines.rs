use super::{Artifact, RenderContext};
use crate::config::{
    HDL_DEFINES_PATH, HDL_SOURCE_PREFIX, RAM_ADDR_WIDTH_KEY, RAM_FILE_KEY, UART_BAUD_RATE_KEY,
};
use core::fmt::{self, Formatter};

/// Verilog预处理宏
pub struct HdlDefines;

impl Artifact for HdlDefines {
    fn path(&self) -> &'static str {
        HDL_DEFINES_PATH
    }

    fn comment(&self) -> &'static str {
        "//"
    }

    fn write_body(&self, f: &mut Formatter<'_>, cx: &RenderContext<'_>) -> fmt::Result {
        // RAM_FILE原样写入, 不做转义
        writeln!(
            f,
            "`define {} \"{}{}\"",
            RAM_FILE_KEY, HDL_SOURCE_PREFIX, cx.config.ram_file
        )?;
        writeln!(f, "`define {} {}", RAM_ADDR_WIDTH_KEY, cx.config.ram_addr_width)?;
        writeln!(f, "`define {} {}", UART_BAUD_RATE_KEY, cx.config.uart_baud_rate)
    }
}
