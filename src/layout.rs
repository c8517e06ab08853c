//! 内存布局
//!
//!

use crate::config::{
    ADDR_WIDTH, MAX_RAM_ADDR_WIDTH, MMIO_RESERVED_BYTES, RAM_ADDR_WIDTH_KEY, RAM_UNIT_BYTES,
};
use crate::error::{Error, Result};
use core::fmt::{self, Debug, Display, Formatter};

/// 初始栈顶地址
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct StackTop(pub u32);

impl Display for StackTop {
    /// 小写十六进制, 带`0x`前缀
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl Debug for StackTop {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("SP:{:#x}", self.0))
    }
}

/// 由`RAM_ADDR_WIDTH`推导出的内存布局
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MemoryLayout {
    pub ram_addr_width: u32,
    /// RAM总字节数
    pub ram_bytes: u64,
    pub stack_top: StackTop,
}

impl MemoryLayout {
    /// 计算内存布局
    ///
    /// # 逻辑概要
    /// 1. RAM字节数 = `2^ram_addr_width` * [`RAM_UNIT_BYTES`]
    /// 2. 栈顶 = RAM字节数 - [`MMIO_RESERVED_BYTES`], 为地址空间顶端的IO寄存器让出位置
    /// 3. 栈顶必须能用[`ADDR_WIDTH`]位表示, 否则返回配置错误
    pub fn new(ram_addr_width: u32) -> Result<Self> {
        if ram_addr_width > MAX_RAM_ADDR_WIDTH {
            return Err(Error::config(
                RAM_ADDR_WIDTH_KEY,
                format!(
                    "{} exceeds the {}-bit address space (maximum {})",
                    ram_addr_width, ADDR_WIDTH, MAX_RAM_ADDR_WIDTH
                ),
            ));
        }
        let ram_bytes = (1u64 << ram_addr_width) * RAM_UNIT_BYTES;
        let top = ram_bytes - MMIO_RESERVED_BYTES;
        let top = u32::try_from(top).map_err(|_| {
            Error::config(
                RAM_ADDR_WIDTH_KEY,
                format!("top of stack {:#x} does not fit in {} bits", top, ADDR_WIDTH),
            )
        })?;
        Ok(Self {
            ram_addr_width,
            ram_bytes,
            stack_top: StackTop(top),
        })
    }
}
