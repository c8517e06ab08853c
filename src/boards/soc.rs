//! SoC开发板相关参数
//!
//!

/// 地址宽度(位)
pub const ADDR_WIDTH: u32 = 32;

/// 每个RAM寻址单元的字节数
pub const RAM_UNIT_BYTES: u64 = 8;

/// LED输出寄存器
pub const MMIO_LEDS: u32 = 0xffff_ffff;
/// UART发送寄存器
pub const MMIO_UART_OUT: u32 = 0xffff_fffe;
/// UART接收寄存器
pub const MMIO_UART_IN: u32 = 0xffff_fffd;

/// IO内存映射寄存器
///
/// # 格式
/// (C变量名, 地址)
pub const MMIO: &[(&str, u32)] = &[
    ("leds", MMIO_LEDS),
    ("uart_out", MMIO_UART_OUT),
    ("uart_in", MMIO_UART_IN),
];

/// 地址空间顶端为IO保留的字节数
pub const MMIO_RESERVED_BYTES: u64 = 4;
