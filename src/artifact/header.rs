use super::{Artifact, RenderContext};
use crate::config::{MMIO, RUNTIME_HEADER_PATH};
use core::fmt::{self, Formatter};

/// 固件使用的IO寄存器指针, 与配置无关
pub struct RuntimeHeader;

impl Artifact for RuntimeHeader {
    fn path(&self) -> &'static str {
        RUNTIME_HEADER_PATH
    }

    fn comment(&self) -> &'static str {
        "//"
    }

    fn write_body(&self, f: &mut Formatter<'_>, _cx: &RenderContext<'_>) -> fmt::Result {
        for (name, addr) in MMIO {
            writeln!(
                f,
                "volatile unsigned char *{} = (unsigned char *){:#x};",
                name, addr
            )?;
        }
        Ok(())
    }
}
