use super::{Artifact, RenderContext};
use crate::config::{BOOT_ENTRY, BOOT_STUB_PATH, BOOT_TARGET};
use core::fmt::{self, Formatter};

/// 启动桩: 设置栈指针后跳转到`run`, 不再返回
pub struct BootStub;

impl Artifact for BootStub {
    fn path(&self) -> &'static str {
        BOOT_STUB_PATH
    }

    fn comment(&self) -> &'static str {
        "#"
    }

    fn write_body(&self, f: &mut Formatter<'_>, cx: &RenderContext<'_>) -> fmt::Result {
        writeln!(f, ".global {}", BOOT_ENTRY)?;
        writeln!(f, "{}:", BOOT_ENTRY)?;
        writeln!(f, "    li sp, {}", cx.layout.stack_top)?;
        writeln!(f, "    jal ra, {}", BOOT_TARGET)
    }
}
