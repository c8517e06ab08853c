//! 生成文件
//!
//!

mod boot;
mod defines;
mod header;

use crate::config::GENERATED_MARKER;
use crate::configuration::Configuration;
use crate::layout::MemoryLayout;
use core::fmt::{self, Display, Formatter};

pub use boot::BootStub;
pub use defines::HdlDefines;
pub use header::RuntimeHeader;

/// 渲染所需的输入
#[derive(Copy, Clone, Debug)]
pub struct RenderContext<'a> {
    pub config: &'a Configuration,
    pub layout: &'a MemoryLayout,
}

/// 一个生成文件: 目标语言的注释符号与正文
pub trait Artifact {
    /// 相对项目根目录的路径
    fn path(&self) -> &'static str;
    /// 目标语言的行注释符号
    fn comment(&self) -> &'static str;
    fn write_body(&self, f: &mut Formatter<'_>, cx: &RenderContext<'_>) -> fmt::Result;
}

/// 按写入顺序排列的全部生成文件
pub const ARTIFACTS: &[&dyn Artifact] = &[&BootStub, &RuntimeHeader, &HdlDefines];

struct Rendered<'a> {
    artifact: &'a dyn Artifact,
    cx: &'a RenderContext<'a>,
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.artifact.comment(), GENERATED_MARKER)?;
        self.artifact.write_body(f, self.cx)
    }
}

/// 渲染完整文件内容, 首行为"generated - do not edit"标记
pub fn render(artifact: &dyn Artifact, cx: &RenderContext<'_>) -> String {
    Rendered { artifact, cx }.to_string()
}
