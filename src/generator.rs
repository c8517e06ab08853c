//! 配置文件生成器
//!
//!

use crate::artifact::{render, RenderContext, ARTIFACTS};
use crate::configuration::Configuration;
use crate::error::{Error, Result};
use crate::layout::MemoryLayout;
use log::*;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// 渲染好但尚未写入的文件
#[derive(Debug)]
pub struct Output {
    pub path: PathBuf,
    pub contents: String,
}

/// 计算内存布局并渲染全部生成文件, 不触碰文件系统
///
/// 配置错误在这里返回, 因此出错时不会写入任何文件
pub fn render_all(config: &Configuration, root: &Path) -> Result<Vec<Output>> {
    let layout = MemoryLayout::new(config.ram_addr_width)?;
    debug!("{:?}", layout);
    let cx = RenderContext {
        config,
        layout: &layout,
    };
    Ok(ARTIFACTS
        .iter()
        .map(|artifact| Output {
            path: root.join(artifact.path()),
            contents: render(*artifact, &cx),
        })
        .collect())
}

/// 生成三个文件
///
/// # 逻辑概要
/// 1. 校验配置并渲染全部内容 [`render_all`]
/// 2. 依次截断写入启动桩, C头文件, Verilog宏文件, 每个文件写完即关闭
/// 3. 返回已写入的路径
///
/// 写入中途失败时, 之前的文件已更新, 之后的文件保持原样
pub fn generate(config: &Configuration, root: &Path) -> Result<Vec<PathBuf>> {
    let outputs = render_all(config, root)?;
    let mut written = Vec::with_capacity(outputs.len());
    for output in outputs {
        write_file(&output.path, &output.contents)?;
        info!("wrote {}", output.path.display());
        written.push(output.path);
    }
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| Error::io(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| Error::io(path, e))
}

/// 对比磁盘上的文件与应生成的内容, 返回缺失或过期的路径
pub fn check(config: &Configuration, root: &Path) -> Result<Vec<PathBuf>> {
    let mut stale = Vec::new();
    for output in render_all(config, root)? {
        match fs::read(&output.path) {
            Ok(existing) if existing == output.contents.as_bytes() => {
                trace!("{} is up to date", output.path.display());
            }
            Ok(_) => {
                warn!("{} is out of date", output.path.display());
                stale.push(output.path);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("{} is missing", output.path.display());
                stale.push(output.path);
            }
            Err(e) => return Err(Error::io(output.path, e)),
        }
    }
    Ok(stale)
}

/// 确认信息中的路径列表, Verilog宏文件在前
pub fn summary() -> String {
    ARTIFACTS
        .iter()
        .rev()
        .map(|artifact| artifact.path())
        .collect::<Vec<_>>()
        .join(", ")
}
