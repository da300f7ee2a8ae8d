//! # 图像读写模块
//!
//! 负责在磁盘图像文件与 [`PixelGrid`] 之间转换，是隐写核心之外唯一接触文件的部分。
//! 输出必须保存为无损格式，有损压缩会破坏隐藏的位。

use std::path::Path;

use image::{ColorType, DynamicImage, ImageError};
use log::info;

use crate::error::{Result, StegoError};
use crate::steganography::PixelGrid;

fn map_image_error(err: ImageError) -> StegoError {
    match err {
        ImageError::IoError(e) => StegoError::Io(e),
        other => StegoError::InvalidInput(other.to_string()),
    }
}

/// 将任意 8 位图像规范化为 RGB 像素网格。
///
/// 灰度图被扩展为三个相同的通道，透明通道被丢弃。
///
/// # Errors
///
/// 通道深度不是 8 位（16 位整数、浮点）时返回 [`StegoError::UnsupportedFormat`]。
pub fn to_grid(image: DynamicImage) -> Result<PixelGrid> {
    match image.color() {
        ColorType::Rgb8 => Ok(image.into_rgb8()),
        ColorType::L8 | ColorType::La8 | ColorType::Rgba8 => Ok(image.to_rgb8()),
        other => Err(StegoError::UnsupportedFormat(other)),
    }
}

/// 从 `path` 读取图像并转换为 RGB 像素网格。
///
/// # Errors
///
/// * 文件无法打开时返回 [`StegoError::Io`]。
/// * 文件内容无法解码时返回 [`StegoError::InvalidInput`]。
/// * 像素格式无法无损表示时返回 [`StegoError::UnsupportedFormat`]。
pub fn load(path: &Path) -> Result<PixelGrid> {
    let image = image::open(path).map_err(map_image_error)?;
    let grid = to_grid(image)?;
    info!(
        "Loaded {}x{} image from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

/// 将像素网格保存到 `path`，格式由扩展名决定。
///
/// # Errors
///
/// * 写入失败时返回 [`StegoError::Io`]。
/// * 扩展名无法识别或格式不支持时返回 [`StegoError::InvalidInput`]。
pub fn save(grid: &PixelGrid, path: &Path) -> Result<()> {
    grid.save(path).map_err(map_image_error)?;
    info!("Saved image to {}", path.display());
    Ok(())
}
