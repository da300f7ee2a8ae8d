//! # 错误类型模块
//!
//! 定义库中所有可能返回的错误。命令行层通过 `anyhow` 为其附加上下文。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// 无法解析或已损坏的图像，以及其他不合法的输入。
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 图像的通道不是 8 位深度，无法无损地映射为 RGB 像素网格。
    #[error("Unsupported pixel format: {0:?}. Only 8-bit grayscale or color images are supported.")]
    UnsupportedFormat(image::ColorType),

    /// 算法名称不在 {lsb, lsbm, rlsb} 之内。
    #[error("Unknown algorithm: '{0}'. Expected one of: lsb, lsbm, rlsb")]
    UnknownAlgorithm(String),

    /// 位流长度超过图像容量。
    #[error("Not enough space in the image to hide the message. Required: {required} bits, Available: {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    /// 来自文件系统的 I/O 错误，原样传递。
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StegoError>;
