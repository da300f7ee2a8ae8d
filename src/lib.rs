//! # lsb_stego 库
//!
//! 本库包含 LSB、LSBM 与 RLSB 三种图像隐写算法的核心逻辑，以及命令行工具所需的处理函数。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod image_io;
pub mod steganography;

pub use error::{Result, StegoError};
pub use steganography::{Algorithm, PixelGrid};
