//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

use crate::constants::DEFAULT_SEED;
use crate::steganography::Algorithm;

/// 一款基于 LSB 系列隐写算法 (LSB、LSBM、RLSB) 的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或恢复文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB 系列隐写算法 (LSB、LSBM、RLSB) 的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或恢复文本。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (隐藏)、decode (恢复) 和 capacity (容量查询)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 使用指定算法将消息隐藏到图像中。
    Encode(EncodeArgs),

    /// 使用指定算法从图像中恢复隐藏的消息。
    Decode(DecodeArgs),

    /// 显示图像尺寸以及可隐藏的最大容量。
    Capacity(CapacityArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 隐写算法：lsb、lsbm 或 rlsb。
    pub algorithm: Algorithm,

    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    pub input: PathBuf,

    /// 隐写完成后，保存结果图像的输出路径。必须是无损格式。
    pub output: PathBuf,

    /// 要隐藏的文本，每个字符必须在 U+0000 到 U+00FF 之间 (Latin-1)。
    pub message: String,

    /// 种子：决定 RLSB 的像素顺序与 LSBM 的 ±1 选择 (LSB 忽略此参数)。
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// 容量不足时静默截断消息，而不是报错。
    #[arg(long)]
    pub truncate: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 隐写算法：lsb、lsbm 或 rlsb。
    pub algorithm: Algorithm,

    /// 已隐藏消息的图像文件路径。
    pub input: PathBuf,

    /// RLSB 使用的种子 (其他算法忽略此参数)。
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要查询的图像文件路径。
    pub input: PathBuf,
}
