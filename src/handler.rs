//! # 命令处理逻辑模块
//!
//! 包含处理 `encode`、`decode` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调图像 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, DecodeArgs, EncodeArgs};
use crate::constants::BITS_PER_BYTE;
use crate::image_io;
use crate::steganography::bits::{latin1_bytes, latin1_string};
use crate::steganography::{PixelGrid, capacity, check_capacity, required_bits};
use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, warn};
use std::path::Path;

/// 读取输入图像，失败时附加带有路径的上下文。
fn load_grid(path: &Path) -> Result<PixelGrid> {
    image_io::load(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责读取输入图像、检查隐写空间是否足够、调用所选算法嵌入消息，
/// 最后将结果写入输出图像文件。
///
/// # Arguments
///
/// * `args` - 包含算法、输入/输出路径、消息和种子的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入图像。
/// * 消息包含超出单字节范围的字符。
/// * 图像没有足够的空间来隐藏消息 (除非指定了 `--truncate`)。
/// * 无法写入到输出图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let grid = load_grid(&args.input)?;

    let message = latin1_bytes(&args.message).with_context(|| {
        "The message must consist of single-byte (Latin-1) characters."
    })?;
    if let Err(err) = check_capacity(&grid, &message) {
        if !args.truncate {
            return Err(err).with_context(|| {
                format!(
                    "The message does not fit into {}. \nUse a larger image or pass --truncate.",
                    args.input.to_string_lossy().red().bold()
                )
            });
        }
        warn!("{}; the message will be truncated", err);
    }

    debug!(
        "Encoding {} bytes with {} (seed {})",
        message.len(),
        args.algorithm,
        args.seed
    );
    let encoded = args.algorithm.encode(&grid, &message, args.seed);

    image_io::save(&encoded, &args.output).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;

    if args.algorithm.encode_uses_seed() {
        println!(
            "Message encoded using {} with seed {} and saved to {}",
            args.algorithm.to_string().cyan(),
            args.seed.to_string().yellow(),
            args.output.to_string_lossy().green().bold()
        );
    } else {
        println!(
            "Message encoded using {} and saved to {}",
            args.algorithm.to_string().cyan(),
            args.output.to_string_lossy().green().bold()
        );
    }

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 负责读取图像、调用所选算法提取消息并打印，每个字节对应一个字符 (Latin-1)。
/// 提取总是尽力而为：算法或种子不匹配时不会报错，只会得到无意义的文本。
///
/// # Arguments
///
/// * `args` - 包含算法、输入路径和种子的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 无法读取或解码输入图像时返回错误。
pub fn handle_decode(args: DecodeArgs) -> Result<String> {
    let grid = load_grid(&args.input)?;

    let bytes = args.algorithm.decode(&grid, args.seed);
    debug!("Recovered {} bytes with {}", bytes.len(), args.algorithm);
    let message = latin1_string(&bytes);

    if args.algorithm.decode_uses_seed() {
        println!(
            "Decoded message using {} with seed {}: {}",
            args.algorithm.to_string().cyan(),
            args.seed.to_string().yellow(),
            message.green().bold()
        );
    } else {
        println!(
            "Decoded message using {}: {}",
            args.algorithm.to_string().cyan(),
            message.green().bold()
        );
    }

    Ok(message)
}

/// 处理 'Capacity' 命令的执行逻辑。
///
/// 打印图像尺寸、可用位数以及可隐藏的最大消息字节数 (不含结束标记)。
///
/// # Errors
///
/// 无法读取或解码输入图像时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<usize> {
    let grid = load_grid(&args.input)?;

    let bits = capacity(&grid);
    let max_bytes = (bits / BITS_PER_BYTE).saturating_sub(required_bits(&[]) / BITS_PER_BYTE);

    println!(
        "{}: {}x{} pixels, {} bits, up to {} message bytes",
        args.input.to_string_lossy().green().bold(),
        grid.width(),
        grid.height(),
        bits.to_string().cyan(),
        max_bytes.to_string().cyan().bold()
    );

    Ok(max_bytes)
}
