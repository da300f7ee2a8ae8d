//! # 隐写核心模块
//!
//! 三种可互换的嵌入/提取算法共享同一套位流格式（见 [`bits`]）：
//!
//! * [`lsb`]  - 按行优先顺序直接替换每个通道的最低有效位。
//! * [`lsbm`] - 按行优先顺序以 ±1 调整通道值来匹配目标奇偶性。
//! * [`rlsb`] - 与 LSB 相同的替换方式，但按种子生成的置换顺序访问像素。
//!
//! 所有编码函数都在副本上操作并返回新的像素网格，调用方的原图永远不会被修改。
//! 容量不足时核心函数会静默截断；需要严格检查的调用方应先调用 [`check_capacity`]。

pub mod bits;
pub mod lsb;
pub mod lsbm;
pub mod permutation;
pub mod rlsb;

use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::constants::{BITS_PER_BYTE, BITS_PER_PIXEL};
use crate::error::{Result, StegoError};

/// 8 位 RGB 像素网格，每个像素三个通道，取值范围 [0, 255]。
pub type PixelGrid = image::RgbImage;

/// 图像可承载的总位数：`3 * width * height`。
pub fn capacity(grid: &PixelGrid) -> usize {
    grid.width() as usize * grid.height() as usize * BITS_PER_PIXEL
}

/// 嵌入 `message` 所需的位数，包含 8 bit 结束标记。
pub fn required_bits(message: &[u8]) -> usize {
    (message.len() + 1) * BITS_PER_BYTE
}

/// 检查消息能否完整嵌入图像。
///
/// # Errors
///
/// 所需位数超过 [`capacity`] 时返回 [`StegoError::CapacityExceeded`]。
pub fn check_capacity(grid: &PixelGrid, message: &[u8]) -> Result<()> {
    let required = required_bits(message);
    let available = capacity(grid);
    if required > available {
        return Err(StegoError::CapacityExceeded {
            required,
            available,
        });
    }
    Ok(())
}

/// 行优先的像素坐标序列（外层 y，内层 x）。
pub(crate) fn row_major(grid: &PixelGrid) -> impl Iterator<Item = (u32, u32)> + use<> {
    let (width, height) = grid.dimensions();
    (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
}

/// 依次访问 `coords` 中的像素，对每个通道调用 `apply(channel, bit)` 写入位流。
///
/// 位流耗尽后立即停止，剩余像素与当前像素中未用到的通道保持不变。
/// 返回被访问的像素数。
pub(crate) fn embed_with<I, F>(grid: &mut PixelGrid, coords: I, bits: &[bool], mut apply: F) -> usize
where
    I: IntoIterator<Item = (u32, u32)>,
    F: FnMut(&mut u8, bool),
{
    let mut cursor = bits.iter();
    let mut visited = 0;

    for (x, y) in coords {
        if cursor.len() == 0 {
            break;
        }
        let pixel = grid.get_pixel_mut(x, y);
        for (channel, &bit) in pixel.0.iter_mut().zip(cursor.by_ref()) {
            apply(channel, bit);
        }
        visited += 1;
    }

    visited
}

/// 用位流直接覆盖各通道的最低有效位，见 [`embed_with`]。
pub(crate) fn embed_replace<I>(grid: &mut PixelGrid, coords: I, bits: &[bool]) -> usize
where
    I: IntoIterator<Item = (u32, u32)>,
{
    embed_with(grid, coords, bits, |channel, bit| {
        *channel = (*channel & !1) | bit as u8;
    })
}

/// 按 `coords` 的顺序读取每个像素 R、G、B 通道的最低有效位。
pub(crate) fn extract<I>(grid: &PixelGrid, coords: I) -> Vec<bool>
where
    I: IntoIterator<Item = (u32, u32)>,
{
    coords
        .into_iter()
        .flat_map(|(x, y)| grid.get_pixel(x, y).0.map(|channel| channel & 1 == 1))
        .collect()
}

/// 可选的隐写算法。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Lsb,
    Lsbm,
    Rlsb,
}

impl Algorithm {
    /// 使用该算法嵌入消息。
    ///
    /// `seed` 决定 RLSB 的像素顺序，以及 LSBM 的 ±1 选择
    /// （`ChaCha20Rng::seed_from_u64(seed)`），LSB 忽略它。
    /// 相同的输入、消息与种子总是得到相同的输出。
    pub fn encode(self, grid: &PixelGrid, message: &[u8], seed: u64) -> PixelGrid {
        match self {
            Algorithm::Lsb => lsb::encode(grid, message),
            Algorithm::Lsbm => {
                lsbm::encode_with_rng(grid, message, &mut ChaCha20Rng::seed_from_u64(seed))
            }
            Algorithm::Rlsb => rlsb::encode(grid, message, seed),
        }
    }

    /// 使用该算法提取消息。`seed` 只对 RLSB 生效。
    pub fn decode(self, grid: &PixelGrid, seed: u64) -> Vec<u8> {
        match self {
            Algorithm::Lsb => lsb::decode(grid),
            Algorithm::Lsbm => lsbm::decode(grid),
            Algorithm::Rlsb => rlsb::decode(grid, seed),
        }
    }

    /// 编码时是否使用种子。
    pub fn encode_uses_seed(self) -> bool {
        matches!(self, Algorithm::Lsbm | Algorithm::Rlsb)
    }

    /// 解码时是否使用种子。LSBM 的提取只读奇偶性，与种子无关。
    pub fn decode_uses_seed(self) -> bool {
        self == Algorithm::Rlsb
    }
}

impl FromStr for Algorithm {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lsb" => Ok(Algorithm::Lsb),
            "lsbm" => Ok(Algorithm::Lsbm),
            "rlsb" => Ok(Algorithm::Rlsb),
            _ => Err(StegoError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Lsb => "LSB",
            Algorithm::Lsbm => "LSBM",
            Algorithm::Rlsb => "RLSB",
        };
        f.write_str(name)
    }
}
