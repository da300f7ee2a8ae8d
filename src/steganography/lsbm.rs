//! LSBM（LSB matching）：以 ±1 调整通道值来匹配目标奇偶性。
//!
//! 通道的奇偶性已与目标位一致时不做任何修改；否则随机选择加 1 或减 1。
//! 运算按模 256 回绕：`0 - 1 = 255`、`255 + 1 = 0`。回绕时可见数值的变化远大于 1，
//! 但奇偶性依然正确，因此这里不做钳制。
//!
//! 提取只读取奇偶性，与 [`lsb::decode`](super::lsb::decode) 完全相同。

use log::debug;
use rand::Rng;

use super::bits::to_bits;
use super::{PixelGrid, embed_with, lsb, row_major};

/// 使用线程本地随机数生成器决定 ±1，将消息嵌入图像副本并返回。
///
/// 输出不可复现；需要由种子决定输出时使用 [`encode_with_rng`]。
pub fn encode(grid: &PixelGrid, message: &[u8]) -> PixelGrid {
    encode_with_rng(grid, message, &mut rand::rng())
}

/// 与 [`encode`] 相同，但 ±1 的选择来自调用方提供的生成器。
///
/// 固定种子的生成器可以得到可复现的输出。
pub fn encode_with_rng<R: Rng>(grid: &PixelGrid, message: &[u8], rng: &mut R) -> PixelGrid {
    let bits = to_bits(message);
    let mut encoded = grid.clone();
    let mut adjusted = 0usize;

    embed_with(&mut encoded, row_major(grid), &bits, |channel, bit| {
        if (*channel & 1 == 1) != bit {
            *channel = if rng.random_bool(0.5) {
                channel.wrapping_add(1)
            } else {
                channel.wrapping_sub(1)
            };
            adjusted += 1;
        }
    });

    debug!("LSBM embedded {} bits, adjusted {} channels", bits.len(), adjusted);
    encoded
}

/// 提取消息，只依赖奇偶性。
pub fn decode(grid: &PixelGrid) -> Vec<u8> {
    lsb::decode(grid)
}
