//! LSB：按行优先顺序直接覆盖最低有效位。

use log::debug;

use super::bits::{from_bits, to_bits};
use super::{PixelGrid, embed_replace, extract, row_major};

/// 将消息嵌入图像副本并返回。
///
/// 每个像素依次消耗最多 3 bit（R、G、B），位流耗尽后停止，其余像素不变。
/// 位流超出容量时消息被静默截断。
pub fn encode(grid: &PixelGrid, message: &[u8]) -> PixelGrid {
    let bits = to_bits(message);
    let mut encoded = grid.clone();
    let coords = row_major(&encoded);
    let visited = embed_replace(&mut encoded, coords, &bits);
    debug!("LSB embedded {} bits into {} pixels", bits.len(), visited);
    encoded
}

/// 按行优先顺序读取所有像素的最低有效位并还原消息。
pub fn decode(grid: &PixelGrid) -> Vec<u8> {
    from_bits(&extract(grid, row_major(grid)))
}
