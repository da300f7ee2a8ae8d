//! RLSB：按种子决定的像素顺序直接覆盖最低有效位。
//!
//! 编码与解码必须使用同一个种子。种子错误不会产生任何错误信号，只会得到无意义的输出。

use log::debug;

use super::bits::{from_bits, to_bits};
use super::{PixelGrid, embed_replace, extract, permutation};

/// 按 `seed` 生成的顺序列出所有像素坐标。
///
/// 置换下标 `i` 对应行优先坐标 `(i % width, i / width)`。
fn permuted_coords(grid: &PixelGrid, seed: u64) -> Vec<(u32, u32)> {
    let (width, height) = grid.dimensions();
    let count = width as usize * height as usize;
    permutation::generate(seed, count)
        .into_iter()
        .map(|index| ((index % width as usize) as u32, (index / width as usize) as u32))
        .collect()
}

/// 将消息嵌入图像副本并返回。
///
/// 像素按置换顺序访问，每个像素消耗最多 3 bit；位流耗尽后剩余像素不变。
pub fn encode(grid: &PixelGrid, message: &[u8], seed: u64) -> PixelGrid {
    let bits = to_bits(message);
    let mut encoded = grid.clone();
    let coords = permuted_coords(grid, seed);
    let visited = embed_replace(&mut encoded, coords, &bits);
    debug!(
        "RLSB embedded {} bits into {} pixels with seed {}",
        bits.len(),
        visited,
        seed
    );
    encoded
}

/// 重新计算同一置换，按该顺序读取全部像素并还原消息。
///
/// 解码方不知道消息长度，因此总是访问所有像素。
pub fn decode(grid: &PixelGrid, seed: u64) -> Vec<u8> {
    from_bits(&extract(grid, permuted_coords(grid, seed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steganography::lsb;
    use image::Rgb;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn noise(width: u32, height: u32, seed: u64) -> PixelGrid {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        PixelGrid::from_fn(width, height, |_, _| Rgb(rng.random()))
    }

    #[test]
    fn round_trip_with_default_seed() {
        let grid = PixelGrid::from_pixel(100, 100, Rgb([255, 255, 255]));
        let encoded = encode(&grid, b"Hello, RLSB!", 12345);
        assert_eq!(decode(&encoded, 12345), b"Hello, RLSB!");
    }

    #[test]
    fn round_trip_across_seeds() {
        let grid = noise(32, 24, 5);
        for seed in [0, 1, 42, 12345, u64::MAX] {
            let encoded = encode(&grid, b"seeded message", seed);
            assert_eq!(decode(&encoded, seed), b"seeded message", "seed {}", seed);
        }
    }

    #[test]
    fn coordinates_cover_every_pixel_once() {
        let grid = PixelGrid::new(7, 5);
        let mut coords = permuted_coords(&grid, 12345);
        coords.sort_unstable();
        let mut expected: Vec<_> = (0..7).flat_map(|x| (0..5).map(move |y| (x, y))).collect();
        expected.sort_unstable();
        assert_eq!(coords, expected);
    }

    #[test]
    fn only_visited_pixels_change() {
        let grid = noise(10, 10, 9);
        let encoded = encode(&grid, b"Hi", 12345);
        // "Hi" 加结束标记共 24 bit，只会访问置换中的前 8 个像素
        let visited: Vec<_> = permuted_coords(&grid, 12345).into_iter().take(8).collect();
        for (x, y, pixel) in encoded.enumerate_pixels() {
            if !visited.contains(&(x, y)) {
                assert_eq!(pixel, grid.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn wrong_seed_does_not_recover_message() {
        let grid = noise(40, 40, 11);
        let encoded = encode(&grid, b"attack at dawn", 12345);
        assert_ne!(decode(&encoded, 54321), b"attack at dawn");
    }

    #[test]
    fn plain_lsb_cannot_read_permuted_embedding() {
        let grid = noise(40, 40, 13);
        let encoded = encode(&grid, b"attack at dawn", 12345);
        assert_ne!(lsb::decode(&encoded), b"attack at dawn");
    }

    #[test]
    fn original_grid_is_untouched() {
        let grid = noise(10, 10, 17);
        let copy = grid.clone();
        let _ = encode(&grid, b"copy on encode", 1);
        assert_eq!(grid, copy);
    }

    #[test]
    fn exact_capacity_round_trips() {
        // 8 像素 = 24 bit = "Hi" + 结束标记，置换会访问全部像素
        let grid = noise(4, 2, 19);
        assert_eq!(decode(&encode(&grid, b"Hi", 12345), 12345), b"Hi");
    }

    #[test]
    fn overflow_truncates_to_whole_bytes() {
        let grid = noise(4, 2, 23);
        assert_eq!(decode(&encode(&grid, b"abc", 12345), 12345), b"abc");
        assert_eq!(decode(&encode(&grid, b"abcd", 12345), 12345), b"abc");

        // 3x1 像素 = 9 bit，只有第一个字节完整
        let narrow = noise(3, 1, 29);
        assert_eq!(decode(&encode(&narrow, b"ab", 7), 7), b"a");
    }
}
