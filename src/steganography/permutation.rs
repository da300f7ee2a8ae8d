//! # 像素访问顺序的确定性置换
//!
//! RLSB 的正确性完全依赖于编码与解码得到同一个置换，因此算法被固定为：
//!
//! 1. 以恒等序列 `[0, 1, .., count - 1]` 为起点；
//! 2. 使用 `ChaCha20Rng::seed_from_u64(seed)` 构造一个局部生成器；
//! 3. 从最后一个下标向前做 Fisher-Yates 洗牌：对 `i = count - 1 ..= 1`，
//!    取 `j = random_range(0..=i)`（以 `u64` 取值），交换 `i` 与 `j`。
//!
//! 随机区间统一使用 `u64`，保证 32 位与 64 位目标消耗相同的随机数，得到相同的置换。
//! 每次调用都会新建生成器，不读取也不修改任何全局随机状态。

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// 根据 `seed` 生成 `[0, count)` 的一个置换。
///
/// 相同的 `(seed, count)` 总是得到逐元素相同的结果，与调用次序无关。
pub fn generate(seed: u64, count: usize) -> Vec<usize> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..count).collect();

    for i in (1..count).rev() {
        let j = rng.random_range(0..=(i as u64)) as usize;
        indices.swap(i, j);
    }

    indices
}
