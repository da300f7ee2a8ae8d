/// 每个字节的位数。消息中的每个字符按 `u8` 处理，高位在前写入位流。
pub const BITS_PER_BYTE: usize = 8;

/// 每个像素可承载的位数：R、G、B 三个通道各 1 bit。
pub const BITS_PER_PIXEL: usize = 3;

/// 消息结束标记：追加在位流末尾的 8 个零位。
/// 解码时遇到第一个零字节即视为消息结束。
pub const DELIMITER: [bool; BITS_PER_BYTE] = [false; BITS_PER_BYTE];

/// 未指定 `--seed` 时 RLSB 使用的默认种子。
pub const DEFAULT_SEED: u64 = 12345;
