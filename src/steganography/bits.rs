//! 消息与位流之间的转换。

use crate::constants::{BITS_PER_BYTE, DELIMITER};
use crate::error::{Result, StegoError};

/// 将文本转换为单字节码元：U+0000 到 U+00FF 的字符各对应一个字节 (Latin-1)。
///
/// # Errors
///
/// 文本包含超出单字节范围的字符时返回 [`StegoError::InvalidInput`]。
pub fn latin1_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| {
            u8::try_from(c).map_err(|_| {
                StegoError::InvalidInput(format!(
                    "character '{}' (U+{:04X}) does not fit in a single byte",
                    c, c as u32
                ))
            })
        })
        .collect()
}

/// 将字节逐个映射为 U+0000 到 U+00FF 的字符，与 [`latin1_bytes`] 互逆。
pub fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// 将消息转换为带结束标记的位流。
///
/// 每个字节按高位在前展开为 8 bit，最后无条件追加 8 个零位。
/// 消息本身若含有零字节，解码时会在该处提前截断。
pub fn to_bits(message: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity((message.len() + 1) * BITS_PER_BYTE);
    for &byte in message {
        bits.extend((0..BITS_PER_BYTE).rev().map(|i| (byte >> i) & 1 == 1));
    }
    bits.extend_from_slice(&DELIMITER);
    bits
}

/// 将位流还原为消息。
///
/// 按 8 bit 分组（末尾不足 8 bit 的部分被丢弃），返回第一个零字节之前的所有字节。
/// 没有找到零字节时返回全部字节，从不失败。
pub fn from_bits(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(BITS_PER_BYTE)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8))
        .take_while(|&byte| byte != 0)
        .collect()
}
