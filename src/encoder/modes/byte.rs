/// Byte mode encoder (Mode 0100): 8 bits per byte, MSB first
use crate::encoder::bit_buffer::BitBuffer;

pub struct ByteEncoder;

impl ByteEncoder {
    pub fn encode(data: &[u8], out: &mut BitBuffer) {
        for &byte in data {
            out.append_bits(u32::from(byte), 8);
        }
    }
}
