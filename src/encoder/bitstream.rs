/// Data codeword assembly: headers, payloads, terminator and padding
use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::capacity::CapacityPlan;
use crate::encoder::segment::Segment;
use crate::error::{QrError, Result};

/// Pad bytes alternated after the terminator
const PAD_BYTES: [u32; 2] = [0xEC, 0x11];

pub struct BitstreamAssembler;

impl BitstreamAssembler {
    /// Concatenate `segments` at the planned version and pad the result to
    /// exactly the data capacity of the planned version and level.
    pub fn assemble_bits(segments: &[Segment], plan: &CapacityPlan) -> Result<BitBuffer> {
        let capacity_bits = plan.capacity_bits();
        let mut bb = BitBuffer::with_capacity(capacity_bits);

        for seg in segments {
            let count_bits = seg.mode().char_count_bits(plan.version);
            let num_chars = u32::try_from(seg.num_chars())
                .map_err(|_| QrError::Internal("character count exceeds u32"))?;
            bb.append_bits(seg.mode().mode_bits(), 4);
            bb.append_bits(num_chars, count_bits);
            bb.extend_from_bits(seg.data());
        }
        if bb.len() != plan.data_used_bits || bb.len() > capacity_bits {
            return Err(QrError::Internal("segment bits disagree with capacity plan"));
        }

        // Terminator of up to four zero bits, then zero-fill to a byte boundary
        let terminator = (capacity_bits - bb.len()).min(4);
        bb.append_bits(0, terminator as u8);
        let fill = bb.len().wrapping_neg() & 7;
        bb.append_bits(0, fill as u8);

        for &pad in PAD_BYTES.iter().cycle() {
            if bb.len() >= capacity_bits {
                break;
            }
            bb.append_bits(pad, 8);
        }

        debug_assert_eq!(bb.len(), capacity_bits);
        Ok(bb)
    }

    /// Data codewords for `segments`, packed MSB first
    pub fn assemble(segments: &[Segment], plan: &CapacityPlan) -> Result<Vec<u8>> {
        Ok(Self::assemble_bits(segments, plan)?.to_codewords())
    }
}
