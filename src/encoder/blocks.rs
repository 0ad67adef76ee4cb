/// Error correction blocks and codeword interleaving
use crate::debug::qr_debug;
use crate::encoder::config::use_parallel;
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::{ec_block_info, num_data_codewords, num_raw_codewords};
use crate::error::{QrError, Result};
use crate::models::{ECLevel, Version};
use rayon::prelude::*;

/// One Reed-Solomon block: a slice of the data codewords plus its EC codewords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcBlock {
    pub data: Vec<u8>,
    pub ecc: Vec<u8>,
}

/// Split `data` into the blocks of (version, level) and compute each block's
/// EC codewords. Short blocks come first; long blocks carry one extra data
/// codeword.
pub fn build_blocks(version: Version, ec_level: ECLevel, data: &[u8]) -> Result<Vec<EcBlock>> {
    if data.len() != num_data_codewords(version, ec_level) {
        return Err(QrError::Internal("data codeword count does not match version"));
    }

    let info = ec_block_info(version, ec_level);
    let raw = num_raw_codewords(version);
    let num_short = info.num_blocks - raw % info.num_blocks;
    let short_data_len = raw / info.num_blocks - info.ecc_per_block;

    qr_debug!(
        "BLOCKS: v{} {:?} raw={} blocks={} short={} short_data={} ecc={}",
        version.number(),
        ec_level,
        raw,
        info.num_blocks,
        num_short,
        short_data_len,
        info.ecc_per_block
    );

    let mut slices = Vec::with_capacity(info.num_blocks);
    let mut offset = 0;
    for i in 0..info.num_blocks {
        let len = short_data_len + usize::from(i >= num_short);
        slices.push(&data[offset..offset + len]);
        offset += len;
    }
    debug_assert_eq!(offset, data.len());

    let rs = ReedSolomonEncoder::new(info.ecc_per_block);
    let make_block = |chunk: &&[u8]| EcBlock {
        data: chunk.to_vec(),
        ecc: rs.remainder(chunk),
    };

    let blocks: Vec<EcBlock> = if use_parallel(version) {
        slices.par_iter().map(make_block).collect()
    } else {
        slices.iter().map(make_block).collect()
    };
    Ok(blocks)
}

/// Emit data codewords column by column across blocks, skipping the missing
/// last column of short blocks, then every EC column.
pub fn interleave(blocks: &[EcBlock]) -> Vec<u8> {
    let total: usize = blocks.iter().map(|b| b.data.len() + b.ecc.len()).sum();
    let max_data = blocks.iter().map(|b| b.data.len()).max().unwrap_or(0);
    let ecc_len = blocks.first().map_or(0, |b| b.ecc.len());

    let mut result = Vec::with_capacity(total);
    for i in 0..max_data {
        result.extend(blocks.iter().filter_map(|b| b.data.get(i)));
    }
    for i in 0..ecc_len {
        result.extend(blocks.iter().map(|b| b.ecc[i]));
    }
    result
}

/// Full codeword sequence (data + EC, interleaved) for one symbol
pub fn add_ecc_and_interleave(version: Version, ec_level: ECLevel, data: &[u8]) -> Result<Vec<u8>> {
    let blocks = build_blocks(version, ec_level, data)?;
    let result = interleave(&blocks);
    debug_assert_eq!(result.len(), num_raw_codewords(version));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_single_block_hello_world() {
        let data = [
            32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
        ];
        let out = add_ecc_and_interleave(v(1), ECLevel::M, &data).unwrap();
        assert_eq!(&out[..16], &data);
        assert_eq!(&out[16..], &[196, 35, 39, 119, 235, 215, 231, 226, 93, 23]);
    }

    #[test]
    fn test_short_and_long_blocks_5q() {
        // 134 raw codewords, 4 blocks of 18 EC: two 15-byte and two 16-byte blocks
        let data: Vec<u8> = (0..62).collect();
        let blocks = build_blocks(v(5), ECLevel::Q, &data).unwrap();
        let lens: Vec<usize> = blocks.iter().map(|b| b.data.len()).collect();
        assert_eq!(lens, vec![15, 15, 16, 16]);
        assert!(blocks.iter().all(|b| b.ecc.len() == 18));
        assert_eq!(blocks[2].data[0], 30);

        let out = interleave(&blocks);
        assert_eq!(out.len(), 134);
        assert_eq!(&out[..4], &[0, 15, 30, 46]);
        // Last data column only exists in the long blocks
        assert_eq!(&out[56..62], &[14, 29, 44, 60, 45, 61]);
        assert_eq!(out[62], blocks[0].ecc[0]);
        assert_eq!(out[133], blocks[3].ecc[17]);
    }

    #[test]
    fn test_every_block_is_a_codeword() {
        for (n, level) in [(1, ECLevel::L), (7, ECLevel::H), (15, ECLevel::Q), (40, ECLevel::M)] {
            let version = v(n);
            let data: Vec<u8> = (0..num_data_codewords(version, level))
                .map(|i| (i * 31 + 7) as u8)
                .collect();
            let blocks = build_blocks(version, level, &data).unwrap();
            let info = ec_block_info(version, level);
            assert_eq!(blocks.len(), info.num_blocks);
            let rs = ReedSolomonEncoder::new(info.ecc_per_block);
            for block in &blocks {
                let mut full = block.data.clone();
                full.extend_from_slice(&block.ecc);
                assert!(rs.is_codeword(&full));
            }
            let total: usize = blocks.iter().map(|b| b.data.len() + b.ecc.len()).sum();
            assert_eq!(total, num_raw_codewords(version));
        }
    }

    #[test]
    fn test_wrong_data_length_rejected() {
        let err = build_blocks(v(1), ECLevel::L, &[0u8; 18]).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Internal);
    }
}
