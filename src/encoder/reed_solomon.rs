/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
/// GF(256) field operations
pub struct Gf256;

/// Reduction polynomial x^8 + x^4 + x^3 + x^2 + 1
const REDUCTION_POLY: u16 = 0x11D;

impl Gf256 {
    /// Carry-less multiply modulo 0x11D (shift-and-reduce, MSB of `b` first)
    pub fn mul(a: u8, b: u8) -> u8 {
        let mut z: u16 = 0;
        for i in (0..8).rev() {
            z = (z << 1) ^ ((z >> 7) * REDUCTION_POLY);
            z ^= ((u16::from(b) >> i) & 1) * u16::from(a);
        }
        z as u8
    }
}

/// Reed-Solomon encoder for one EC codeword count
///
/// The divisor is the generator polynomial `(x - 2^0)(x - 2^1)...(x - 2^(d-1))`
/// with its monic leading term dropped, coefficients from highest to lowest
/// degree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReedSolomonEncoder {
    divisor: Vec<u8>,
}

impl ReedSolomonEncoder {
    pub fn new(degree: usize) -> Self {
        assert!((1..=255).contains(&degree), "degree out of range");
        let mut divisor = vec![0u8; degree];
        divisor[degree - 1] = 1; // Start with the monomial x^0

        // Multiply by (x - root) for root = 2^0 .. 2^(degree-1)
        let mut root = 1u8;
        for _ in 0..degree {
            for j in 0..degree {
                divisor[j] = Gf256::mul(divisor[j], root);
                if j + 1 < degree {
                    divisor[j] ^= divisor[j + 1];
                }
            }
            root = Gf256::mul(root, 0x02);
        }
        Self { divisor }
    }

    /// Generator coefficients below the leading term
    pub fn divisor(&self) -> &[u8] {
        &self.divisor
    }

    /// Number of EC codewords produced
    pub fn degree(&self) -> usize {
        self.divisor.len()
    }

    /// EC codewords for `data`: remainder of `data(x) * x^d` divided by the generator
    pub fn remainder(&self, data: &[u8]) -> Vec<u8> {
        let degree = self.divisor.len();
        let mut result = vec![0u8; degree];
        for &b in data {
            let factor = b ^ result[0];
            result.rotate_left(1);
            result[degree - 1] = 0;
            for (r, &coef) in result.iter_mut().zip(&self.divisor) {
                *r ^= Gf256::mul(coef, factor);
            }
        }
        result
    }

    /// True if `block` (data followed by EC codewords) is divisible by the
    /// generator, i.e. evaluates to zero at every generator root.
    pub fn is_codeword(&self, block: &[u8]) -> bool {
        let mut root = 1u8;
        for _ in 0..self.divisor.len() {
            // Horner evaluation, c[0] is the highest-degree coefficient
            let syndrome = block
                .iter()
                .fold(0u8, |acc, &c| Gf256::mul(acc, root) ^ c);
            if syndrome != 0 {
                return false;
            }
            root = Gf256::mul(root, 0x02);
        }
        true
    }
}
