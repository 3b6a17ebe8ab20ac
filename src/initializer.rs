use rand::RngCore;

use crate::net::Net;

const LCG_MULTIPLIER: u64 = 1103515245;
const LCG_INCREMENT: u64 = 12345;
const LCG_MODULUS: u64 = 1 << 31;

/// Linear congruential generator, `state' = (1103515245 * state + 12345) mod 2^31`.
///
/// Every output is a 31 bit state, so `next_u32` never sets the top bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {

    pub fn new(seed: u32) -> Self {
        Lcg {
            state: seed as u64
        }
    }

    #[inline]
    fn step(&mut self) -> u64 {
        self.state = (LCG_MULTIPLIER * self.state + LCG_INCREMENT) % LCG_MODULUS;
        self.state
    }

    /// Next draw in `[0, 1)`.
    #[inline]
    pub fn next_unit(&mut self) -> f64 {
        self.step() as f64 / LCG_MODULUS as f64
    }

}

impl RngCore for Lcg {

    fn next_u32(&mut self) -> u32 {
        self.step() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let high = self.step();
        let low = self.step();
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }

}

/// Seeds every weight of a net from an `Lcg`, mapping each draw to
/// `(draw - 0.5) / sqrt(inputs)` so wide layers start with a narrower spread.
#[derive(Clone, Debug)]
pub struct LcgNetInitializer {
    rng: Lcg,
}

impl LcgNetInitializer {

    pub fn new(seed: u32) -> Self {
        LcgNetInitializer {
            rng: Lcg::new(seed)
        }
    }

    /// Matrices in kernel order; within a matrix, outputs outer and inputs
    /// inner.
    pub fn initialize_weights(&mut self, net: &mut Net) {
        for matrix in net.matrix_iter_mut() {
            let scale = (matrix.inputs() as f64).sqrt();
            let inputs = matrix.inputs();
            let weights = matrix.as_mut_slice();
            for output_index in 0..weights.len() / inputs {
                for input_index in 0..inputs {
                    weights[input_index + output_index * inputs] = (self.rng.next_unit() - 0.5) / scale;
                }
            }
        }
    }

}
