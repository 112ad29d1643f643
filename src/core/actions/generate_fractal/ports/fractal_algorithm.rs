use rayon::prelude::*;

use crate::core::data::complex::Complex;
use crate::core::data::render_buffer::EscapeResult;
use crate::core::errors::FractalResult;
use crate::core::fractals::parameters::{FractalParameters, ParameterUpdate};

/// Smallest slice of inputs rayon will hand to a single worker.
pub const BATCH_MIN_LEN: usize = 256;

/// One fractal family's iteration rule plus its parameters.
///
/// Implementations are immutable during a render, so a shared reference can be
/// handed to any number of rayon workers.
pub trait FractalAlgorithm: Sync {
    fn max_iterations(&self) -> u32;

    /// Escape-time iteration of a single sample point.
    fn compute_single(&self, input: Complex) -> EscapeResult;

    /// Escape count alone. Families with a closed-form interior test may
    /// answer without iterating; the count always equals
    /// `compute_single(input).iterations`.
    fn iteration_count(&self, input: Complex) -> u32 {
        self.compute_single(input).iterations
    }

    /// Applies the update rule exactly `steps` times with no escape test.
    fn iterate(&self, input: Complex, steps: u32) -> Complex;

    fn parameters(&self) -> FractalParameters;

    /// Partial update: keys left as `None` keep their current value. Either
    /// every supplied key is applied or none is.
    fn set_parameters(&mut self, update: &ParameterUpdate) -> FractalResult<()>;

    /// Same results as mapping [`FractalAlgorithm::compute_single`] over
    /// `inputs`, in the same order; the batch only buys throughput.
    fn compute_batch(&self, inputs: &[Complex]) -> Vec<EscapeResult> {
        inputs
            .par_iter()
            .with_min_len(BATCH_MIN_LEN)
            .map(|&input| self.compute_single(input))
            .collect()
    }

    fn iterate_batch(&self, inputs: &[Complex], steps: u32) -> Vec<Complex> {
        inputs
            .par_iter()
            .with_min_len(BATCH_MIN_LEN)
            .map(|&input| self.iterate(input, steps))
            .collect()
    }
}
