use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::render_buffer::EscapeResult;
use crate::core::errors::FractalResult;
use crate::core::fractals::burning_ship::algorithm::BurningShipAlgorithm;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::parameters::{FractalParameters, ParameterUpdate};

/// Closed set of fractal families behind one interface.
///
/// Dispatch happens once per call; batched calls forward to the variant's own
/// batch so the per-point loop is monomorphic.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalModel {
    Mandelbrot(MandelbrotAlgorithm),
    Julia(JuliaAlgorithm),
    BurningShip(BurningShipAlgorithm),
}

impl FractalModel {
    /// `julia_c` is ignored by the families that sample `c` per pixel.
    pub fn new(kind: FractalKind, max_iterations: u32, julia_c: Complex) -> FractalResult<Self> {
        Ok(match kind {
            FractalKind::Mandelbrot => Self::Mandelbrot(MandelbrotAlgorithm::new(max_iterations)?),
            FractalKind::Julia => Self::Julia(JuliaAlgorithm::new(julia_c, max_iterations)?),
            FractalKind::BurningShip => {
                Self::BurningShip(BurningShipAlgorithm::new(max_iterations)?)
            }
        })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot(_) => FractalKind::Mandelbrot,
            Self::Julia(_) => FractalKind::Julia,
            Self::BurningShip(_) => FractalKind::BurningShip,
        }
    }

    fn algorithm(&self) -> &dyn FractalAlgorithm {
        match self {
            Self::Mandelbrot(algorithm) => algorithm,
            Self::Julia(algorithm) => algorithm,
            Self::BurningShip(algorithm) => algorithm,
        }
    }
}

impl From<MandelbrotAlgorithm> for FractalModel {
    fn from(algorithm: MandelbrotAlgorithm) -> Self {
        Self::Mandelbrot(algorithm)
    }
}

impl From<JuliaAlgorithm> for FractalModel {
    fn from(algorithm: JuliaAlgorithm) -> Self {
        Self::Julia(algorithm)
    }
}

impl From<BurningShipAlgorithm> for FractalModel {
    fn from(algorithm: BurningShipAlgorithm) -> Self {
        Self::BurningShip(algorithm)
    }
}

impl FractalAlgorithm for FractalModel {
    fn max_iterations(&self) -> u32 {
        self.algorithm().max_iterations()
    }

    fn compute_single(&self, input: Complex) -> EscapeResult {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.compute_single(input),
            Self::Julia(algorithm) => algorithm.compute_single(input),
            Self::BurningShip(algorithm) => algorithm.compute_single(input),
        }
    }

    fn iteration_count(&self, input: Complex) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.iteration_count(input),
            Self::Julia(algorithm) => algorithm.iteration_count(input),
            Self::BurningShip(algorithm) => algorithm.iteration_count(input),
        }
    }

    fn iterate(&self, input: Complex, steps: u32) -> Complex {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.iterate(input, steps),
            Self::Julia(algorithm) => algorithm.iterate(input, steps),
            Self::BurningShip(algorithm) => algorithm.iterate(input, steps),
        }
    }

    fn parameters(&self) -> FractalParameters {
        self.algorithm().parameters()
    }

    fn set_parameters(&mut self, update: &ParameterUpdate) -> FractalResult<()> {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.set_parameters(update),
            Self::Julia(algorithm) => algorithm.set_parameters(update),
            Self::BurningShip(algorithm) => algorithm.set_parameters(update),
        }
    }

    fn compute_batch(&self, inputs: &[Complex]) -> Vec<EscapeResult> {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.compute_batch(inputs),
            Self::Julia(algorithm) => algorithm.compute_batch(inputs),
            Self::BurningShip(algorithm) => algorithm.compute_batch(inputs),
        }
    }

    fn iterate_batch(&self, inputs: &[Complex], steps: u32) -> Vec<Complex> {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.iterate_batch(inputs, steps),
            Self::Julia(algorithm) => algorithm.iterate_batch(inputs, steps),
            Self::BurningShip(algorithm) => algorithm.iterate_batch(inputs, steps),
        }
    }
}
