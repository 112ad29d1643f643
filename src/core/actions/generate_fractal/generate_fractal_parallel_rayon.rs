use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::render_buffer::{EscapeResult, RenderBuffer, RenderBufferError};
use crate::core::data::viewport::Viewport;

/// Renders the viewport in parallel using rayon's work-stealing scheduler.
///
/// Each worker owns a disjoint row of the output, so no locking is needed and
/// the result is identical to [`generate_fractal`] cell for cell.
///
/// [`generate_fractal`]: crate::core::actions::generate_fractal::generate_fractal::generate_fractal
pub fn generate_fractal_parallel_rayon<Alg>(
    viewport: &Viewport,
    algorithm: &Alg,
) -> Result<RenderBuffer, RenderBufferError>
where
    Alg: FractalAlgorithm + ?Sized,
{
    let width = viewport.screen_width();
    let height = viewport.screen_height();
    let mut cells = vec![EscapeResult::default(); width as usize * height as usize];

    cells
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| render_row(viewport, algorithm, y as f64, row));

    RenderBuffer::from_data(width, height, cells)
}

fn render_row<Alg>(viewport: &Viewport, algorithm: &Alg, y: f64, row: &mut [EscapeResult])
where
    Alg: FractalAlgorithm + ?Sized,
{
    for (x, cell) in row.iter_mut().enumerate() {
        *cell = algorithm.compute_single(viewport.to_complex(PixelPoint::new(x as f64, y)));
    }
}
