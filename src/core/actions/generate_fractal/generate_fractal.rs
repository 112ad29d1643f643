use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::render_buffer::{RenderBuffer, RenderBufferError};
use crate::core::data::viewport::Viewport;

/// Single-threaded reference render: one sample per integer pixel, row-major.
pub fn generate_fractal<Alg>(
    viewport: &Viewport,
    algorithm: &Alg,
) -> Result<RenderBuffer, RenderBufferError>
where
    Alg: FractalAlgorithm + ?Sized,
{
    let width = viewport.screen_width();
    let height = viewport.screen_height();

    let cells = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| {
            let point = viewport.to_complex(PixelPoint::new(f64::from(x), f64::from(y)));
            algorithm.compute_single(point)
        })
        .collect();

    RenderBuffer::from_data(width, height, cells)
}
