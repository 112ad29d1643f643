use crate::core::data::complex::Complex;
use thiserror::Error;

/// Outcome of escape-time iteration for one sample point.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct EscapeResult {
    /// Step at which `|z|² > 4` was first seen, or `max_iter` if never.
    pub iterations: u32,
    /// Orbit value at the moment iteration stopped.
    pub final_z: Complex,
}

impl EscapeResult {
    #[must_use]
    pub fn escaped(&self, max_iterations: u32) -> bool {
        self.iterations < max_iterations
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderBufferError {
    #[error("grid size {width}x{height} does not match data length {data_len}")]
    BoundsMismatch {
        width: u32,
        height: u32,
        data_len: usize,
    },
}

/// Row-major grid of escape results, row 0 at the top of the screen.
///
/// Owned outright by whoever requested the render; it holds no reference back
/// to the viewport it was sampled from.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBuffer {
    width: u32,
    height: u32,
    cells: Vec<EscapeResult>,
}

impl RenderBuffer {
    pub fn from_data(
        width: u32,
        height: u32,
        cells: Vec<EscapeResult>,
    ) -> Result<Self, RenderBufferError> {
        if width as usize * height as usize != cells.len() {
            return Err(RenderBufferError::BoundsMismatch {
                width,
                height,
                data_len: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn cells(&self) -> &[EscapeResult] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<&EscapeResult> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[EscapeResult]> {
        self.cells.chunks(self.width as usize)
    }

    /// Raw iteration counts, for callers that shade by escape time.
    #[must_use]
    pub fn iteration_counts(&self) -> Vec<u32> {
        self.cells.iter().map(|cell| cell.iterations).collect()
    }

    /// `|final_z|` per cell, for callers that shade by orbit magnitude.
    #[must_use]
    pub fn magnitudes(&self) -> Vec<f64> {
        self.cells.iter().map(|cell| cell.final_z.magnitude()).collect()
    }

    #[must_use]
    pub fn count_bounded(&self, max_iterations: u32) -> usize {
        self.cells
            .iter()
            .filter(|cell| !cell.escaped(max_iterations))
            .count()
    }

    pub fn into_cells(self) -> Vec<EscapeResult> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(iterations: u32) -> EscapeResult {
        EscapeResult {
            iterations,
            final_z: Complex::new(f64::from(iterations), 0.0),
        }
    }

    #[test]
    fn test_from_data_valid() {
        let data = vec![cell(1), cell(2), cell(3), cell(4), cell(5), cell(6)];
        let buffer = RenderBuffer::from_data(3, 2, data.clone()).unwrap();

        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.cells(), data.as_slice());
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let result = RenderBuffer::from_data(2, 2, vec![cell(0); 3]);

        assert_eq!(
            result,
            Err(RenderBufferError::BoundsMismatch {
                width: 2,
                height: 2,
                data_len: 3
            })
        );
    }

    #[test]
    fn test_get_is_row_major() {
        let buffer =
            RenderBuffer::from_data(3, 2, (0..6).map(cell).collect()).unwrap();

        assert_eq!(buffer.get(0, 0).map(|c| c.iterations), Some(0));
        assert_eq!(buffer.get(2, 0).map(|c| c.iterations), Some(2));
        assert_eq!(buffer.get(0, 1).map(|c| c.iterations), Some(3));
        assert_eq!(buffer.get(2, 1).map(|c| c.iterations), Some(5));
        assert_eq!(buffer.get(3, 0), None);
        assert_eq!(buffer.get(0, 2), None);
    }

    #[test]
    fn test_rows_split_by_width() {
        let buffer =
            RenderBuffer::from_data(2, 3, (0..6).map(cell).collect()).unwrap();
        let rows: Vec<Vec<u32>> = buffer
            .rows()
            .map(|row| row.iter().map(|c| c.iterations).collect())
            .collect();

        assert_eq!(rows, vec![vec![0, 1], vec![2, 3], vec![4, 5]]);
    }

    #[test]
    fn test_shading_views() {
        let buffer = RenderBuffer::from_data(2, 1, vec![cell(3), cell(10)]).unwrap();

        assert_eq!(buffer.iteration_counts(), vec![3, 10]);
        assert_eq!(buffer.magnitudes(), vec![3.0, 10.0]);
        assert_eq!(buffer.count_bounded(10), 1);
    }
}
