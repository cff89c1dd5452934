/// Number of fixed-width windows covering `total` elements, counting a short
/// trailing window: `ceil(total / width)`.
pub fn window_count(total: usize, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    total.div_ceil(width)
}

/// Base offset of the current window. Always a multiple of the window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    start: usize,
}

impl Cursor {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn reset(&mut self) {
        self.start = 0;
    }

    pub fn advance(&mut self, width: usize) {
        self.start += width;
    }
}

/// Copies the window beginning at `start` into `features`.
///
/// Slots beyond the end of `input` read as `0.0`. Returns how many elements
/// came from `input`.
pub fn load_window(input: &[f64], start: usize, features: &mut [f64]) -> usize {
    let begin = start.min(input.len());
    let end = (start + features.len()).min(input.len());
    let fresh = end - begin;

    features[..fresh].copy_from_slice(&input[begin..end]);
    features[fresh..].iter_mut().for_each(|x| *x = 0.0);

    fresh
}
