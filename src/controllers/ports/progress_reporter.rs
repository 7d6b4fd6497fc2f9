/// Told `(current, total)` after each completed frame, `current` counting from 1.
pub trait ProgressReporter {
    fn report(&mut self, current: usize, total: usize);
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for &mut P {
    fn report(&mut self, current: usize, total: usize) {
        (**self).report(current, total);
    }
}

/// Discards progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&mut self, _current: usize, _total: usize) {}
}
