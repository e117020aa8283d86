//! Smoothening of raw sensor samples.

use crate::math::div_round_half_up;

/// Reading of a single sensor channel at a single instant.
pub type Sample = i32;

/// Fixed-capacity ring buffer averaging the most recent samples.
///
/// Once full, every write overwrites the oldest sample. The mean is always
/// divided by the full capacity `N`, so before `N` samples were written the
/// zeroed slots pull it towards zero.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingFilter<const N: usize> {
    buffer: [Sample; N],
    pointer: usize,
    filled: usize,
}

impl<const N: usize> Default for RingFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RingFilter<N> {
    /// # Panics
    ///
    /// Panics if `N` is zero.
    pub fn new() -> Self {
        assert!(N > 0, "Ring filter needs at least one slot.");
        Self {
            buffer: [0; N],
            pointer: 0,
            filled: 0,
        }
    }

    pub fn write(&mut self, value: Sample) {
        self.buffer[self.pointer] = value;
        self.pointer = (self.pointer + 1) % N;
        self.filled = (self.filled + 1).min(N);
    }

    /// Integer mean of all slots, rounded half up.
    pub fn mean(&self) -> Sample {
        let sum: i64 = self.buffer.iter().map(|x| i64::from(*x)).sum();
        div_round_half_up(sum, N as i64) as Sample
    }

    pub fn latest(&self) -> Sample {
        let newest = (self.pointer + N - 1) % N;
        self.buffer[newest]
    }

    /// Number of written slots, saturating at the capacity.
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub fn is_full(&self) -> bool {
        self.filled == N
    }

    pub fn reset(&mut self) {
        self.buffer = [0; N];
        self.pointer = 0;
        self.filled = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn when_filled_with_constant_it_returns_it_as_mean() {
        let mut filter: RingFilter<10> = RingFilter::new();
        for _ in 0..10 {
            filter.write(10);
        }
        assert_eq!(filter.mean(), 10);
    }

    #[test]
    fn when_reads_it_returns_average() {
        let mut filter: RingFilter<4> = RingFilter::new();
        filter.write(4);
        filter.write(8);
        filter.write(16);
        filter.write(32);
        assert_eq!(filter.mean(), 15);
    }

    #[test]
    fn when_not_full_yet_it_divides_by_capacity() {
        let mut filter: RingFilter<10> = RingFilter::new();
        filter.write(100);
        filter.write(100);
        assert_eq!(filter.mean(), 20);
        assert_eq!(filter.len(), 2);
        assert!(!filter.is_full());
    }

    #[test]
    fn when_mean_lands_on_half_it_rounds_up() {
        let mut filter: RingFilter<4> = RingFilter::new();
        filter.write(1);
        filter.write(1);
        assert_eq!(filter.mean(), 1);

        filter.reset();
        filter.write(1);
        assert_eq!(filter.mean(), 0);

        filter.reset();
        filter.write(-2);
        assert_eq!(filter.mean(), 0);
        filter.write(-4);
        assert_eq!(filter.mean(), -1);
    }

    #[test]
    fn when_overflowing_it_evicts_the_oldest_sample() {
        let mut filter: RingFilter<3> = RingFilter::new();
        filter.write(3);
        filter.write(3);
        filter.write(3);
        filter.write(9);
        assert_eq!(filter.mean(), 5);
        filter.write(9);
        filter.write(9);
        assert_eq!(filter.mean(), 9);
        assert_eq!(filter.len(), 3);
    }

    #[test]
    fn when_reads_latest_it_returns_last_written() {
        let mut filter: RingFilter<3> = RingFilter::new();
        filter.write(1);
        filter.write(2);
        assert_eq!(filter.latest(), 2);
        filter.write(3);
        filter.write(4);
        assert_eq!(filter.latest(), 4);
    }

    #[test]
    fn when_reset_it_forgets_all_samples() {
        let mut filter: RingFilter<3> = RingFilter::new();
        filter.write(30);
        filter.reset();
        assert!(filter.is_empty());
        assert_eq!(filter.mean(), 0);
    }

    #[test]
    #[should_panic]
    fn initialize_filter_without_capacity() {
        let _filter: RingFilter<0> = RingFilter::new();
    }

    proptest! {
        #[test]
        fn mean_matches_rounded_average_of_most_recent_samples(
            samples in proptest::collection::vec(-4096i32..4096, 0..40)
        ) {
            let mut filter: RingFilter<10> = RingFilter::new();
            for sample in &samples {
                filter.write(*sample);
            }

            let recent = &samples[samples.len().saturating_sub(10)..];
            let sum: i64 = recent.iter().map(|x| i64::from(*x)).sum();
            let expected = (sum as f64 / 10.0 + 0.5).floor() as i32;

            prop_assert_eq!(filter.mean(), expected);
            prop_assert_eq!(filter.len(), samples.len().min(10));
        }
    }
}
