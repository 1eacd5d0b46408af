//! Sample storage with generation tracking.

use tracing::debug;

use crate::datasource::{SampleSet, Values};
use crate::error::Result;

/// Owner of the caller's samples.
///
/// The generation increments every time the samples are replaced, which lets
/// the layout cache notice new data without a separate dirty flag.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    samples: SampleSet,
    generation: u64,
}

impl DataStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the samples with the first `count` values of `x` and `y`.
    ///
    /// On error the previous samples are kept and the generation is unchanged.
    pub fn set_data(&mut self, x: Values<'_>, y: Values<'_>, count: usize) -> Result<()> {
        let samples = SampleSet::from_values(x, y, count)?;
        self.replace(samples);
        Ok(())
    }

    /// Install a new sample set, dropping the previous one.
    pub fn replace(&mut self, samples: SampleSet) {
        debug!(
            previous = self.samples.len(),
            count = samples.len(),
            "replacing samples"
        );
        self.samples = samples;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Access the current samples.
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// Access the data generation (increments on replace).
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_bumps_generation() {
        let mut store = DataStore::new();
        assert_eq!(store.generation(), 0);
        store
            .set_data(Values::from(&[1, 2]), Values::from(&[3, 4]), 2)
            .unwrap();
        assert_eq!(store.generation(), 1);
        store
            .set_data(Values::from(&[5]), Values::from(&[6.5]), 1)
            .unwrap();
        assert_eq!(store.generation(), 2);
        assert_eq!(store.samples().y(), &[6.5]);
    }

    #[test]
    fn failed_load_keeps_previous_samples() {
        let mut store = DataStore::new();
        store
            .set_data(Values::from(&[1, 2]), Values::from(&[3, 4]), 2)
            .unwrap();
        assert!(
            store
                .set_data(Values::from(&[1, 2, 3]), Values::from(&[3, 4]), 3)
                .is_err()
        );
        assert_eq!(store.generation(), 1);
        assert_eq!(store.samples().len(), 2);
    }
}
