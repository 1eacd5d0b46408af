//! Ordering and down-sampling of samples before layout.

use crate::datasource::SampleSet;
use crate::style::PlotKind;

/// Permutation of sample indices in drawing order.
///
/// Line and bar plots visit samples by ascending x; ties keep caller order.
/// Scatter plots keep caller order.
pub fn x_order(samples: &SampleSet, kind: PlotKind) -> Vec<usize> {
    let mut order: Vec<usize> = (0..samples.len()).collect();
    if kind.sorts_by_x() {
        let x = samples.x();
        order.sort_by(|&a, &b| x[a].total_cmp(&x[b]));
    }
    order
}

/// Step between retained samples.
///
/// Dense data keeps roughly one sample per horizontal pixel; sparse data and
/// scatter plots keep every sample.
pub fn sampling_stride(count: usize, plot_width: usize, kind: PlotKind) -> usize {
    if !kind.allows_downsampling() || plot_width > count {
        return 1;
    }
    (count / plot_width.max(1)).max(1)
}

/// Samples retained for one layout pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sampling {
    order: Vec<usize>,
    stride: usize,
    retained: usize,
}

impl Sampling {
    /// Order the samples for `kind` and pick a stride for `plot_width`.
    pub fn new(samples: &SampleSet, kind: PlotKind, plot_width: usize) -> Self {
        let stride = sampling_stride(samples.len(), plot_width, kind);
        Self {
            order: x_order(samples, kind),
            stride,
            retained: samples.len() / stride,
        }
    }

    /// Step between retained samples in drawing order.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of retained samples.
    pub fn retained(&self) -> usize {
        self.retained
    }

    /// Indices into the sample set of the retained samples, in drawing order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.order
            .iter()
            .step_by(self.stride)
            .take(self.retained)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::Values;

    fn samples(x: &[f64]) -> SampleSet {
        SampleSet::from_xy(Values::Float(x), Values::Float(x)).unwrap()
    }

    #[test]
    fn line_order_sorts_by_x() {
        let set = samples(&[4.0, 2.0, 5.0, 0.0, 3.0, 1.0]);
        assert_eq!(x_order(&set, PlotKind::Line), vec![3, 5, 1, 4, 0, 2]);
    }

    #[test]
    fn scatter_order_is_insertion_order() {
        let set = samples(&[4.0, 2.0, 5.0]);
        assert_eq!(x_order(&set, PlotKind::Scatter), vec![0, 1, 2]);
    }

    #[test]
    fn ties_keep_caller_order() {
        let set = samples(&[1.0, 0.0, 1.0, 0.0]);
        assert_eq!(x_order(&set, PlotKind::Bar), vec![1, 3, 0, 2]);
    }

    #[test]
    fn stride_is_one_when_width_exceeds_count() {
        assert_eq!(sampling_stride(6, 134, PlotKind::Line), 1);
        assert_eq!(sampling_stride(134, 134, PlotKind::Line), 1);
        assert_eq!(sampling_stride(5000, 10, PlotKind::Scatter), 1);
    }

    #[test]
    fn stride_floors_count_over_width() {
        assert_eq!(sampling_stride(200, 134, PlotKind::Line), 1);
        assert_eq!(sampling_stride(301, 134, PlotKind::Line), 2);
        assert_eq!(sampling_stride(1000, 134, PlotKind::Bar), 7);
    }

    #[test]
    fn retained_count_is_count_over_stride() {
        let x: Vec<f64> = (0..301).map(f64::from).collect();
        let set = samples(&x);
        let sampling = Sampling::new(&set, PlotKind::Line, 134);
        assert_eq!(sampling.stride(), 2);
        assert_eq!(sampling.retained(), 150);
        let indices: Vec<usize> = sampling.indices().collect();
        assert_eq!(indices.len(), 150);
        assert_eq!(&indices[..3], &[0, 2, 4]);
        assert_eq!(indices.last(), Some(&298));
    }
}
