/// Equal-width density histogram over integer samples.
///
/// Binning follows numpy's `histogram(density=True)`: the range is the data's
/// `[min, max]` (widened by 0.5 each side when all samples are equal), the
/// last bin is closed on the right, and each bar's height is
/// `count / (total * width)` so the bars integrate to 1.
#[derive(Debug, Clone)]
pub struct Histogram {
    edges: Vec<f64>,
    densities: Vec<f64>,
}

impl Histogram {
    pub fn density(values: &[usize], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }
        let mut lo = *values.iter().min()? as f64;
        let mut hi = *values.iter().max()? as f64;
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let step = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..=bins).map(|i| lo + i as f64 * step).collect();
        edges[bins] = hi;

        let norm = bins as f64 / (hi - lo);
        let mut counts = vec![0usize; bins];
        for &value in values {
            let v = value as f64;
            let mut idx = (((v - lo) * norm) as usize).min(bins - 1);
            if v < edges[idx] && idx > 0 {
                idx -= 1;
            } else if idx + 1 < bins && v >= edges[idx + 1] {
                idx += 1;
            }
            counts[idx] += 1;
        }

        let total = values.len() as f64;
        let densities = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| c as f64 / (total * (edges[i + 1] - edges[i])))
            .collect();

        Some(Self { edges, densities })
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    pub fn max_density(&self) -> f64 {
        self.densities.iter().copied().fold(0.0, f64::max)
    }

    /// `(left, right, density)` per bin.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.edges
            .windows(2)
            .zip(self.densities.iter())
            .map(|(w, &d)| (w[0], w[1], d))
    }
}
