//! Histogram of sick-days values.

use super::calculator::StatsError;

/// Equal-width histogram with one bucket per distinct value.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bucket edges, one more than `counts`.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Build the histogram the way NumPy does for `bins = unique count`:
    /// edges span `[min, max]` (or `[v - 0.5, v + 0.5]` for a single
    /// distinct value) and the last bucket is closed on the right.
    pub fn from_values(values: &[f64]) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::InsufficientData {
                needed: 1,
                found: 0,
            });
        }

        let mut distinct = values.to_vec();
        distinct.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        distinct.dedup();
        let bins = distinct.len();

        let (mut lo, mut hi) = (distinct[0], distinct[bins - 1]);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + i as f64 * width).collect();
        edges.push(hi);

        let mut counts = vec![0usize; bins];
        for &value in values {
            counts[Self::bucket_index(&edges, value)] += 1;
        }

        Ok(Self { edges, counts })
    }

    fn bucket_index(edges: &[f64], value: f64) -> usize {
        let bins = edges.len() - 1;
        let (lo, hi) = (edges[0], edges[bins]);
        let mut idx = (((value - lo) / (hi - lo)) * bins as f64) as usize;
        idx = idx.min(bins - 1);

        // Floating-point rounding can land one bucket off
        if idx > 0 && value < edges[idx] {
            idx -= 1;
        } else if idx < bins - 1 && value >= edges[idx + 1] {
            idx += 1;
        }
        idx
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(left edge, right edge, count)` per bucket.
    pub fn buckets(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(edge, &count)| (edge[0], edge[1], count))
    }
}
