/*
 * Influence Module
 *
 * Rank-based blending of per-neighbour corrections. The nearest neighbour
 * gets the first weight, the next one the second weight, and so on. The
 * weighted sum is always divided by the sum of the whole table, so a bird
 * with fewer neighbours than weights turns less: missing ranks still count
 * in the denominator.
 */

use crate::error::ParamsError;

#[derive(Clone, Debug, PartialEq)]
pub struct InfluenceWeights {
    weights: Vec<f32>,
    sum: f32,
}

impl InfluenceWeights {
    pub fn new(weights: Vec<f32>) -> Self {
        let sum = weights.iter().sum();

        Self { weights, sum }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn sum(&self) -> f32 {
        self.sum
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.weights.is_empty() {
            return Err(ParamsError::EmptyInfluence);
        }

        if let Some((rank, &weight)) = self
            .weights
            .iter()
            .enumerate()
            .find(|(_, weight)| !(weight.is_finite() && **weight >= 0.0))
        {
            return Err(ParamsError::InfluenceWeight { rank, weight });
        }

        if self.sum <= 0.0 {
            return Err(ParamsError::ZeroInfluenceSum);
        }

        Ok(())
    }

    /// Net rotation from corrections given nearest first. Corrections past
    /// the end of the table are ignored.
    pub fn blend<I>(&self, corrections: I) -> f32
    where
        I: IntoIterator<Item = f32>,
    {
        let weighted: f32 = corrections
            .into_iter()
            .zip(&self.weights)
            .map(|(correction, weight)| correction * weight)
            .sum();

        weighted / self.sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_is_precomputed_over_the_whole_table() {
        let weights = InfluenceWeights::new(vec![1.0, 0.95, 0.90, 0.70, 0.40, 0.10]);
        assert!((weights.sum() - 4.05).abs() < 1e-5);
        assert_eq!(weights.len(), 6);
    }

    #[test]
    fn single_neighbour_is_diluted_by_missing_ranks() {
        let weights = InfluenceWeights::new(vec![1.0, 0.5]);
        let d = 0.05;
        assert_eq!(weights.blend([d]), d * 1.0 / 1.5);
    }

    #[test]
    fn full_table_is_a_weighted_average() {
        let weights = InfluenceWeights::new(vec![1.0, 0.5]);
        let net = weights.blend([0.03, -0.03]);
        assert!((net - (0.03 - 0.015) / 1.5).abs() < 1e-7);
    }

    #[test]
    fn no_corrections_means_no_turn() {
        let weights = InfluenceWeights::new(vec![1.0, 0.5]);
        assert_eq!(weights.blend(std::iter::empty()), 0.0);
    }

    #[test]
    fn extra_corrections_are_ignored() {
        let weights = InfluenceWeights::new(vec![1.0]);
        assert_eq!(weights.blend([0.02, 0.04, 0.05]), 0.02);
    }

    #[test]
    fn validate_reports_each_problem() {
        assert_eq!(
            InfluenceWeights::new(Vec::new()).validate(),
            Err(ParamsError::EmptyInfluence)
        );
        assert_eq!(
            InfluenceWeights::new(vec![0.0, 0.0]).validate(),
            Err(ParamsError::ZeroInfluenceSum)
        );
        assert!(matches!(
            InfluenceWeights::new(vec![1.0, f32::NAN]).validate(),
            Err(ParamsError::InfluenceWeight { rank: 1, .. })
        ));
        assert_eq!(InfluenceWeights::new(vec![1.0, 0.0]).validate(), Ok(()));
    }
}
