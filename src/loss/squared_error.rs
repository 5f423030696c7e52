pub struct SquaredErrorLoss;

impl SquaredErrorLoss {
    /// Scalar loss: sum(½ (expected - predicted)²).
    ///
    /// Slices are compared pairwise; callers check lengths beforehand.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| (e - p).powi(2) / 2.0)
            .sum()
    }

    /// ∂loss/∂predicted for a single output.
    pub fn derivative(predicted: f64, expected: f64) -> f64 {
        predicted - expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_half_sum_of_squares() {
        let loss = SquaredErrorLoss::loss(&[1.0, 0.0], &[0.0, 0.5]);
        assert!((loss - (0.5 + 0.125)).abs() < 1e-12);
    }

    #[test]
    fn loss_is_zero_for_exact_prediction() {
        assert_eq!(SquaredErrorLoss::loss(&[0.3, 0.7], &[0.3, 0.7]), 0.0);
    }

    #[test]
    fn derivative_points_away_from_target() {
        assert_eq!(SquaredErrorLoss::derivative(0.75, 0.25), 0.5);
        assert_eq!(SquaredErrorLoss::derivative(0.25, 0.75), -0.5);
    }
}
