use crate::{error::Result, Float, SubsetSumError};

/// The fitness reached by any subset whose sum hits the target exactly, before the size penalty.
pub const EXACT_MATCH_FITNESS: Float = 1000.0;

/// Fitness of a candidate subset, where higher is better.
///
/// ```math
/// f(s, T, k) = \begin{cases} 1000 - k & s = T \\ \frac{1}{1 + |T - s|} & s \neq T \end{cases}
/// ```
/// where $`s`$ is the subset sum, $`T`$ the target and $`k`$ the number of chosen items. Exact
/// matches score far above any near miss (which lies in $`(0, 1]`$), and among exact matches the
/// smaller subset wins.
pub fn fitness(subset_sum: i64, target: i64, subset_size: usize) -> Float {
    if subset_sum == target {
        EXACT_MATCH_FITNESS - subset_size as Float
    } else {
        1.0 / (1.0 + target.abs_diff(subset_sum) as Float)
    }
}

/// The closeness of `subset_sum` to `target` as a percentage, for reporting only.
///
/// Sums at or below the target report `100 * subset_sum / target`, sums above it report
/// `100 * target / subset_sum`. The result is exactly `100` iff the sum equals the target.
///
/// # Errors
///
/// Returns [`SubsetSumError::DegenerateTarget`] if `target` is zero, since the ratio is
/// undefined there. A sum of zero above a negative target reports `0`.
pub fn accuracy(subset_sum: i64, target: i64) -> Result<Float> {
    if target == 0 {
        return Err(SubsetSumError::DegenerateTarget);
    }
    if subset_sum <= target {
        Ok(subset_sum as Float * 100.0 / target as Float)
    } else if subset_sum == 0 {
        Ok(0.0)
    } else {
        Ok(target as Float * 100.0 / subset_sum as Float)
    }
}

/// The logistic transfer function $`\sigma(x) = 1 / (1 + e^{-x})`$ mapping a velocity to the
/// probability that a bit is set.
pub fn sigmoid(x: Float) -> Float {
    1.0 / (1.0 + Float::exp(-x))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_exact_match_prefers_smaller_subsets() {
        assert_eq!(fitness(300, 300, 5), 995.0);
        assert!(fitness(300, 300, 4) > fitness(300, 300, 5));
        for n in 1..40 {
            assert!(fitness(300, 300, n) > fitness(299, 300, 1));
            assert!(fitness(300, 300, n) > fitness(301, 300, 1));
        }
    }

    #[test]
    fn test_near_miss_fitness() {
        assert_relative_eq!(fitness(299, 300, 3), 0.5);
        assert_relative_eq!(fitness(301, 300, 3), 0.5);
        assert_relative_eq!(fitness(60, 1000, 3), 1.0 / 941.0);
        assert!(fitness(290, 300, 3) > fitness(280, 300, 3));
        assert!(fitness(-5, 300, 0) > 0.0);
    }

    #[test]
    fn test_accuracy() {
        assert_relative_eq!(accuracy(300, 300).unwrap(), 100.0);
        assert_relative_eq!(accuracy(60, 1000).unwrap(), 6.0);
        assert_relative_eq!(accuracy(400, 200).unwrap(), 50.0);
        assert_relative_eq!(accuracy(150, 300).unwrap(), 50.0);
        for sum in 1..600 {
            let acc = accuracy(sum, 300).unwrap();
            assert!(acc > 0.0 && acc <= 100.0);
            assert_eq!(acc == 100.0, sum == 300);
        }
    }

    #[test]
    fn test_accuracy_zero_target() {
        assert!(matches!(
            accuracy(10, 0),
            Err(SubsetSumError::DegenerateTarget)
        ));
        assert_relative_eq!(accuracy(0, -10).unwrap(), 0.0);
    }

    #[test]
    fn test_sigmoid() {
        assert_relative_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(10.0) > 0.99);
        assert!(sigmoid(-10.0) < 0.01);
        assert_relative_eq!(sigmoid(2.0) + sigmoid(-2.0), 1.0, epsilon = 1e-6);
    }
}
