use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{core::BitMask, error::Result, Float, SubsetSumError};

use super::fitness;

/// The built-in 40-item instance used when no input is supplied.
pub const DEFAULT_VALUES: [i64; 40] = [
    3, 34, 4, 12, 5, 2, 25, 31, 60, 91, 47, 73, 17, 53, 28, 39, 67, 80, 36, 50, 15, 95, 44, 78, 20,
    10, 13, 56, 89, 14, 38, 70, 9, 40, 22, 7, 76, 58, 49, 85,
];
/// The target paired with [`DEFAULT_VALUES`].
pub const DEFAULT_TARGET: i64 = 300;

/// An immutable subset-sum instance: an ordered list of candidate values and a target sum.
///
/// Construction rejects an empty value list, so every instance has dimension at least one, and
/// value lists whose absolute values do not sum within `i64`, so no subset sum can overflow.
/// Deserialization goes through the same checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProblem")]
pub struct SubsetSumProblem {
    values: Vec<i64>,
    target: i64,
}

#[derive(Deserialize)]
struct RawProblem {
    values: Vec<i64>,
    target: i64,
}

impl TryFrom<RawProblem> for SubsetSumProblem {
    type Error = SubsetSumError;

    fn try_from(raw: RawProblem) -> Result<Self> {
        Self::new(raw.values, raw.target)
    }
}

impl SubsetSumProblem {
    /// Create a new instance.
    ///
    /// # Errors
    ///
    /// Returns [`SubsetSumError::EmptyInstance`] if `values` is empty and
    /// [`SubsetSumError::ValueOverflow`] if the absolute values sum past [`i64::MAX`].
    pub fn new<I: IntoIterator<Item = i64>>(values: I, target: i64) -> Result<Self> {
        let values: Vec<i64> = values.into_iter().collect();
        if values.is_empty() {
            return Err(SubsetSumError::EmptyInstance);
        }
        values
            .iter()
            .try_fold(0i64, |total, v| total.checked_add(v.checked_abs()?))
            .ok_or(SubsetSumError::ValueOverflow)?;
        Ok(Self { values, target })
    }
    /// Parse an instance from a value list (see [`parse_values`]) and a target string.
    ///
    /// # Errors
    ///
    /// Returns [`SubsetSumError::MalformedInput`] for any non-integer token,
    /// [`SubsetSumError::EmptyInstance`] if the value list holds no tokens and
    /// [`SubsetSumError::ValueOverflow`] if the values are too large to sum safely.
    pub fn parse(values: &str, target: &str) -> Result<Self> {
        Self::new(parse_values(values)?, parse_target(target)?)
    }
    /// The candidate values in item order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }
    /// The target sum.
    pub const fn target(&self) -> i64 {
        self.target
    }
    /// The number of candidate values (the dimension of the search space).
    pub fn dimension(&self) -> usize {
        self.values.len()
    }
    /// Sum of the values selected by `mask`.
    pub fn subset_sum(&self, mask: &BitMask) -> i64 {
        mask.ones_indices().map(|i| self.values[i]).sum()
    }
    /// The values selected by `mask`, in item order.
    pub fn chosen_values(&self, mask: &BitMask) -> Vec<i64> {
        mask.ones_indices().map(|i| self.values[i]).collect()
    }
    /// See [`fitness::accuracy`].
    ///
    /// # Errors
    ///
    /// Returns [`SubsetSumError::DegenerateTarget`] if the target is zero.
    pub fn accuracy(&self, subset_sum: i64) -> Result<Float> {
        fitness::accuracy(subset_sum, self.target)
    }
}

impl Default for SubsetSumProblem {
    fn default() -> Self {
        Self {
            values: DEFAULT_VALUES.to_vec(),
            target: DEFAULT_TARGET,
        }
    }
}

/// Parse a list of integers such as `"3, 34, 4"`, `"[3 34 4]"` or `"(3,34,4)"`.
///
/// Brackets, parentheses and quotes are ignored and tokens are split on commas and whitespace.
/// An empty or blank string yields an empty list.
///
/// # Errors
///
/// Returns [`SubsetSumError::MalformedInput`] for the first token that is not an integer.
pub fn parse_values(s: &str) -> Result<Vec<i64>> {
    s.chars()
        .filter(|c| !matches!(c, '[' | ']' | '(' | ')' | '"' | '\''))
        .collect::<String>()
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_integer)
        .collect()
}

/// Parse a single integer target, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`SubsetSumError::MalformedInput`] if the string is not an integer.
pub fn parse_target(s: &str) -> Result<i64> {
    parse_integer(s.trim())
}

fn parse_integer(token: &str) -> Result<i64> {
    i64::from_str(token).map_err(|_| SubsetSumError::MalformedInput {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("3, 34, 4").unwrap(), vec![3, 34, 4]);
        assert_eq!(parse_values("[3 34\t4]").unwrap(), vec![3, 34, 4]);
        assert_eq!(parse_values("(\"3\",'34' , -4)").unwrap(), vec![3, 34, -4]);
        assert!(parse_values("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        match parse_values("3, x4, 5") {
            Err(SubsetSumError::MalformedInput { token }) => assert_eq!(token, "x4"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(
            parse_target("3.5"),
            Err(SubsetSumError::MalformedInput { .. })
        ));
        assert_eq!(parse_target(" 300 \n").unwrap(), 300);
    }

    #[test]
    fn test_empty_instance() {
        assert!(matches!(
            SubsetSumProblem::new(vec![], 10),
            Err(SubsetSumError::EmptyInstance)
        ));
        assert!(matches!(
            SubsetSumProblem::parse("[]", "10"),
            Err(SubsetSumError::EmptyInstance)
        ));
    }

    #[test]
    fn test_oversized_values_are_rejected() {
        assert!(matches!(
            SubsetSumProblem::parse("9223372036854775807, 1, 2", "5"),
            Err(SubsetSumError::ValueOverflow)
        ));
        assert!(matches!(
            SubsetSumProblem::new(vec![i64::MIN], 5),
            Err(SubsetSumError::ValueOverflow)
        ));
        assert!(matches!(
            SubsetSumProblem::new(vec![i64::MIN / 2, i64::MIN / 2, -1], 5),
            Err(SubsetSumError::ValueOverflow)
        ));
        let problem = SubsetSumProblem::new(vec![i64::MAX - 2, 1, -1], 5).unwrap();
        assert_eq!(problem.subset_sum(&BitMask::ones(3)), i64::MAX - 2);
        assert_eq!(problem.subset_sum(&BitMask::from(vec![true, true, false])), i64::MAX - 1);
    }

    #[test]
    fn test_deserialize_validates() {
        let problem = SubsetSumProblem::parse("10, 20, 30", "50").unwrap();
        let bytes = serde_pickle::to_vec(&problem, Default::default()).unwrap();
        let restored: SubsetSumProblem =
            serde_pickle::from_slice(&bytes, Default::default()).unwrap();
        assert_eq!(restored, problem);

        let empty = SubsetSumProblem {
            values: vec![],
            target: 10,
        };
        let bytes = serde_pickle::to_vec(&empty, Default::default()).unwrap();
        assert!(serde_pickle::from_slice::<SubsetSumProblem>(&bytes, Default::default()).is_err());

        let oversized = SubsetSumProblem {
            values: vec![i64::MAX, 1],
            target: 10,
        };
        let bytes = serde_pickle::to_vec(&oversized, Default::default()).unwrap();
        assert!(serde_pickle::from_slice::<SubsetSumProblem>(&bytes, Default::default()).is_err());
    }

    #[test]
    fn test_subset_sum_and_chosen_values() {
        let problem = SubsetSumProblem::parse("10, 20, 30", "1000").unwrap();
        let mask = BitMask::from(vec![true, false, true]);
        assert_eq!(problem.subset_sum(&mask), 40);
        assert_eq!(problem.chosen_values(&mask), vec![10, 30]);
        assert_eq!(problem.subset_sum(&BitMask::ones(3)), 60);
        assert_eq!(problem.dimension(), 3);
    }

    #[test]
    fn test_default_instance() {
        let problem = SubsetSumProblem::default();
        assert_eq!(problem.dimension(), 40);
        assert_eq!(problem.target(), 300);
    }
}
