//! Ranking order over submitted scores.
//!
//! Scores are arbitrary JSON. Numbers rank by value and booleans count as
//! `1`/`0`. Two integers compare exactly; a float on either side compares as
//! `f64`, so `10` ties with `10.0` and `0` with `-0.0`. Every other value
//! (`null`, strings, arrays, objects) has no rank key and sorts after all
//! numeric scores; such scores compare equal to each other so a stable sort
//! keeps them in submission order.

use std::cmp::Ordering;

use serde_json::Value;

#[derive(Debug, Clone, Copy)]
pub enum RankKey {
    Int(i128),
    Float(f64),
}

impl RankKey {
    fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

pub fn rank_key(score: &Value) -> Option<RankKey> {
    match score {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .map(RankKey::Int)
            .or_else(|| n.as_f64().map(RankKey::Float)),
        Value::Bool(b) => Some(RankKey::Int(i128::from(*b))),
        _ => None,
    }
}

/// Comparator for a descending leaderboard: higher scores first.
pub fn descending(a: &Value, b: &Value) -> Ordering {
    match (rank_key(a), rank_key(b)) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_rank_by_value() {
        assert_eq!(rank_key(&json!(20)), Some(RankKey::Int(20)));
        assert_eq!(rank_key(&json!(-3.5)), Some(RankKey::Float(-3.5)));
        assert_eq!(descending(&json!(20), &json!(10)), Ordering::Less);
        assert_eq!(descending(&json!(10), &json!(20)), Ordering::Greater);
    }

    #[test]
    fn test_integer_and_float_compare_equal() {
        assert_eq!(descending(&json!(10), &json!(10.0)), Ordering::Equal);
        assert_eq!(descending(&json!(0), &json!(-0.0)), Ordering::Equal);
    }

    #[test]
    fn test_large_integers_compare_exactly() {
        let small = json!(9007199254740992u64);
        let big = json!(9007199254740993u64);
        assert_eq!(descending(&big, &small), Ordering::Less);
        assert_eq!(descending(&small, &big), Ordering::Greater);
        assert_eq!(descending(&json!(u64::MAX), &json!(i64::MIN)), Ordering::Less);
    }

    #[test]
    fn test_booleans_count_as_one_and_zero() {
        assert_eq!(rank_key(&json!(true)), Some(RankKey::Int(1)));
        assert_eq!(rank_key(&json!(false)), Some(RankKey::Int(0)));
        assert_eq!(descending(&json!(true), &json!(1)), Ordering::Equal);
    }

    #[test]
    fn test_non_numeric_scores_rank_last() {
        for value in [json!(null), json!("99"), json!([1]), json!({"v": 1})] {
            assert_eq!(rank_key(&value), None);
            assert_eq!(descending(&json!(-1000), &value), Ordering::Less);
            assert_eq!(descending(&value, &json!(-1000)), Ordering::Greater);
        }
        assert_eq!(descending(&json!(null), &json!("abc")), Ordering::Equal);
    }
}
