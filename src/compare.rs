//! Order-independent list comparison, used by assertion layers to diff
//! result data against expectations without caring about element order.

/// Returns the elements of `left` that have no matching element in `right`.
///
/// Each element of `left` is considered in order, and consumes the first
/// not-yet-consumed element of `right` that `eq` accepts; an element of
/// `right` can therefore match at most one element of `left`. Invoke
/// symmetrically (once each way) to detect asymmetric differences.
pub fn unmatched<'a, T, F>(left: &'a [T], right: &[T], eq: F) -> Vec<&'a T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut remaining: Vec<&T> = right.iter().collect();
    let mut missing = vec![];

    for item in left {
        match remaining.iter().position(|candidate| eq(item, candidate)) {
            Some(idx) => {
                remaining.remove(idx);
            },
            None => missing.push(item),
        }
    }

    missing
}

/// True if `left` and `right` contain the same elements under `eq`,
/// ignoring order but respecting multiplicity.
pub fn lists_match<T, F>(left: &[T], right: &[T], eq: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    unmatched(left, right, &eq).is_empty()
        && unmatched(right, left, |a, b| eq(b, a)).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_returns_left_remainder() {
        let left = vec![1, 2, 3];
        let right = vec![3, 1];
        assert_eq!(unmatched(&left, &right, |a, b| a == b), vec![&2]);
    }

    #[test]
    fn matched_elements_are_consumed_once() {
        let left = vec![1, 1];
        let right = vec![1];
        assert_eq!(unmatched(&left, &right, |a, b| a == b), vec![&1]);
    }

    #[test]
    fn lists_match_ignores_order_but_not_multiplicity() {
        let eq = |a: &i32, b: &i32| a == b;
        assert!(lists_match(&[1, 2, 2], &[2, 1, 2], eq));
        assert!(!lists_match(&[1, 2], &[2, 1, 1], eq));
        assert!(!lists_match(&[2, 1, 1], &[1, 2], eq));
    }

    #[test]
    fn custom_equality_functions_are_honored() {
        let left = vec!["Dog".to_string(), "CAT".to_string()];
        let right = vec!["cat".to_string(), "dog".to_string()];
        let eq = |a: &String, b: &String| a.eq_ignore_ascii_case(b);
        assert!(lists_match(&left, &right, eq));
    }
}
