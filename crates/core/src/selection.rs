//! Selection expressions.
//!
//! A selection expression is a comma-separated list of terms, where each term
//! is a single display position (`7`) or an inclusive ascending range (`1-3`).
//! The order of the terms is the order commands are added to the script, so
//! `3,1,2` puts the third command first.

use std::ops::RangeInclusive;

use indexmap::IndexSet;

use crate::error::{Error, Result};

fn parse_position(token: &str) -> Result<usize> {
    token
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::InvalidSelectionTerm(token.trim().to_string()))
}

fn parse_term(term: &str) -> Result<RangeInclusive<usize>> {
    match term.split_once('-') {
        Some((min, max)) => {
            let (min, max) = (parse_position(min)?, parse_position(max)?);
            if min > max {
                return Err(Error::ReversedSelectionRange { min, max });
            }
            Ok(min..=max)
        }
        None => {
            let position = parse_position(term)?;
            Ok(position..=position)
        }
    }
}

/// Parses a selection expression into its terms, in expression order.
///
/// A single position is a one-element range. Ranges are not expanded here.
///
/// # Errors
///
/// Returns an invalid selection error naming the first bad term.
///
/// # Examples
///
/// ```
/// use histscript_core::selection::parse_selection;
///
/// assert_eq!(parse_selection("3,1-2,7")?, vec![3..=3, 1..=2, 7..=7]);
/// # Ok::<(), histscript_core::error::Error>(())
/// ```
pub fn parse_selection(expression: &str) -> Result<Vec<RangeInclusive<usize>>> {
    expression
        .split(',')
        .map(|term| {
            if term.trim().is_empty() {
                Err(Error::EmptySelectionTerm(expression.to_string()))
            } else {
                parse_term(term)
            }
        })
        .collect()
}

/// Checks terms against a sequence of `count` commands, then expands them to
/// positions and drops repeats, keeping the first occurrence of each.
///
/// # Errors
///
/// Returns [`Error::SelectionOutOfRange`] for the first position outside `1..=count`.
pub fn resolve_positions(terms: &[RangeInclusive<usize>], count: usize) -> Result<Vec<usize>> {
    for term in terms {
        let (min, max) = (*term.start(), *term.end());
        if min == 0 {
            return Err(Error::SelectionOutOfRange { position: 0, count });
        }
        if max > count {
            let position = min.max(count.saturating_add(1));
            return Err(Error::SelectionOutOfRange { position, count });
        }
    }

    let unique: IndexSet<usize> = terms.iter().cloned().flatten().collect();
    Ok(unique.into_iter().collect())
}

/// Parses and resolves an expression in one step.
///
/// # Errors
///
/// Returns an invalid selection error if the expression is malformed or names
/// a position outside the sequence.
pub fn resolve_selection(expression: &str, count: usize) -> Result<Vec<usize>> {
    resolve_positions(&parse_selection(expression)?, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_ranges() {
        assert_eq!(parse_selection("2,3-3").unwrap(), vec![2..=2, 3..=3]);
        assert_eq!(parse_selection("1-4").unwrap(), vec![1..=4]);
        assert_eq!(parse_selection(" 5 , 1 - 2 ").unwrap(), vec![5..=5, 1..=2]);
        assert_eq!(resolve_selection("1-4", 4).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_expression_order_is_preserved() {
        assert_eq!(resolve_selection("3,1,2", 3).unwrap(), vec![3, 1, 2]);
        assert_eq!(resolve_selection("3,1-2", 3).unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn test_bad_term_rejects_whole_expression() {
        match parse_selection("1,two,3") {
            Err(Error::InvalidSelectionTerm(term)) => assert_eq!(term, "two"),
            other => panic!("Expected InvalidSelectionTerm, got {other:?}"),
        }
        assert!(matches!(
            parse_selection("1-x"),
            Err(Error::InvalidSelectionTerm(_))
        ));
        assert!(matches!(
            parse_selection("1-2-3"),
            Err(Error::InvalidSelectionTerm(_))
        ));
        assert!(matches!(
            parse_selection("-3"),
            Err(Error::InvalidSelectionTerm(_))
        ));
    }

    #[test]
    fn test_empty_terms_rejected() {
        assert!(matches!(
            parse_selection("1,,2"),
            Err(Error::EmptySelectionTerm(_))
        ));
        assert!(matches!(
            parse_selection(""),
            Err(Error::EmptySelectionTerm(_))
        ));
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(matches!(
            parse_selection("4-2"),
            Err(Error::ReversedSelectionRange { min: 4, max: 2 })
        ));
    }

    #[test]
    fn test_resolve_out_of_range() {
        assert!(matches!(
            resolve_selection("5", 3),
            Err(Error::SelectionOutOfRange {
                position: 5,
                count: 3
            })
        ));
        assert!(matches!(
            resolve_selection("0", 3),
            Err(Error::SelectionOutOfRange { position: 0, .. })
        ));
        assert!(matches!(
            resolve_selection("1", 0),
            Err(Error::SelectionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_huge_range_checked_before_expanding() {
        let max = usize::MAX.to_string();
        match resolve_selection(&format!("1-{max}"), 3) {
            Err(Error::SelectionOutOfRange { position, count }) => {
                assert_eq!((position, count), (4, 3));
            }
            other => panic!("Expected SelectionOutOfRange, got {other:?}"),
        }
        assert!(matches!(
            resolve_selection("2,100000000000-100000000001", 3),
            Err(Error::SelectionOutOfRange {
                position: 100_000_000_000,
                count: 3
            })
        ));
        assert!(matches!(
            resolve_selection("0-2", 3),
            Err(Error::SelectionOutOfRange { position: 0, .. })
        ));
    }

    #[test]
    fn test_resolve_drops_repeats() {
        assert_eq!(resolve_selection("1-3,2,1", 3).unwrap(), vec![1, 2, 3]);
        assert_eq!(resolve_selection("3,3,1", 3).unwrap(), vec![3, 1]);
    }

    #[test]
    fn test_resolved_positions_in_bounds() {
        for expression in ["1", "1-10", "10,9,8", "2-5,7-9"] {
            let positions = resolve_selection(expression, 10).unwrap();
            assert!(positions.iter().all(|&p| (1..=10).contains(&p)));
        }
    }
}
