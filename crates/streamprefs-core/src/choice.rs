//! Mapping between user-facing choice labels and their stored form.
//!
//! Every symbolic setting is persisted as a small index (or a boolean for
//! two-way choices) into a fixed, ordered label list. None of these helpers
//! can fail: unknown labels and out-of-range indices resolve to the first
//! entry of the list.

/// Position of the first label equal to `symbol`, or 0 when absent.
pub fn index_of(symbol: &str, list: &[&str]) -> usize {
    list.iter()
        .position(|candidate| *candidate == symbol)
        .unwrap_or(0)
}

/// Label at `index`, falling back to the first label when out of bounds.
///
/// Returns an empty string only when `list` itself is empty.
pub fn symbol_at<'a>(index: usize, list: &[&'a str]) -> &'a str {
    list.get(index)
        .or_else(|| list.first())
        .copied()
        .unwrap_or_default()
}

/// Interpret `index` into a two-way list as a flag (`index == 1`).
///
/// Lists that are not exactly two entries long only accept indices 0 and 1;
/// anything else, including an index past the end, reads as `false`.
pub fn bool_from_index(index: usize, list: &[&str]) -> bool {
    if list.len() != 2 && index > 1 {
        return false;
    }
    index == 1 && index < list.len()
}

/// `true` iff `symbol` is the last label of `list`.
pub fn bool_from_symbol(symbol: &str, list: &[&str]) -> bool {
    list.last().is_some_and(|last| *last == symbol)
}

/// Second label for `true`, first label for `false`.
pub fn symbol_from_bool<'a>(flag: bool, list: &[&'a str]) -> &'a str {
    let index = usize::from(flag);
    symbol_at(index, list)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODECS: &[&str] = &["H.264", "H.265"];
    const MODES: &[&str] = &["Single", "Auto"];

    #[test]
    fn symbol_round_trips_through_index() {
        for symbol in CODECS {
            assert_eq!(symbol_at(index_of(symbol, CODECS), CODECS), *symbol);
        }
    }

    #[test]
    fn flag_round_trips_through_symbol() {
        for flag in [false, true] {
            assert_eq!(bool_from_symbol(symbol_from_bool(flag, MODES), MODES), flag);
        }
    }

    #[test]
    fn unknown_symbol_maps_to_first_index() {
        assert_eq!(index_of("AV1", CODECS), 0);
        assert_eq!(index_of("", CODECS), 0);
    }

    #[test]
    fn out_of_range_index_maps_to_first_symbol() {
        assert_eq!(symbol_at(99, CODECS), "H.264");
        assert_eq!(symbol_at(2, CODECS), "H.264");
        assert_eq!(symbol_at(1, CODECS), "H.265");
    }

    #[test]
    fn empty_list_never_panics() {
        assert_eq!(symbol_at(0, &[]), "");
        assert_eq!(symbol_from_bool(true, &[]), "");
        assert!(!bool_from_symbol("Auto", &[]));
        assert!(!bool_from_index(1, &[]));
    }

    #[test]
    fn bool_from_index_reads_second_entry_as_true() {
        assert!(!bool_from_index(0, MODES));
        assert!(bool_from_index(1, MODES));
        assert!(!bool_from_index(7, MODES));
    }

    #[test]
    fn bool_from_index_rejects_large_index_on_longer_lists() {
        let list = &["a", "b", "c"];
        assert!(bool_from_index(1, list));
        assert!(!bool_from_index(2, list));
    }

    #[test]
    fn symbol_from_bool_single_entry_list_falls_back_to_first() {
        assert_eq!(symbol_from_bool(true, &["only"]), "only");
        assert_eq!(symbol_from_bool(false, &["only"]), "only");
    }
}
