//! Deterministic result titles

use crate::search::criteria::SearchCriteria;

/// Separator between criteria values and the trailing ordinal
pub const TITLE_SEPARATOR: &str = " - ";

/// Derive a human-readable title for the record at `ordinal` within the
/// result sequence of a search for `criteria`.
///
/// The base descriptor joins the present criteria values in fixed field
/// order (gene, then cluster); the zero-based ordinal is appended with
/// the same separator, making titles unique within one search. With no
/// present criteria the base is empty and the title is the bare
/// ordinal.
///
/// Pure function: callable for any ordinal in any order.
pub fn result_title(criteria: &SearchCriteria, ordinal: usize) -> String {
    let mut parts = criteria.value_strings();
    parts.push(ordinal.to_string());
    parts.join(TITLE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_only_title() {
        let criteria = SearchCriteria::new().with_gene_id("BRCA1");
        assert_eq!(result_title(&criteria, 0), "BRCA1 - 0");
        assert_eq!(result_title(&criteria, 2), "BRCA1 - 2");
    }

    #[test]
    fn test_both_criteria_in_fixed_order() {
        let criteria = SearchCriteria::new().with_cluster_id(7).with_gene_id("BRCA1");
        assert_eq!(result_title(&criteria, 1), "BRCA1 - 7 - 1");
    }

    #[test]
    fn test_empty_criteria_fall_back_to_bare_ordinal() {
        assert_eq!(result_title(&SearchCriteria::new(), 3), "3");
    }

    #[test]
    fn test_deterministic_and_order_independent() {
        let criteria = SearchCriteria::new().with_gene_id("TP53");

        let later = result_title(&criteria, 9);
        let earlier = result_title(&criteria, 0);

        assert_eq!(result_title(&criteria, 9), later);
        assert_eq!(earlier, "TP53 - 0");
        assert_eq!(later, "TP53 - 9");
    }

    #[test]
    fn test_adjacent_ordinals_differ_only_in_suffix() {
        let criteria = SearchCriteria::new().with_gene_id("BRCA1").with_cluster_id(4);
        let a = result_title(&criteria, 0);
        let b = result_title(&criteria, 1);

        assert_eq!(a.strip_suffix('0'), b.strip_suffix('1'));
    }
}
