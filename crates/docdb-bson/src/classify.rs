//! Array/Document boundary heuristic.

use crate::value::Document;

/// Wire shape of a dynamic container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Array,
    Document,
}

/// Decides whether a container is array-shaped.
///
/// Let L be the largest N such that the keys "1".."N" are all
/// present, starting at 1 (L = 0 for an empty container). The
/// container is an array iff L > 0 and it holds exactly L entries —
/// any entry beyond the contiguous run forces Document. So {1,2,3}
/// is an array, while {1,3}, {1,2,"x"} and {} are documents.
///
/// The scan looks only at key presence and entry count, never at
/// iteration order, and is applied independently at every nesting
/// level. Holed or mixed key sets are never partially extracted;
/// callers reason about command structure based on this exact rule.
pub fn classify(map: &Document) -> Shape {
    let mut run = 0usize;
    while map.contains_key((run + 1).to_string().as_str()) {
        run += 1;
    }
    if run > 0 && run == map.len() {
        Shape::Array
    } else {
        Shape::Document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn doc(keys: &[&str]) -> Document {
        keys.iter()
            .map(|k| ((*k).to_owned(), Value::Boolean(true)))
            .collect()
    }

    #[test]
    fn contiguous_run_is_array() {
        assert_eq!(classify(&doc(&["1", "2", "3"])), Shape::Array);
        assert_eq!(classify(&doc(&["1"])), Shape::Array);
    }

    #[test]
    fn holes_and_extras_are_documents() {
        assert_eq!(classify(&doc(&[])), Shape::Document);
        assert_eq!(classify(&doc(&["1", "3"])), Shape::Document);
        assert_eq!(classify(&doc(&["1", "2", "x"])), Shape::Document);
        assert_eq!(classify(&doc(&["0", "1"])), Shape::Document);
        assert_eq!(classify(&doc(&["a", "b"])), Shape::Document);
    }

    #[test]
    fn order_of_insertion_is_irrelevant() {
        assert_eq!(classify(&doc(&["3", "1", "2"])), Shape::Array);
    }
}
