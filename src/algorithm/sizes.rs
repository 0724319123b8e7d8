//! Ordered sets of allowed square side lengths

use crate::io::error::{Result, invalid_parameter};

/// Ordered, duplicate-free set of allowed side lengths
///
/// The order is load-bearing: the search tries sizes in exactly this order at
/// every empty cell, first fit wins, so two sets with the same members but
/// different order can produce different witnesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSet {
    sizes: Vec<usize>,
}

impl SizeSet {
    /// Validate and wrap an ordered list of side lengths
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the list is empty, contains a side
    /// length below 2, or repeats a side length.
    pub fn new(sizes: Vec<usize>) -> Result<Self> {
        if sizes.is_empty() {
            return Err(invalid_parameter(
                "sizes",
                &"[]",
                &"at least one side length is required",
            ));
        }
        for (index, &size) in sizes.iter().enumerate() {
            if size < 2 {
                return Err(invalid_parameter(
                    "sizes",
                    &size,
                    &"side lengths must be at least 2",
                ));
            }
            if sizes.get(..index).is_some_and(|earlier| earlier.contains(&size)) {
                return Err(invalid_parameter(
                    "sizes",
                    &size,
                    &"side lengths must not repeat",
                ));
            }
        }
        Ok(Self { sizes })
    }

    /// Side lengths in configured order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.sizes.iter().copied()
    }

    /// Whether `size` is an allowed side length
    pub fn contains(&self, size: usize) -> bool {
        self.sizes.contains(&size)
    }

    /// Number of allowed side lengths
    pub const fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Always false for a constructed set; present for API completeness
    pub const fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SizeSet;

    #[test]
    fn test_order_is_preserved() {
        let sizes = SizeSet::new(vec![3, 2, 5]).map(|set| set.iter().collect::<Vec<_>>());
        assert_eq!(sizes.ok(), Some(vec![3, 2, 5]));
    }

    #[test]
    fn test_rejects_empty_small_and_duplicate() {
        assert!(SizeSet::new(vec![]).is_err());
        assert!(SizeSet::new(vec![2, 1]).is_err());
        assert!(SizeSet::new(vec![2, 3, 2]).is_err());
    }
}
