//! Row descriptors for the flattened accordion.
//!
//! A [`RowDescriptor`] names one visible row of the flat list as a
//! `(section, item)` coordinate. Descriptors are derived values: they are only
//! meaningful for the model version they were projected from, and should be
//! used immediately rather than stored.

/// One visible row of the flattened accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowDescriptor {
    /// The header row of the section at `section`.
    SectionHeader {
        /// Section position.
        section: usize,
    },
    /// An item row inside an expanded section.
    Item {
        /// Section position.
        section: usize,
        /// Item position within the section.
        item: usize,
    },
}

impl RowDescriptor {
    /// Creates a header descriptor.
    #[inline]
    pub const fn header(section: usize) -> Self {
        Self::SectionHeader { section }
    }

    /// Creates an item descriptor.
    #[inline]
    pub const fn item(section: usize, item: usize) -> Self {
        Self::Item { section, item }
    }

    /// Returns the section this row belongs to.
    #[inline]
    pub fn section(&self) -> usize {
        match *self {
            Self::SectionHeader { section } | Self::Item { section, .. } => section,
        }
    }

    /// Returns the item position, or `None` for a header.
    #[inline]
    pub fn item_index(&self) -> Option<usize> {
        match *self {
            Self::SectionHeader { .. } => None,
            Self::Item { item, .. } => Some(item),
        }
    }

    /// Returns `true` if this is a section header row.
    #[inline]
    pub fn is_header(&self) -> bool {
        matches!(self, Self::SectionHeader { .. })
    }
}

impl PartialOrd for RowDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Rows order the way they appear in the flat list: by section, with the
/// header before that section's items.
impl Ord for RowDescriptor {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.section(), self.item_index()).cmp(&(other.section(), other.item_index()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let header = RowDescriptor::header(2);
        assert!(header.is_header());
        assert_eq!(header.section(), 2);
        assert_eq!(header.item_index(), None);

        let item = RowDescriptor::item(1, 4);
        assert!(!item.is_header());
        assert_eq!(item.section(), 1);
        assert_eq!(item.item_index(), Some(4));
    }

    #[test]
    fn test_ordering_matches_walk_order() {
        // Header, then its items, then the next header.
        let mut rows = vec![
            RowDescriptor::header(1),
            RowDescriptor::item(0, 1),
            RowDescriptor::header(0),
            RowDescriptor::item(0, 0),
        ];
        rows.sort();
        assert_eq!(
            rows,
            vec![
                RowDescriptor::header(0),
                RowDescriptor::item(0, 0),
                RowDescriptor::item(0, 1),
                RowDescriptor::header(1),
            ]
        );
    }
}
