use std::hash::Hash;

/// An item that can appear in a tab strip.
///
/// The widgets only ever depend on a stable identity per tab; titles and page
/// content stay with the caller. Ids must be unique within one tab list.
pub trait TabItem {
    /// Identity type for this item.
    type Id: Clone + Eq + Hash;

    fn id(&self) -> Self::Id;
}

impl<T: TabItem> TabItem for &T {
    type Id = T::Id;

    fn id(&self) -> Self::Id {
        (*self).id()
    }
}
