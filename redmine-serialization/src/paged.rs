/// One page of a collection response.
///
/// `total_count` is the number of matching records on the server, which can
/// exceed `items.len()`; it is 0 when the response does not report it.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub total_count: u32,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl<T> PagedList<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Whether the server reports records beyond this page.
    pub fn has_more(&self) -> bool {
        let seen = self.offset.unwrap_or(0) as usize + self.items.len();
        seen < self.total_count as usize
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
