use crate::RawColumn;

/// One fetched row, owning the raw bytes of each cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<Option<Vec<u8>>>,
}

impl RawRow {
    pub fn new(cells: Vec<Option<Vec<u8>>>) -> RawRow {
        RawRow { cells }
    }

    /// Borrowed views of the cells, in column order.
    pub fn columns(&self) -> Vec<RawColumn<'_>> {
        self.cells
            .iter()
            .map(|cell| RawColumn::new(cell.as_deref()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<Option<Vec<u8>>> for RawRow {
    fn from_iter<I: IntoIterator<Item = Option<Vec<u8>>>>(iter: I) -> Self {
        RawRow::new(iter.into_iter().collect())
    }
}
