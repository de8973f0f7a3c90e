/// Visits the variants of a [`DataType`](super::DataType).
///
/// Every method defaults to doing nothing, so an implementation only handles
/// the variants it cares about and lets the rest fall through.
pub trait DataTypeVisitor {
    fn visit_integer(&mut self, signed: bool, width: u8) {
        let _ = (signed, width);
    }

    fn visit_float(&mut self, width: u8) {
        let _ = width;
    }

    fn visit_varchar(&mut self, max_len: Option<u64>) {
        let _ = max_len;
    }

    fn visit_text(&mut self) {}

    fn visit_blob(&mut self, max_len: Option<u64>) {
        let _ = max_len;
    }

    fn visit_datetime(&mut self) {}
}
