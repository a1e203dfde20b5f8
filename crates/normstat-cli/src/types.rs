#[derive(Debug)]
pub struct SheetInfo {
    pub name: String,
    pub columns: usize,
    pub rows: usize,
}
