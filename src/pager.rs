use crate::names::QUESTIONS_PER_PAGE;

/// A 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub const FIRST: Page = Page(1);

    /// Returns `None` for page numbers below 1 or past `u32::MAX`.
    pub fn new(number: i64) -> Option<Self> {
        u32::try_from(number).ok().filter(|&n| n >= 1).map(Page)
    }

    /// Parses a raw `?page=` value. Absent or non-numeric values fall back to the
    /// first page; numeric values below 1 are rejected.
    pub fn from_query(raw: Option<&str>) -> Option<Self> {
        match raw.map(str::trim).map(str::parse::<i64>) {
            Some(Ok(number)) => Page::new(number),
            _ => Some(Page::FIRST),
        }
    }
}

/// Slice of `items` that belongs to `page`. Pages past the end are empty.
pub fn paginate<T>(page: Page, items: &[T]) -> &[T] {
    let start = (page.0 as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    let end = start.saturating_add(QUESTIONS_PER_PAGE);

    if start >= items.len() {
        return &[];
    }
    &items[start..end.min(items.len())]
}

pub fn page_count(len: usize) -> usize {
    len.div_ceil(QUESTIONS_PER_PAGE)
}
