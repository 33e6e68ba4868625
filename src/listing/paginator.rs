use std::num::NonZeroUsize;

use serde::Serialize;

/// Default number of page buttons shown around the current page.
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Contiguous run of page numbers to render as buttons.
///
/// Shows every page when there are at most `width` of them, otherwise a window
/// of exactly `width` pages centred on `current_page` and shifted to stay
/// inside `1..=page_count`. With an even width the extra page goes right.
pub fn page_window(current_page: usize, page_count: usize, width: usize) -> Vec<usize> {
    if page_count == 0 || width == 0 {
        return vec![];
    }
    if page_count <= width {
        return (1..=page_count).collect();
    }

    let current_page = current_page.clamp(1, page_count);
    let left = (width - 1) / 2;
    let right = width / 2;

    let start = if current_page <= left + 1 {
        1
    } else if current_page + right >= page_count {
        page_count - width + 1
    } else {
        current_page - left
    };

    (start..start + width).collect()
}

/// Current page and fixed page size of a list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageState {
    current_page: usize,
    page_size: NonZeroUsize,
}

impl PageState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Number of pages for `len` items; at least one even when empty.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size.get()).max(1)
    }

    /// Moves to `requested`, clamped into `1..=page_count(len)`.
    pub fn set_page(&mut self, requested: i64, len: usize) {
        let page_count = self.page_count(len);
        self.current_page = usize::try_from(requested.max(1))
            .unwrap_or(usize::MAX)
            .min(page_count);
    }

    /// Pulls the current page back into range after the item count changed.
    pub fn clamp(&mut self, len: usize) {
        self.current_page = self.current_page.clamp(1, self.page_count(len));
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Items visible on the current page.
    ///
    /// Clamps on the fly, so a stale page never renders an empty slice while
    /// items exist.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let page = self.current_page.clamp(1, self.page_count(items.len()));
        let start = (page - 1) * self.page_size.get();
        let end = (start + self.page_size.get()).min(items.len());
        &items[start.min(end)..end]
    }
}

/// One rendered page of a list together with its navigation state.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page buttons to render.
    pub pages: Vec<usize>,
    pub page: usize,
    pub page_count: usize,
    /// Number of items across all pages.
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    /// Cuts the current page out of `items` and computes navigation.
    pub fn new<S>(items: &[S], state: &PageState, window: usize) -> Self
    where
        S: Clone + Into<T>,
    {
        let total = items.len();
        let page_count = state.page_count(total);
        let page = state.current_page().clamp(1, page_count);

        Self {
            items: state.slice(items).iter().cloned().map(Into::into).collect(),
            pages: page_window(page, page_count, window),
            page,
            page_count,
            total,
            has_previous: page > 1,
            has_next: page < page_count,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            page: self.page,
            page_count: self.page_count,
            total: self.total,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }
}
