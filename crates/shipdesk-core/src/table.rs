//! Search, sort, and pagination of the shipment list.
//!
//! A [`TableQuery`] holds the list view state; [`TableQuery::apply`]
//! projects a slice of list rows into the visible [`TablePage`].

use std::cmp::Ordering;

use shipdesk_common::constants::{MAX_ROWS_PER_PAGE, ROWS_PER_PAGE};
use shipdesk_common::types::{ListColumn, ListItem, SortOrder};

/// View state of the shipment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    keyword: String,
    order: SortOrder,
    order_by: ListColumn,
    page: usize,
    rows_per_page: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self::new(ROWS_PER_PAGE)
    }
}

impl TableQuery {
    /// Creates a query sorted ascending by id, on the first page.
    ///
    /// `rows_per_page` is clamped to `1..=MAX_ROWS_PER_PAGE`.
    #[must_use]
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            keyword: String::new(),
            order: SortOrder::Asc,
            order_by: ListColumn::Id,
            page: 0,
            rows_per_page: rows_per_page.clamp(1, MAX_ROWS_PER_PAGE),
        }
    }

    /// The current search keyword.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The current sort direction.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }

    /// The current sort column.
    #[must_use]
    pub const fn order_by(&self) -> ListColumn {
        self.order_by
    }

    /// The zero-based page index.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Rows shown per page.
    #[must_use]
    pub const fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Sets the search keyword and returns to the first page.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
        self.page = 0;
        tracing::debug!(keyword = %self.keyword, "list keyword changed");
    }

    /// Sets the sort column and direction directly.
    pub fn set_sort(&mut self, order_by: ListColumn, order: SortOrder) {
        self.order_by = order_by;
        self.order = order;
    }

    /// Sets the zero-based page index without clamping.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Handles a click on a column header.
    ///
    /// Clicking the active ascending column flips it to descending; any
    /// other click sorts ascending by the clicked column.
    pub fn request_sort(&mut self, column: ListColumn) {
        let is_asc = self.order_by == column && self.order == SortOrder::Asc;
        self.order = if is_asc { SortOrder::Desc } else { SortOrder::Asc };
        self.order_by = column;
        tracing::debug!(column = %column, order = %self.order, "list sort changed");
    }

    /// Number of pages needed for `filtered` rows; never zero.
    #[must_use]
    pub const fn page_count(&self, filtered: usize) -> usize {
        if filtered == 0 {
            1
        } else {
            filtered.div_ceil(self.rows_per_page)
        }
    }

    /// Advances one page, staying on the last page.
    pub fn next_page(&mut self, filtered: usize) {
        let last = self.page_count(filtered) - 1;
        self.page = (self.page + 1).min(last);
    }

    /// Goes back one page, staying on the first page.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Returns whether `item` matches the keyword (case-insensitive id search).
    #[must_use]
    pub fn matches(&self, item: &ListItem) -> bool {
        item.id
            .as_str()
            .to_lowercase()
            .contains(&self.keyword.to_lowercase())
    }

    /// Filters and stably sorts `items` according to this query.
    #[must_use]
    pub fn sorted<'a>(&self, items: &'a [ListItem]) -> Vec<&'a ListItem> {
        let mut rows: Vec<&ListItem> = items.iter().filter(|item| self.matches(item)).collect();
        rows.sort_by(|a, b| compare(a, b, self.order_by, self.order));
        rows
    }

    /// Projects `items` into the page currently in view.
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [ListItem]) -> TablePage<'a> {
        let sorted = self.sorted(items);
        let filtered_count = sorted.len();
        let start = self.page.saturating_mul(self.rows_per_page);
        let rows: Vec<&ListItem> = sorted
            .into_iter()
            .skip(start)
            .take(self.rows_per_page)
            .collect();
        let remaining = filtered_count.saturating_sub(start);
        TablePage {
            empty_rows: self.rows_per_page - remaining.min(self.rows_per_page),
            rows,
            filtered_count,
            page: self.page,
            rows_per_page: self.rows_per_page,
        }
    }
}

/// Compares two list rows by `column` in the given direction.
#[must_use]
pub fn compare(a: &ListItem, b: &ListItem, column: ListColumn, order: SortOrder) -> Ordering {
    let ascending = column.value(a).cmp(column.value(b));
    match order {
        SortOrder::Asc => ascending,
        SortOrder::Desc => ascending.reverse(),
    }
}

/// One page of the filtered, sorted shipment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePage<'a> {
    /// Rows visible on this page.
    pub rows: Vec<&'a ListItem>,
    /// Number of rows matching the keyword across all pages.
    pub filtered_count: usize,
    /// Zero-based page index.
    pub page: usize,
    /// Rows per page.
    pub rows_per_page: usize,
    /// Blank rows needed to pad this page to full height.
    pub empty_rows: usize,
}

impl TablePage<'_> {
    /// Pagination label such as `1-20 of 57`; `0-0 of N` when the page
    /// holds no rows.
    #[must_use]
    pub fn range_label(&self) -> String {
        let start = self.page.saturating_mul(self.rows_per_page);
        if start >= self.filtered_count {
            return format!("0-0 of {}", self.filtered_count);
        }
        let to = self
            .filtered_count
            .min(start.saturating_add(self.rows_per_page));
        format!("{}-{to} of {}", start + 1, self.filtered_count)
    }
}
