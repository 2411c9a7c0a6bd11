use crate::request::QueryParams;

/// Cards per search-results page.
pub const PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// `page` from the URL, 1 when missing, garbage or below 1.
    pub fn from_query(params: &QueryParams) -> Self {
        let page = params
            .get("page")
            .and_then(|p| p.parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        Self {
            page,
            ..Self::default()
        }
    }

    /// Resolve against a result count. Pages past the end clamp to the last page.
    pub fn window(&self, total: usize) -> PageWindow {
        let page_size = self.page_size.max(1);
        let total_pages = total.div_ceil(page_size);
        let page = self.page.clamp(1, total_pages.max(1));
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total);

        PageWindow {
            page,
            page_size,
            total,
            total_pages,
            start: start.min(total),
            end,
        }
    }

    /// `params` pointing at `page`. Page 1 is the bare URL.
    pub fn link(params: &QueryParams, page: usize) -> QueryParams {
        let mut next = params.clone();
        next.set("page", Some(page.to_string()).filter(|_| page > 1));
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    /// Zero-based, inclusive.
    pub start: usize,
    /// Zero-based, exclusive.
    pub end: usize,
}

impl PageWindow {
    pub fn offset(&self) -> i64 {
        self.start as i64
    }

    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// "Showing 13-24 of 30 properties"
    pub fn summary(&self) -> String {
        if self.total == 0 {
            return "Showing 0 of 0 properties".to_string();
        }
        format!(
            "Showing {}-{} of {} properties",
            self.start + 1,
            self.end,
            self.total
        )
    }

    /// Page numbers to render, with `None` marking a gap. Always includes the
    /// first and last page plus one neighbour on each side of the current one.
    pub fn page_links(&self) -> Vec<Option<usize>> {
        let mut out = Vec::new();
        let mut last = 0;
        for p in 1..=self.total_pages {
            let near = p + 1 >= self.page && p <= self.page + 1;
            if p == 1 || p == self.total_pages || near {
                if last != 0 && p > last + 1 {
                    out.push(None);
                }
                out.push(Some(p));
                last = p;
            }
        }
        out
    }
}
