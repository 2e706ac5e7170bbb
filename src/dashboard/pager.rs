/// Listings pagination for one request.
///
/// The page number travels in the URL, so nothing is kept between requests.
/// `next` is offered only when the last fetch filled a whole page. That is an
/// approximation: when the upstream total divides evenly by the page size the
/// final page still offers `next`, which then lands on an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    page_size: u32,
    last_fetch_len: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerAction {
    Previous,
    Next,
}

impl Pager {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            last_fetch_len: None,
        }
    }

    /// Builds the pager from a raw `page` query value; anything unparsable is page 1.
    pub fn from_query(page: Option<&str>, page_size: u32) -> Self {
        let page = page
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(1);
        Self::new(page, page_size)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// 1-based rank of the first record on this page.
    pub fn start(&self) -> u32 {
        (self.page - 1).saturating_mul(self.page_size).saturating_add(1)
    }

    pub fn record_fetch(self, rows: usize) -> Self {
        Self {
            last_fetch_len: Some(rows),
            ..self
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.last_fetch_len == Some(self.page_size as usize)
    }

    /// State after `action`, or `None` when the action is not available.
    /// The new state has not been fetched yet.
    pub fn apply(self, action: PagerAction) -> Option<Self> {
        match action {
            PagerAction::Previous if self.has_previous() => {
                Some(Self::new(self.page - 1, self.page_size))
            }
            PagerAction::Next if self.has_next() => {
                Some(Self::new(self.page.saturating_add(1), self.page_size))
            }
            _ => None,
        }
    }
}
