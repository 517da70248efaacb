//! Generic list/detail controller shared by every paginated screen.
//!
//! States: `Listing` (a page of items), `Detail` (one selected item plus an
//! optional secondary record) and `Creating` (an empty form). Every page
//! fetch replaces the previous page wholesale.

use crate::errors::{AppError, AppResult};
use crate::models::page::Page;
use crate::views::pager::Pager;

/// Fetches one page of a listing.
pub trait PageSource {
    type Item: Clone;

    fn fetch(&self, page: u32) -> AppResult<Page<Self::Item>>;
}

/// Fetches the secondary record shown next to a selected item
/// (e.g. the client and employee of an appointment).
pub trait DetailResolver<I> {
    type Detail;

    fn resolve(&self, item: &I) -> AppResult<Self::Detail>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<D> {
    Idle,
    Loading,
    Ready(D),
    Failed(String),
}

impl<D> DetailState<D> {
    pub fn ready(&self) -> Option<&D> {
        match self {
            DetailState::Ready(d) => Some(d),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode<I> {
    Listing,
    Detail(I),
    Creating,
}

/// Identifies one in-flight fetch. Only the most recent ticket may apply
/// its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

pub struct ListController<S: PageSource, D = ()> {
    source: S,
    pager: Pager,
    items: Vec<S::Item>,
    mode: ViewMode<S::Item>,
    detail: DetailState<D>,
    page_ticket: u64,
    detail_ticket: u64,
}

impl<S: PageSource, D> ListController<S, D> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pager: Pager::default(),
            items: Vec::new(),
            mode: ViewMode::Listing,
            detail: DetailState::Idle,
            page_ticket: 0,
            detail_ticket: 0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    pub fn mode(&self) -> &ViewMode<S::Item> {
        &self.mode
    }

    pub fn detail(&self) -> &DetailState<D> {
        &self.detail
    }

    /// Restore a cursor saved by an earlier invocation.
    pub fn restore_pager(&mut self, current_page: u32, total_pages: u32) {
        self.pager = Pager::new(current_page, total_pages);
    }

    /// Start a page fetch, superseding any fetch still in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.page_ticket += 1;
        FetchTicket(self.page_ticket)
    }

    /// Apply the outcome of a page fetch.
    ///
    /// Returns `Ok(false)` and leaves the state untouched when a newer fetch
    /// was started after `ticket`, whether the stale fetch succeeded or not.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: AppResult<Page<S::Item>>,
    ) -> AppResult<bool> {
        if ticket.0 != self.page_ticket {
            return Ok(false);
        }
        let page = result?;
        self.pager.update(page.current_page, page.total_pages);
        self.items = page.content;
        Ok(true)
    }

    pub fn load(&mut self, page: u32) -> AppResult<()> {
        let ticket = self.begin_fetch();
        let result = self.source.fetch(page);
        self.finish_fetch(ticket, result)?;
        Ok(())
    }

    /// Fetch the next page. `Ok(false)` means the bound was hit and
    /// nothing was fetched.
    pub fn next_page(&mut self) -> AppResult<bool> {
        match self.pager.next() {
            Some(page) => self.load(page).map(|_| true),
            None => Ok(false),
        }
    }

    pub fn previous_page(&mut self) -> AppResult<bool> {
        match self.pager.previous() {
            Some(page) => self.load(page).map(|_| true),
            None => Ok(false),
        }
    }

    fn item_at(&self, index: usize) -> AppResult<S::Item> {
        self.items
            .get(index)
            .cloned()
            .ok_or(AppError::InvalidSelection(index + 1))
    }

    /// Show an item as-is, without any secondary fetch.
    pub fn select(&mut self, index: usize) -> AppResult<S::Item> {
        let item = self.item_at(index)?;
        self.detail_ticket += 1;
        self.detail = DetailState::Idle;
        self.mode = ViewMode::Detail(item.clone());
        Ok(item)
    }

    /// Show an item and resolve its secondary record.
    ///
    /// The detail moves `Idle -> Loading -> Ready | Failed`. A failed
    /// resolution is not an error for the caller: the item stays selected.
    pub fn select_with<R>(&mut self, index: usize, resolver: &R) -> AppResult<&DetailState<D>>
    where
        R: DetailResolver<S::Item, Detail = D>,
    {
        let item = self.item_at(index)?;
        self.detail_ticket += 1;
        let ticket = self.detail_ticket;
        self.detail = DetailState::Loading;
        let outcome = resolver.resolve(&item);
        self.mode = ViewMode::Detail(item);
        if ticket == self.detail_ticket {
            self.detail = match outcome {
                Ok(d) => DetailState::Ready(d),
                Err(e) => DetailState::Failed(e.user_message()),
            };
        }
        Ok(&self.detail)
    }

    pub fn add_new(&mut self) {
        self.detail_ticket += 1;
        self.detail = DetailState::Idle;
        self.mode = ViewMode::Creating;
    }

    /// Leave a detail or create form and refresh the current page.
    pub fn back(&mut self) -> AppResult<()> {
        self.detail_ticket += 1;
        self.detail = DetailState::Idle;
        self.mode = ViewMode::Listing;
        self.load(self.pager.current_page)
    }
}
