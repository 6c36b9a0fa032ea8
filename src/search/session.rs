//! OPAC result session.
//!
//! Holds what the catalog page shows: the committed query, accumulated
//! books, paging state and the inline error. Every request is stamped with
//! a generation; a response is applied only if no newer request has been
//! issued since, so a slow search can never overwrite a newer one.

use std::time::{Duration, Instant};

use super::{Debouncer, SearchPage, SearchType, matches};
use crate::error::Result;
use crate::models::Book;

/// A catalog fetch the session wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
    pub search_type: SearchType,
    pub page: usize,
    pub page_size: usize,
    /// Append to the accumulated list instead of replacing it
    pub append: bool,
}

/// State of the OPAC page.
#[derive(Debug, Clone)]
pub struct OpacSession {
    debouncer: Debouncer,
    query: String,
    search_type: SearchType,
    page_size: usize,
    page: usize,
    books: Vec<Book>,
    total: usize,
    has_more: bool,
    loading: bool,
    error: Option<String>,
    generation: u64,
    error_message: String,
}

impl OpacSession {
    pub fn new(page_size: usize, debounce: Duration, error_message: impl Into<String>) -> Self {
        Self {
            debouncer: Debouncer::new(debounce),
            query: String::new(),
            search_type: SearchType::All,
            page_size: page_size.max(1),
            page: 1,
            books: Vec::new(),
            total: 0,
            has_more: true,
            loading: false,
            error: None,
            generation: 0,
            error_message: error_message.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
    pub fn search_type(&self) -> SearchType {
        self.search_type
    }
    pub fn page(&self) -> usize {
        self.page
    }
    pub fn books(&self) -> &[Book] {
        &self.books
    }
    pub fn total(&self) -> usize {
        self.total
    }
    pub fn has_more(&self) -> bool {
        self.has_more
    }
    pub fn is_loading(&self) -> bool {
        self.loading
    }
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
    pub fn generation(&self) -> u64 {
        self.generation
    }
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// Feed raw text from the query box.
    pub fn type_query(&mut self, text: impl Into<String>, now: Instant) {
        self.debouncer.input(text, now);
    }

    /// Advance the debounce timer; starts a new search when a query commits.
    ///
    /// Committing the query already in effect keeps the loaded pages.
    pub fn tick(&mut self, now: Instant) -> Option<SearchRequest> {
        let committed = self.debouncer.poll(now)?;
        if self.generation > 0 && committed.trim() == self.query {
            log::debug!("Query {:?} unchanged, keeping results", self.query);
            return None;
        }
        Some(self.new_search(committed, self.search_type))
    }

    /// Preselect the search type before the first search is issued.
    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    /// Change the search-type selector, restarting from page 1.
    pub fn set_search_type(&mut self, search_type: SearchType) -> SearchRequest {
        self.new_search(self.query.clone(), search_type)
    }

    /// Start a fresh search: page 1, results replaced on arrival.
    pub fn new_search(&mut self, query: impl Into<String>, search_type: SearchType) -> SearchRequest {
        self.query = query.into().trim().to_string();
        self.search_type = search_type;
        self.page = 1;
        self.issue(1, false)
    }

    /// Request the next page, if there is one and nothing is loading.
    pub fn load_more(&mut self) -> Option<SearchRequest> {
        if !self.has_more || self.loading {
            return None;
        }
        Some(self.issue(self.page + 1, true))
    }

    fn issue(&mut self, page: usize, append: bool) -> SearchRequest {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        log::debug!(
            "OPAC request #{}: query={:?} type={} page={}",
            self.generation,
            self.query,
            self.search_type,
            page
        );
        SearchRequest {
            generation: self.generation,
            query: self.query.clone(),
            search_type: self.search_type,
            page,
            page_size: self.page_size,
            append,
        }
    }

    /// Apply a fetch outcome. Returns false when the response is stale.
    pub fn apply(&mut self, request: &SearchRequest, outcome: Result<SearchPage<Book>>) -> bool {
        if request.generation != self.generation {
            log::debug!(
                "Discarding stale OPAC response #{} (current #{})",
                request.generation,
                self.generation
            );
            return false;
        }
        self.loading = false;

        match outcome {
            Ok(result) => {
                let filtered: Vec<Book> = result
                    .items
                    .into_iter()
                    .filter(|book| matches(book, &request.query, request.search_type))
                    .collect();

                if request.append {
                    log::debug!(
                        "Appending books: {} -> {}",
                        self.books.len(),
                        self.books.len() + filtered.len()
                    );
                    self.books.extend(filtered);
                } else {
                    self.books = filtered;
                }
                self.page = request.page;
                self.total = result.total;
                self.has_more = result.has_more;
            }
            Err(error) => {
                log::error!("Search error: {}", error);
                self.error = Some(self.error_message.clone());
                if !request.append {
                    self.books.clear();
                }
            }
        }
        true
    }
}
