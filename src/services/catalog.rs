// src/services/catalog.rs

//! Catalog (OPAC) service.
//!
//! Every call re-fetches and re-parses the whole catalog sheet; nothing is
//! cached between searches.

use std::sync::Arc;

use crate::error::Result;
use crate::models::Book;
use crate::parser::parse_books;
use crate::search::{OpacSession, SearchPage, SearchRequest, search};
use crate::services::SheetSource;

/// Fetches and searches the published book catalog.
#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn SheetSource>,
    url: String,
}

impl CatalogService {
    pub fn new(source: Arc<dyn SheetSource>, url: impl Into<String>) -> Self {
        Self {
            source,
            url: url.into(),
        }
    }

    /// Fetch and parse the full catalog.
    pub async fn fetch_books(&self) -> Result<Vec<Book>> {
        log::info!("Fetching books from catalog sheet...");
        let csv = self.source.fetch_csv(&self.url).await.inspect_err(|e| {
            log::error!("Error fetching catalog sheet: {}", e);
        })?;
        let books = parse_books(&csv);
        log::info!("Parsed {} books", books.len());
        Ok(books)
    }

    /// Fetch the catalog and return one page of matches.
    pub async fn search(
        &self,
        query: &str,
        page: usize,
        page_size: usize,
    ) -> Result<SearchPage<Book>> {
        let books = self.fetch_books().await?;
        Ok(search(&books, query, page, page_size))
    }

    /// Perform a session request and apply the outcome.
    ///
    /// Returns false when a newer request superseded this one.
    pub async fn execute(&self, session: &mut OpacSession, request: &SearchRequest) -> bool {
        let outcome = self
            .search(&request.query, request.page, request.page_size)
            .await;
        if let Ok(page) = &outcome {
            log::debug!(
                "Fetched {} books (total matches: {})",
                page.items.len(),
                page.total
            );
        }
        session.apply(request, outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::search::SearchType;
    use crate::services::StaticSheetSource;

    const URL: &str = "https://sheets.example/books.csv";
    const MESSAGE: &str = "Failed to load books. Please try again later.";

    fn catalog_csv(rows: usize) -> String {
        let mut csv = String::from(
            "Library\nRegister\n\nNotes\nACCESSION_NO (M),TITLE (M),FIRST AUTHOR (personal Author only)- M,SUBJECT ( M),LANGUAGE CODE (M),YEAR (yyyy)(M),COST (M)\n",
        );
        for i in 0..rows {
            let lang = if i % 2 == 0 { "ENG" } else { "KAN" };
            csv.push_str(&format!("A{i},Book {i},Author {i},Science,{lang},2000,100\n"));
        }
        csv
    }

    fn service(source: StaticSheetSource) -> CatalogService {
        CatalogService::new(Arc::new(source), URL)
    }

    #[tokio::test]
    async fn test_search_pages_through_sheet() {
        let service = service(StaticSheetSource::new().with_sheet(URL, catalog_csv(30)));

        let page = service.search("kan", 1, 10).await.unwrap();
        assert_eq!(page.total, 15);
        assert_eq!(page.items.len(), 10);
        assert!(page.has_more);

        let page = service.search("kan", 2, 10).await.unwrap();
        assert_eq!(page.items.len(), 5);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_http_500_sets_session_error() {
        let service = service(StaticSheetSource::new().with_status(URL, 500));
        let mut session = OpacSession::new(20, Duration::from_millis(350), MESSAGE);

        let request = session.new_search("", SearchType::All);
        assert!(service.execute(&mut session, &request).await);

        assert!(!session.is_loading());
        assert!(session.books().is_empty());
        assert_eq!(session.error(), Some(MESSAGE));
    }

    #[tokio::test]
    async fn test_session_accumulates_pages() {
        let service = service(StaticSheetSource::new().with_sheet(URL, catalog_csv(45)));
        let mut session = OpacSession::new(20, Duration::from_millis(350), MESSAGE);

        let request = session.new_search("", SearchType::All);
        service.execute(&mut session, &request).await;
        while let Some(request) = session.load_more() {
            service.execute(&mut session, &request).await;
        }

        assert_eq!(session.books().len(), 45);
        assert_eq!(session.page(), 3);
        assert_eq!(session.total(), 45);
    }
}
