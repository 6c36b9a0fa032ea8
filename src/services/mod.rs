//! Service layer for the library portal.
//!
//! This module contains the data access logic for:
//! - Spreadsheet sources (`SheetSource`, `HttpSheetSource`, `StaticSheetSource`)
//! - Catalog search (`CatalogService`)
//! - Question paper archive (`QuestionPaperService`)
//! - E-resources directory (`EResourceService`)
//! - CMS content (`ContentRepository`)
//! - Visit counter (`record_visit`)

mod catalog;
pub mod content;
mod eresources;
mod question_papers;
mod sheets;
mod visitors;

pub use catalog::CatalogService;
pub use content::{ContentEntry, ContentRepository, DirectoryRepository, ManifestRepository};
pub use eresources::{EResourceService, ResourceDirectory};
pub use question_papers::{ALL, PaperArchive, QuestionPaperService};
pub use sheets::{HttpSheetSource, SheetSource, StaticSheetSource};
pub use visitors::record_visit;
