pub(crate) mod columns;
pub(crate) mod import_errors;
pub(crate) mod import_model;
pub(crate) mod import_service;
pub(crate) mod import_traits;
pub(crate) mod sheet;

pub use import_errors::ImportError;
pub use import_model::{ImportResult, ImportSummary};
pub use import_service::ImportService;
pub use import_traits::ImportServiceTrait;
pub use sheet::{Cell, Row, SheetReader};
