pub mod cell;
pub mod domain;
pub mod error;
pub mod schema;
pub mod store;

pub use cell::Cell;
pub use domain::{AreaKind, DataFormat, DatasetId, DatasetKind};
pub use error::{LitlakeError, Result};
pub use schema::{ColumnSpec, ColumnType, Schema};
pub use store::DataStore;
