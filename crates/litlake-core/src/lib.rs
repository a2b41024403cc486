pub mod dates;
pub mod frame;
pub mod keys;
pub mod text;
pub mod validator;

pub use dates::parse_date_dayfirst;
pub use frame::{concat_union, drop_all_null_columns, project_columns, reject_frame, typed_frame};
pub use keys::{assign_technical_ids, functional_key};
pub use text::clean_text;
pub use validator::{SchemaValidator, Validated};
