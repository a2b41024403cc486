pub mod csv;
pub mod ipc;
pub mod json;
pub mod table;
pub mod values;

pub use csv::read_csv;
pub use ipc::read_ipc;
pub use json::read_json;
pub use table::read_table;
pub use values::{any_is_null, format_numeric, render_any};
