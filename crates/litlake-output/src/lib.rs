pub mod writer;

pub use writer::write_outputs;
