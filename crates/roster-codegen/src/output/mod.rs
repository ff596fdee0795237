pub mod atomic;

pub use atomic::write_source_atomic;
