pub mod config;
pub mod writer;

pub use config::SeederConfig;
pub use writer::BatchWriter;
