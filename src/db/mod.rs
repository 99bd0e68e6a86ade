pub mod corrections;
pub mod import;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
