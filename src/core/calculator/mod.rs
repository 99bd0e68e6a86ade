pub mod leave;
pub mod lunch;
pub mod punctuality;
pub mod summary;
