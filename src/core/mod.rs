pub mod calculator;
pub mod context;
pub mod integrity;
pub mod periods;
pub mod pipeline;
pub mod reconcile;
pub mod sources;
