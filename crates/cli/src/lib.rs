pub mod batch;
pub mod hook;
pub mod pipeline;
