pub mod engine;
pub mod handlers;
pub mod models;
pub mod narrative;
pub mod normalize;
pub mod prompts;
pub mod scoring;
