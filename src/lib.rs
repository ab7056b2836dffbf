pub mod data;
pub mod pipeline;
pub mod receipt;
pub mod render;
pub mod settings;
