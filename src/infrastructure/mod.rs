pub mod audio;
pub mod observability;
pub mod speech;
pub mod text_processing;
