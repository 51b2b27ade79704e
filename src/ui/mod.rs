/// Presentation layer: one module per dashboard section, plus shared
/// widgets and notices in `panels`.
pub mod panels;
pub mod pie;
pub mod scatter;
pub mod summary;
