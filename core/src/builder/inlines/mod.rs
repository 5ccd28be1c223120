// Inline-level builders

pub mod emphasis;
pub mod paragraph;
pub mod strikethrough;
