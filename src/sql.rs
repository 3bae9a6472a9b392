//! Main module for sqlpprint library functionality

pub mod filters;
pub mod lexer;
pub mod pipeline;
pub mod render;
pub mod tokens;
