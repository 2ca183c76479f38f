//! Asset loading for the scene pipeline

pub mod image_loader;

pub use image_loader::{ImageData, ImageError};
