mod image_generator;

pub use image_generator::{GeminiImageGenerator, ImageGenerator};
