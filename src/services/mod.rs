pub mod halftone_service;

pub use halftone_service::{HalftoneService, RenderOptions, RenderReport};
