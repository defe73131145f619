//! Motor de AVTools: rutas unicas de cache y utilidades puras de audio y video.

pub mod cache;
pub mod compression;
pub mod constants;
pub mod duration;
pub mod media;
pub mod options;

pub use cache::{CacheDirError, generate_cache_file, generate_file, to_file_uri};
