//! Extensiones de medios conocidas y valores por defecto de las operaciones.

pub const AUDIO_EXTENSIONS: &[&str] = &[
    "aac", "aiff", "flac", "m4a", "mp3", "ogg", "opus", "wav", "wma",
];

pub const VIDEO_EXTENSIONS: &[&str] = &[
    "3gp", "avi", "flv", "m4v", "mkv", "mov", "mp4", "mpeg", "webm", "wmv",
];

pub const DEFAULT_AUDIO_EXTENSION: &str = "mp3";
pub const DEFAULT_VIDEO_EXTENSION: &str = "mp4";

/// Extension de salida por defecto al extraer la pista de audio de un video.
pub const DEFAULT_EXTRACT_AUDIO_EXTENSION: &str = "mp3";

pub const INCORRECT_INPUT_PATH: &str = "Ruta de entrada incorrecta. Proporciona una valida";
pub const INCORRECT_OUTPUT_PATH: &str = "Ruta de salida incorrecta. Proporciona una valida";
