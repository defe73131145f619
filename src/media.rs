//! Nombres, extensiones y deteccion de medios remotos a partir de rutas o URLs.

use crate::constants::{
    AUDIO_EXTENSIONS, DEFAULT_AUDIO_EXTENSION, DEFAULT_VIDEO_EXTENSION, INCORRECT_INPUT_PATH,
    VIDEO_EXTENSIONS,
};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\w+:)?//([^\s.]+\.\S{2}|localhost[:?\d]*)\S*$")
        .expect("patron de URL invalido")
});

/// Tipo de medio soportado por el motor.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Audio,
    Video,
}

impl MediaType {
    /// Extensiones reconocidas para este tipo de medio.
    pub fn known_extensions(self) -> &'static [&'static str] {
        match self {
            MediaType::Audio => AUDIO_EXTENSIONS,
            MediaType::Video => VIDEO_EXTENSIONS,
        }
    }

    /// Extension usada cuando la ruta no trae una reconocida.
    pub fn default_extension(self) -> &'static str {
        match self {
            MediaType::Audio => DEFAULT_AUDIO_EXTENSION,
            MediaType::Video => DEFAULT_VIDEO_EXTENSION,
        }
    }
}

pub fn parse_media_type(input: &str) -> Result<MediaType, String> {
    match input.to_lowercase().as_str() {
        "audio" => Ok(MediaType::Audio),
        "video" => Ok(MediaType::Video),
        _ => Err("Tipo de medio no reconocido".to_string()),
    }
}

/// Indica si la ruta apunta a un medio remoto en lugar de uno local.
pub fn is_remote_media(path: &str) -> bool {
    path.split(":/")
        .next()
        .is_some_and(|scheme| scheme.contains("http"))
}

/// Comprueba si la URL tiene una forma valida.
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

/// Nombre completo del archivo (con extension) a partir de una ruta o URL.
///
/// Las URLs remotas deben ser validas; una barra final se ignora.
pub fn full_filename(path: &str) -> Result<String, String> {
    if path.contains("http") && !is_valid_url(path) {
        return Err(INCORRECT_INPUT_PATH.to_string());
    }

    let trimmed = path.strip_suffix('/').unwrap_or(path);
    let segments: Vec<&str> = trimmed.split('/').collect();
    if segments.len() > 1 {
        Ok(segments[segments.len() - 1].to_string())
    } else {
        Err(INCORRECT_INPUT_PATH.to_string())
    }
}

/// Nombre del archivo sin la extension final.
pub fn filename(path: &str) -> Result<String, String> {
    let full = full_filename(path)?;
    let parts: Vec<&str> = full.split('.').collect();
    if parts.len() > 1 {
        Ok(parts[..parts.len() - 1].concat())
    } else {
        Ok(full)
    }
}

/// Extension del medio; si la ruta no trae una reconocida se usa la del tipo.
pub fn extension_for(path: &str, media_type: MediaType) -> String {
    let Ok(full) = full_filename(path) else {
        return media_type.default_extension().to_string();
    };

    let parts: Vec<&str> = full.split('.').collect();
    if parts.len() > 1 {
        let extension = parts[parts.len() - 1];
        if is_known_extension(extension, media_type) {
            return extension.to_string();
        }
    }
    media_type.default_extension().to_string()
}

/// Comprueba si la extension pertenece a la lista conocida del tipo de medio.
pub fn is_known_extension(extension: &str, media_type: MediaType) -> bool {
    let lowered = extension.to_lowercase();
    media_type.known_extensions().contains(&lowered.as_str())
}

/// Resumen serializable de un medio para la capa de escritorio.
#[derive(Clone, Debug, Serialize)]
pub struct MediaSummary {
    pub path: String,
    pub filename: Option<String>,
    pub extension: String,
    pub is_remote: bool,
}

pub fn describe_media(path: &str, media_type: MediaType) -> MediaSummary {
    MediaSummary {
        path: path.to_string(),
        filename: filename(path).ok(),
        extension: extension_for(path, media_type),
        is_remote: is_remote_media(path),
    }
}
