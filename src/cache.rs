//! Generacion de rutas unicas dentro del directorio de cache de la aplicacion.

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Subdirectorio propio de la aplicacion dentro del cache de la plataforma.
const CACHE_DIR_NAME: &str = "avtools";

/// La plataforma no pudo proveer el directorio de cache.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CacheDirError {
    detail: String,
}

impl CacheDirError {
    fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for CacheDirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No se pudo resolver el directorio de cache: {}",
            self.detail
        )
    }
}

impl Error for CacheDirError {}

/// Construye una ruta unica `<dir>/<uuid>.<extension>` sin tocar el sistema de archivos.
///
/// La extension se concatena tal cual: no se valida, no se normaliza y no se
/// escapa. El archivo no se crea; quien recibe la ruta decide si escribe en ella.
pub fn generate_cache_file(cache_dir: &Path, extension: &str) -> String {
    format!("{}/{}.{}", cache_dir.display(), Uuid::new_v4(), extension)
}

/// Genera una ruta de archivo unica dentro del cache de la aplicacion.
pub fn generate_file(extension: &str) -> Result<String, CacheDirError> {
    let cache_dir = resolve_cache_dir()?;
    Ok(generate_cache_file(&cache_dir, extension))
}

/// Prefija la ruta con `file://` para los consumidores que esperan una URI.
pub fn to_file_uri(path: &str) -> String {
    format!("file://{path}")
}

fn resolve_cache_dir() -> Result<PathBuf, CacheDirError> {
    cache_dir_from(dirs::cache_dir())
}

fn cache_dir_from(base: Option<PathBuf>) -> Result<PathBuf, CacheDirError> {
    base.map(|dir| dir.join(CACHE_DIR_NAME))
        .ok_or_else(|| CacheDirError::new("la plataforma no expone un directorio de cache"))
}
