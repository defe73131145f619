//! Validacion de opciones para las operaciones de conversion y edicion.

use crate::compression::{Preset, Quality};
use crate::duration::is_time_string;
use crate::media::{self, MediaType};
use regex::Regex;
use std::sync::LazyLock;

static EXTENSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.?\w+$").expect("patron de extension invalido"));

/// Opciones de compresion de video con los valores por defecto del motor.
#[derive(Clone, Copy, Debug)]
pub struct CompressOptions {
    pub quality: Quality,
    pub preset: Preset,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            quality: Quality::Medium,
            preset: Preset::VerySlow,
        }
    }
}

/// Acepta `ext` o `.ext` y devuelve la extension sin el punto inicial.
pub fn normalize_extension(input: &str) -> Result<String, String> {
    if EXTENSION_REGEX.is_match(input) {
        Ok(input.trim_start_matches('.').to_string())
    } else {
        Err(format!(
            "Extension malformada. Se encontro {input} en lugar del patron '.extension' o 'extension'"
        ))
    }
}

/// Comprueba que la extension pertenezca a la lista conocida del tipo de medio.
pub fn validate_media_extension(extension: &str, media_type: MediaType) -> Result<(), String> {
    if media::is_known_extension(extension, media_type) {
        Ok(())
    } else {
        let allowed = media_type
            .known_extensions()
            .iter()
            .map(|ext| format!("\"{ext}\""))
            .collect::<Vec<_>>()
            .join(", ");
        Err(format!(
            "Extension desconocida {extension}. Proporciona una de [{allowed}]"
        ))
    }
}

/// Normaliza y valida una extension de salida en un solo paso.
pub fn validate_extension_for(input: &str, media_type: MediaType) -> Result<String, String> {
    let extension = normalize_extension(input)?;
    validate_media_extension(&extension, media_type)?;
    Ok(extension)
}

/// Valida el rango de corte `from`/`to` en formato `hh:mm:ss`.
pub fn validate_cut_range(from: &str, to: &str) -> Result<(), String> {
    if !is_time_string(from) {
        return Err(
            "Opcion \"from\" incorrecta. Proporciona una valida con el formato hh:mm:ss"
                .to_string(),
        );
    }
    if !is_time_string(to) {
        return Err(
            "Opcion \"to\" incorrecta. Proporciona una valida con el formato hh:mm:ss".to_string(),
        );
    }
    Ok(())
}

/// Valida el factor de volumen de `adjustVolume`.
pub fn validate_volume_rate(rate: f64) -> Result<(), String> {
    if !rate.is_finite() {
        return Err("La opcion \"rate\" debe ser un numero finito".to_string());
    }
    if rate < 0.0 {
        return Err("La opcion \"rate\" debe ser mayor o igual a 0".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normaliza_extensiones_con_o_sin_punto() {
        assert_eq!(normalize_extension("mp4").unwrap(), "mp4");
        assert_eq!(normalize_extension(".mp4").unwrap(), "mp4");
    }

    #[test]
    fn rechaza_extensiones_malformadas() {
        assert!(normalize_extension("..mp4").is_err());
        assert!(normalize_extension("mp 4").is_err());
        assert!(normalize_extension("a/b").is_err());
        assert!(normalize_extension("").is_err());
    }

    #[test]
    fn valida_extensiones_conocidas() {
        assert!(validate_media_extension("mp4", MediaType::Video).is_ok());
        assert!(validate_media_extension("flac", MediaType::Audio).is_ok());
    }

    #[test]
    fn rechaza_extensiones_desconocidas_listando_las_validas() {
        let error = validate_media_extension("xyz", MediaType::Audio).unwrap_err();
        assert!(error.contains("xyz"));
        assert!(error.contains("\"mp3\""));
    }

    #[test]
    fn normaliza_y_valida_en_un_paso() {
        assert_eq!(
            validate_extension_for(".mkv", MediaType::Video).unwrap(),
            "mkv"
        );
        assert!(validate_extension_for(".xyz", MediaType::Video).is_err());
        assert!(validate_extension_for("m/kv", MediaType::Video).is_err());
    }

    #[test]
    fn valida_el_rango_de_corte() {
        assert!(validate_cut_range("00:00:10", "00:01:00").is_ok());
        assert!(validate_cut_range("10", "00:01:00").is_err());
        assert!(validate_cut_range("00:00:10", "fin").is_err());
    }

    #[test]
    fn valida_el_factor_de_volumen() {
        assert!(validate_volume_rate(0.0).is_ok());
        assert!(validate_volume_rate(1.5).is_ok());
        assert!(validate_volume_rate(-0.1).is_err());
        assert!(validate_volume_rate(f64::NAN).is_err());
    }

    #[test]
    fn las_opciones_de_compresion_tienen_valores_por_defecto() {
        let options = CompressOptions::default();
        assert_eq!(options.quality, Quality::Medium);
        assert_eq!(options.preset, Preset::VerySlow);
    }
}
