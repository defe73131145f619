//! Niveles de calidad y velocidad y su traduccion a ajustes de FFmpeg.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    #[default]
    Medium,
    High,
}

impl Quality {
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Low => "low",
            Quality::Medium => "medium",
            Quality::High => "high",
        }
    }

    pub const fn values() -> &'static [Quality] {
        &[Quality::Low, Quality::Medium, Quality::High]
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Speed {
    pub fn as_str(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Normal => "normal",
            Speed::Fast => "fast",
        }
    }

    pub const fn values() -> &'static [Speed] {
        &[Speed::Slow, Speed::Normal, Speed::Fast]
    }
}

/// Presets de codificacion de FFmpeg, del mas lento al mas rapido.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    VerySlow,
    Slower,
    Slow,
    Medium,
    Fast,
    Faster,
    VeryFast,
    SuperFast,
    UltraFast,
}

impl Preset {
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::VerySlow => "veryslow",
            Preset::Slower => "slower",
            Preset::Slow => "slow",
            Preset::Medium => "medium",
            Preset::Fast => "fast",
            Preset::Faster => "faster",
            Preset::VeryFast => "veryfast",
            Preset::SuperFast => "superfast",
            Preset::UltraFast => "ultrafast",
        }
    }

    pub const fn values() -> &'static [Preset] {
        &[
            Preset::VerySlow,
            Preset::Slower,
            Preset::Slow,
            Preset::Medium,
            Preset::Fast,
            Preset::Faster,
            Preset::VeryFast,
            Preset::SuperFast,
            Preset::UltraFast,
        ]
    }
}

pub fn parse_quality(input: &str) -> Result<Quality, String> {
    match input.to_lowercase().as_str() {
        "low" | "baja" => Ok(Quality::Low),
        "medium" | "media" => Ok(Quality::Medium),
        "high" | "alta" => Ok(Quality::High),
        _ => Err(format!(
            "Calidad no reconocida. Proporciona una de [{}]",
            quoted_values(Quality::values().iter().map(|q| q.as_str()))
        )),
    }
}

pub fn parse_speed(input: &str) -> Result<Speed, String> {
    match input.to_lowercase().as_str() {
        "slow" | "lenta" => Ok(Speed::Slow),
        "normal" => Ok(Speed::Normal),
        "fast" | "rapida" => Ok(Speed::Fast),
        _ => Err(format!(
            "Velocidad no reconocida. Proporciona una de [{}]",
            quoted_values(Speed::values().iter().map(|s| s.as_str()))
        )),
    }
}

pub fn parse_preset(input: &str) -> Result<Preset, String> {
    let lowered = input.to_lowercase();
    Preset::values()
        .iter()
        .copied()
        .find(|preset| preset.as_str() == lowered)
        .ok_or_else(|| {
            format!(
                "Preset no reconocido. Proporciona uno de [{}]",
                quoted_values(Preset::values().iter().map(|p| p.as_str()))
            )
        })
}

/// Ajustes de FFmpeg derivados de calidad y velocidad.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct CompressionSettings {
    pub crf: &'static str,
    pub preset: &'static str,
}

/// Traduce calidad y velocidad al par `-crf`/`-preset` de FFmpeg.
pub fn settings_for(quality: Quality, speed: Speed) -> CompressionSettings {
    CompressionSettings {
        crf: match quality {
            Quality::Low => "28",
            Quality::Medium => "23",
            Quality::High => "18",
        },
        preset: match speed {
            Speed::Slow => "veryslow",
            Speed::Normal => "medium",
            Speed::Fast => "fast",
        },
    }
}

fn quoted_values<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|value| format!("\"{value}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traduce_calidad_a_crf() {
        assert_eq!(settings_for(Quality::Low, Speed::Normal).crf, "28");
        assert_eq!(settings_for(Quality::Medium, Speed::Normal).crf, "23");
        assert_eq!(settings_for(Quality::High, Speed::Normal).crf, "18");
    }

    #[test]
    fn traduce_velocidad_a_preset() {
        assert_eq!(settings_for(Quality::Medium, Speed::Slow).preset, "veryslow");
        assert_eq!(settings_for(Quality::Medium, Speed::Normal).preset, "medium");
        assert_eq!(settings_for(Quality::Medium, Speed::Fast).preset, "fast");
    }

    #[test]
    fn parsea_valores_con_alias_en_espanol() {
        assert_eq!(parse_quality("alta").unwrap(), Quality::High);
        assert_eq!(parse_speed("LENTA").unwrap(), Speed::Slow);
    }

    #[test]
    fn rechaza_valores_desconocidos_listando_los_validos() {
        let error = parse_quality("maxima").unwrap_err();
        assert!(error.contains("\"low\", \"medium\", \"high\""));

        let error = parse_preset("turbo").unwrap_err();
        assert!(error.contains("\"veryslow\""));
        assert!(error.contains("\"ultrafast\""));
    }

    #[test]
    fn parsea_presets() {
        assert_eq!(parse_preset("veryslow").unwrap(), Preset::VerySlow);
        assert_eq!(parse_preset("ULTRAFAST").unwrap(), Preset::UltraFast);
    }

    #[test]
    fn los_valores_por_defecto_son_los_del_motor() {
        assert_eq!(Quality::default(), Quality::Medium);
        assert_eq!(Speed::default(), Speed::Normal);
        assert_eq!(Preset::default(), Preset::VerySlow);
    }

    #[test]
    fn los_ajustes_se_serializan_como_json() {
        let settings = settings_for(Quality::Medium, Speed::Fast);
        let json = serde_json::to_value(settings).unwrap();
        assert_eq!(json["crf"], "23");
        assert_eq!(json["preset"], "fast");
    }
}
