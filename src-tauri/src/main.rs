use avtools::compression::{CompressionSettings, parse_quality, parse_speed, settings_for};
use avtools::constants::{DEFAULT_AUDIO_EXTENSION, DEFAULT_VIDEO_EXTENSION};
use avtools::media::{MediaSummary, describe_media as describe_media_core, parse_media_type};
use avtools::{generate_cache_file, to_file_uri};
use serde::Serialize;
use tauri::Manager;

#[derive(Clone, Serialize)]
struct ConversionDefaults {
    audio_extension: &'static str,
    video_extension: &'static str,
}

#[tauri::command]
fn generate_file(app: tauri::AppHandle, extension: String) -> Result<String, String> {
    let cache_dir = app
        .path()
        .app_cache_dir()
        .map_err(|error| format!("No se pudo obtener el directorio de cache: {error}"))?;
    Ok(generate_cache_file(&cache_dir, &extension))
}

#[tauri::command]
fn generate_file_uri(app: tauri::AppHandle, extension: String) -> Result<String, String> {
    generate_file(app, extension).map(|path| to_file_uri(&path))
}

#[tauri::command]
fn describe_media(path: String, media_type: String) -> Result<MediaSummary, String> {
    let media_type = parse_media_type(&media_type)?;
    Ok(describe_media_core(&path, media_type))
}

#[tauri::command]
fn compression_settings(quality: String, speed: String) -> Result<CompressionSettings, String> {
    let quality = parse_quality(&quality)?;
    let speed = parse_speed(&speed)?;
    Ok(settings_for(quality, speed))
}

#[tauri::command]
fn conversion_defaults() -> ConversionDefaults {
    ConversionDefaults {
        audio_extension: DEFAULT_AUDIO_EXTENSION,
        video_extension: DEFAULT_VIDEO_EXTENSION,
    }
}

fn main() {
    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            generate_file,
            generate_file_uri,
            describe_media,
            compression_settings,
            conversion_defaults,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
