//! Conversiones entre duraciones en milisegundos y el formato hh:mm:ss.

use regex::Regex;
use std::sync::LazyLock;

static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d\d:\d\d:\d\d$").expect("patron de tiempo invalido"));

/// Comprueba si la cadena sigue el formato `hh:mm:ss`.
pub fn is_time_string(time: &str) -> bool {
    TIME_REGEX.is_match(time)
}

pub fn time_to_milliseconds(seconds: u64, minutes: u64, hours: u64) -> u64 {
    (hours * 60 * 60 + minutes * 60 + seconds) * 1000
}

/// Convierte una cadena `hh:mm:ss` a milisegundos.
pub fn time_string_to_milliseconds(time: &str) -> Option<u64> {
    if !is_time_string(time) {
        return None;
    }

    let mut parts = time.split(':').map(|part| part.parse::<u64>().ok());
    let hours = parts.next()??;
    let minutes = parts.next()??;
    let seconds = parts.next()??;
    Some((hours * 60 * 60 + minutes * 60 + seconds) * 1000)
}

/// Formatea milisegundos como `mm:ss`, o `hh:mm:ss` cuando hay horas.
pub fn milliseconds_to_time(duration_ms: u64) -> String {
    let seconds = (duration_ms / 1000) % 60;
    let minutes = (duration_ms / (1000 * 60)) % 60;
    let hours = (duration_ms / (1000 * 60 * 60)) % 24;

    if hours == 0 {
        format!("{minutes:02}:{seconds:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconoce_el_formato_de_tiempo() {
        assert!(is_time_string("00:01:30"));
        assert!(!is_time_string("0:01:30"));
        assert!(!is_time_string("00:01"));
        assert!(!is_time_string("adelante 00:01:30"));
    }

    #[test]
    fn convierte_componentes_a_milisegundos() {
        assert_eq!(time_to_milliseconds(30, 1, 0), 90_000);
        assert_eq!(time_to_milliseconds(0, 0, 2), 7_200_000);
    }

    #[test]
    fn convierte_cadenas_a_milisegundos() {
        assert_eq!(time_string_to_milliseconds("00:01:30"), Some(90_000));
        assert_eq!(time_string_to_milliseconds("01:00:00"), Some(3_600_000));
        assert_eq!(time_string_to_milliseconds("90 segundos"), None);
    }

    #[test]
    fn formatea_sin_horas_cuando_no_las_hay() {
        assert_eq!(milliseconds_to_time(90_000), "01:30");
        assert_eq!(milliseconds_to_time(5_000), "00:05");
    }

    #[test]
    fn formatea_con_horas_cuando_las_hay() {
        assert_eq!(milliseconds_to_time(3_690_000), "01:01:30");
    }

    #[test]
    fn ida_y_vuelta_entre_cadena_y_milisegundos() {
        let ms = time_string_to_milliseconds("02:10:05").unwrap();
        assert_eq!(milliseconds_to_time(ms), "02:10:05");
    }
}
