const SECONDS_PER_CHAR: f64 = 0.05;

pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

/// Rough synthesis time shown next to the input, not a promise.
pub fn estimated_seconds(text: &str) -> f64 {
    character_count(text) as f64 * SECONDS_PER_CHAR
}

pub fn download_file_name(language: &str, voice: &str, timestamp: i64) -> String {
    format!(
        "speech_{}_{}_{timestamp}.wav",
        file_safe(language),
        file_safe(voice)
    )
}

pub fn format_byte_count(count: usize) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped} bytes")
}

fn file_safe(part: &str) -> String {
    let cleaned: String = part
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(character_count("नमस्ते"), 6);
        assert_eq!(character_count("hello"), 5);
    }

    #[test]
    fn estimate_scales_with_length() {
        assert!((estimated_seconds("hello") - 0.25).abs() < 1e-9);
        assert_eq!(estimated_seconds(""), 0.0);
    }

    #[test]
    fn download_names() {
        assert_eq!(
            download_file_name("en", "alloy", 1_700_000_000),
            "speech_en_alloy_1700000000.wav"
        );
        assert_eq!(
            download_file_name("hi", "voices/../x y", 5),
            "speech_hi_voices____x_y_5.wav"
        );
        assert_eq!(download_file_name("", "nova", 1), "speech_unknown_nova_1.wav");
    }

    #[test]
    fn byte_counts_are_grouped() {
        assert_eq!(format_byte_count(0), "0 bytes");
        assert_eq!(format_byte_count(999), "999 bytes");
        assert_eq!(format_byte_count(1_000), "1,000 bytes");
        assert_eq!(format_byte_count(1_234_567), "1,234,567 bytes");
    }
}
