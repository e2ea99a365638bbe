//! Display formatting for file rows and movie cards.

const BYTES_PER_MIB: f64 = 1_048_576.0;

/// Row icon chosen from a file suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileIcon {
    /// Plain text document.
    Text,
    /// Playable video.
    Play,
    /// Folder.
    Folder,
    /// Anything else.
    Generic,
}

/// Icon for a node; a missing suffix is always a folder.
#[must_use]
pub fn file_icon(suffix: Option<&str>) -> FileIcon {
    match suffix {
        None => FileIcon::Folder,
        Some(".txt") => FileIcon::Text,
        Some(".mp4") => FileIcon::Play,
        Some(_) => FileIcon::Generic,
    }
}

/// Type column label.
#[must_use]
pub fn file_type_label(suffix: Option<&str>) -> &'static str {
    match suffix {
        None => "Folder",
        Some(".srt" | ".vtt") => "Subtitle",
        Some(".mp4" | ".webm") => "Video",
        Some(".mkv") => "Raw Video",
        Some(_) => "File",
    }
}

/// Size in MiB with two decimals; zero and unknown sizes render nothing.
#[must_use]
pub fn size_mib(size: Option<u64>) -> Option<String> {
    match size {
        None | Some(0) => None,
        Some(bytes) => {
            #[allow(clippy::cast_precision_loss)]
            let mib = bytes as f64 / BYTES_PER_MIB;
            Some(format!("{mib:.2}"))
        }
    }
}

/// Left padding of a tree row, in pixels.
#[must_use]
pub const fn indent_px(depth: usize) -> usize {
    depth * 30 + 10
}

/// Resolution badge for the widest encoding.
#[must_use]
pub const fn resolution_label(width: u32) -> Option<&'static str> {
    match width {
        0 => None,
        1..=1500 => Some("HDTV"),
        1501..=2000 => Some("HD"),
        _ => Some("4K"),
    }
}

/// Whole minutes of a runtime given in seconds.
#[must_use]
pub const fn duration_minutes(seconds: u64) -> u64 {
    seconds / 60
}

/// Leading `YYYY-MM-DD` part of a timestamp.
#[must_use]
pub fn date_part(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_suffix_is_always_a_folder() {
        assert_eq!(file_icon(None), FileIcon::Folder);
        assert_eq!(file_type_label(None), "Folder");
    }

    #[test]
    fn suffixes_map_to_icons_and_labels() {
        assert_eq!(file_icon(Some(".txt")), FileIcon::Text);
        assert_eq!(file_icon(Some(".mp4")), FileIcon::Play);
        assert_eq!(file_icon(Some(".srt")), FileIcon::Generic);
        assert_eq!(file_type_label(Some(".vtt")), "Subtitle");
        assert_eq!(file_type_label(Some(".webm")), "Video");
        assert_eq!(file_type_label(Some(".mkv")), "Raw Video");
        assert_eq!(file_type_label(Some(".nfo")), "File");
    }

    #[test]
    fn sizes_render_in_mib() {
        assert_eq!(size_mib(Some(1_048_576)).as_deref(), Some("1.00"));
        assert_eq!(size_mib(Some(2_097_152)).as_deref(), Some("2.00"));
        assert_eq!(size_mib(Some(1_572_864)).as_deref(), Some("1.50"));
        assert_eq!(size_mib(Some(0)), None);
        assert_eq!(size_mib(None), None);
    }

    #[test]
    fn indentation_grows_with_depth() {
        assert_eq!(indent_px(0), 10);
        assert_eq!(indent_px(1), 40);
        assert_eq!(indent_px(2), 70);
    }

    #[test]
    fn resolution_thresholds() {
        assert_eq!(resolution_label(3840), Some("4K"));
        assert_eq!(resolution_label(2000), Some("HD"));
        assert_eq!(resolution_label(1920), Some("HD"));
        assert_eq!(resolution_label(1280), Some("HDTV"));
        assert_eq!(resolution_label(0), None);
    }

    #[test]
    fn dates_and_durations() {
        assert_eq!(date_part("2024-03-01T10:00:00Z"), "2024-03-01");
        assert_eq!(date_part("short"), "short");
        assert_eq!(duration_minutes(7_260), 121);
    }
}
