use crate::config::RenameMode;
use crate::format::ImageFormat;

/// Derive the output file name for a source file already known to end in
/// ".png" (any case).
///
/// `Substring` replaces only the first case-sensitive ".png", so
/// `my.png.backup.png` becomes `my.webp.backup.png` and `LOUD.PNG` is left
/// untouched. `Extension` swaps the trailing suffix instead.
pub fn output_file_name(source_name: &str, mode: RenameMode) -> String {
    let png = ImageFormat::Png.suffix();
    let webp = ImageFormat::Webp.suffix();

    match mode {
        RenameMode::Substring => source_name.replacen(png, webp, 1),
        RenameMode::Extension => match ImageFormat::from_file_name(source_name) {
            // the suffix is ASCII, so the cut lands on a char boundary
            Some(ImageFormat::Png) => {
                format!("{}{}", &source_name[..source_name.len() - png.len()], webp)
            }
            _ => format!("{source_name}{webp}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_replaces_first_occurrence_only() {
        assert_eq!(output_file_name("a.png", RenameMode::Substring), "a.webp");
        assert_eq!(
            output_file_name("my.png.backup.png", RenameMode::Substring),
            "my.webp.backup.png"
        );
    }

    #[test]
    fn substring_is_case_sensitive() {
        assert_eq!(output_file_name("LOUD.PNG", RenameMode::Substring), "LOUD.PNG");
        assert_eq!(output_file_name("mixed.PNG.png", RenameMode::Substring), "mixed.PNG.webp");
    }

    #[test]
    fn extension_swaps_trailing_suffix() {
        assert_eq!(output_file_name("a.png", RenameMode::Extension), "a.webp");
        assert_eq!(
            output_file_name("my.png.backup.png", RenameMode::Extension),
            "my.png.backup.webp"
        );
        assert_eq!(output_file_name("LOUD.PNG", RenameMode::Extension), "LOUD.webp");
        assert_eq!(output_file_name("투명.png", RenameMode::Extension), "투명.webp");
    }

    #[test]
    fn extension_appends_when_suffix_is_missing() {
        assert_eq!(output_file_name("raw", RenameMode::Extension), "raw.webp");
    }
}
