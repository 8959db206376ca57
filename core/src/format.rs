#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Webp,
}

impl ImageFormat {
    /// Match on the literal name suffix, ignoring ASCII case.
    ///
    /// Works on the whole name rather than `Path::extension`, so a file
    /// called just `.png` still counts.
    pub fn from_file_name(name: &str) -> Option<Self> {
        [ImageFormat::Png, ImageFormat::Webp]
            .into_iter()
            .find(|format| has_suffix_ignore_case(name, format.suffix()))
    }

    /// Extension with its leading dot.
    pub fn suffix(&self) -> &'static str {
        match self {
            ImageFormat::Png => ".png",
            ImageFormat::Webp => ".webp",
        }
    }
}

fn has_suffix_ignore_case(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name.as_bytes()[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}
