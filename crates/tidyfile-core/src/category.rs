//! Static file category table.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// A named bucket a file is sorted into based on its extension.
///
/// The display name doubles as the destination directory name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
pub enum Category {
    Images,
    Documents,
    Videos,
    Audio,
    Archives,
    Executables,
    Scripts,
    /// Fallback for anything not listed in the table.
    Others,
}

impl Category {
    /// Look up the category for an extension (without the leading dot).
    ///
    /// Matching is case-insensitive. Unknown extensions map to [`Category::Others`].
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "tiff" => Self::Images,
            "pdf" | "doc" | "docx" | "txt" | "xls" | "xlsx" | "ppt" | "pptx" => Self::Documents,
            "mp4" | "avi" | "mov" | "wmv" | "flv" | "mkv" => Self::Videos,
            "mp3" | "wav" | "aac" | "flac" | "ogg" => Self::Audio,
            "zip" | "rar" | "tar" | "gz" | "7z" => Self::Archives,
            "exe" | "msi" | "bat" | "sh" => Self::Executables,
            "py" | "js" | "rb" | "php" | "pl" => Self::Scripts,
            _ => Self::Others,
        }
    }

    /// Categorize a path by its final extension.
    ///
    /// Dotfiles such as `.bashrc` and names without an extension land in
    /// [`Category::Others`], as do extensions that are not valid UTF-8.
    pub fn for_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Others)
    }

    /// Name of the subdirectory files of this category are moved into.
    pub fn dir_name(self) -> &'static str {
        self.into()
    }

    /// Extensions mapped to this category. Empty for the fallback.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Images => &["jpg", "jpeg", "png", "gif", "bmp", "tiff"],
            Self::Documents => &["pdf", "doc", "docx", "txt", "xls", "xlsx", "ppt", "pptx"],
            Self::Videos => &["mp4", "avi", "mov", "wmv", "flv", "mkv"],
            Self::Audio => &["mp3", "wav", "aac", "flac", "ogg"],
            Self::Archives => &["zip", "rar", "tar", "gz", "7z"],
            Self::Executables => &["exe", "msi", "bat", "sh"],
            Self::Scripts => &["py", "js", "rb", "php", "pl"],
            Self::Others => &[],
        }
    }
}
