use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Feed categories the front end knows about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VideoCategory {
    Music,
    Gaming,
    News,
    Sports,
    Learning,
    Fashion,
}

impl VideoCategory {
    /// Provider `videoCategoryId`.
    pub const fn id(self) -> &'static str {
        match self {
            VideoCategory::Music => "10",
            VideoCategory::Gaming => "20",
            VideoCategory::News => "25",
            VideoCategory::Sports => "17",
            VideoCategory::Learning => "27",
            VideoCategory::Fashion => "26",
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Maps a category name to its provider id, case-insensitively.
/// Unknown names map to the empty string.
pub fn category_id(name: &str) -> &'static str {
    name.parse::<VideoCategory>()
        .map(VideoCategory::id)
        .unwrap_or("")
}
