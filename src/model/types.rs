use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhotoCategory {
    Selfie,
    #[default]
    Portrait,
    Action,
    Landscape,
    Graphic,
}

impl fmt::Display for PhotoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoCategory::Selfie => write!(f, "SELFIE"),
            PhotoCategory::Portrait => write!(f, "PORTRAIT"),
            PhotoCategory::Action => write!(f, "ACTION"),
            PhotoCategory::Landscape => write!(f, "LANDSCAPE"),
            PhotoCategory::Graphic => write!(f, "GRAPHIC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_is_portrait() {
        assert_eq!(PhotoCategory::default(), PhotoCategory::Portrait);
    }

    #[test]
    fn test_category_serde_uses_screaming_case() {
        let json = serde_json::to_string(&PhotoCategory::Landscape).unwrap();
        assert_eq!(json, "\"LANDSCAPE\"");

        let parsed: PhotoCategory = serde_json::from_str("\"SELFIE\"").unwrap();
        assert_eq!(parsed, PhotoCategory::Selfie);
    }
}
