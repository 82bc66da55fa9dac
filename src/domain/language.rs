use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages offered by the translate selector. Source text is always English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "de")]
    German,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 4] = [
        TargetLanguage::French,
        TargetLanguage::Hindi,
        TargetLanguage::Spanish,
        TargetLanguage::German,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::Hindi => "hi",
            Self::Spanish => "es",
            Self::German => "de",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::French => "French",
            Self::Hindi => "Hindi",
            Self::Spanish => "Spanish",
            Self::German => "German",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
