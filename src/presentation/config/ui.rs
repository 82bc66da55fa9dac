use serde::{Deserialize, Serialize};

use crate::domain::TargetLanguage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Upload,
    Chat,
    Costing,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Upload => "Upload Data",
            Page::Chat => "Chat",
            Page::Costing => "Costing",
        }
    }
}

/// Presentation switches that distinguish the deployed variants of the tool.
#[derive(Debug, Clone, Deserialize)]
pub struct UiSettings {
    /// Show language names in the selector instead of raw codes.
    pub language_labels: bool,
    pub costing_page: bool,
    pub default_page: Page,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            language_labels: true,
            costing_page: true,
            default_page: Page::Chat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
}

impl UiSettings {
    pub fn pages(&self) -> Vec<Page> {
        let mut pages = vec![Page::Upload, Page::Chat];
        if self.costing_page {
            pages.push(Page::Costing);
        }
        pages
    }

    /// The default page, unless it names a page this variant hides.
    pub fn effective_default_page(&self) -> Page {
        if self.pages().contains(&self.default_page) {
            self.default_page
        } else {
            Page::Chat
        }
    }

    pub fn language_options(&self) -> Vec<LanguageOption> {
        TargetLanguage::ALL
            .into_iter()
            .map(|lang| LanguageOption {
                code: lang.code(),
                label: if self.language_labels {
                    lang.label()
                } else {
                    lang.code()
                },
            })
            .collect()
    }
}
