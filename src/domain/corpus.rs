use std::fmt;

/// Newline-joined text of every stored document, in listing order.
///
/// Empty documents contribute nothing, not even a separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedCorpus(String);

impl CombinedCorpus {
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = texts
            .into_iter()
            .filter(|t| !t.as_ref().is_empty())
            .map(|t| t.as_ref().to_owned())
            .collect::<Vec<String>>()
            .join("\n");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CombinedCorpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
