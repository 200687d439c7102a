use serde::{Deserialize, Serialize};

/// One corpus entry: a pre-written answer with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    /// Free-text answer body
    #[serde(default)]
    pub content: String,
    /// Hand-authored keywords, prepended to the feature text
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Document {
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            title: title.into(),
            content: content.into(),
            keywords: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Text the vector space is fitted on: keywords, title and content
    /// joined by single spaces, in that order.
    ///
    /// Empty parts still contribute their separator, so a document without
    /// keywords yields a feature text with a leading space.
    pub fn feature_text(&self) -> String {
        let keywords = self.keywords.join(" ");
        let mut text =
            String::with_capacity(keywords.len() + self.title.len() + self.content.len() + 2);
        text.push_str(&keywords);
        text.push(' ');
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.content);
        text
    }

    /// A document needs a non-blank title or content to be indexed.
    #[inline]
    pub fn has_feature_text(&self) -> bool {
        !self.title.trim().is_empty() || !self.content.trim().is_empty()
    }
}
