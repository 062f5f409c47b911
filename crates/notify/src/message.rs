//! Message bodies.
//!
//! A body is either a single string or an ordered list of labelled values.
//! Fields render as one line per entry, with the label emphasized in the
//! target chat service's markup.

/// The body of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// Free text, sent as-is.
    Text(String),
    /// Labelled values, rendered one per line in insertion order.
    Fields(Vec<(String, String)>),
}

impl MessageBody {
    /// Builds a [`MessageBody::Fields`] body.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghrm_notify::MessageBody;
    ///
    /// let body = MessageBody::fields([("Repository", "service-a"), ("Action", "create")]);
    /// assert_eq!(body.render("*"), "*Repository*: service-a\n*Action*: create");
    /// ```
    pub fn fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Fields(
            fields
                .into_iter()
                .map(|(label, value)| (label.into(), value.into()))
                .collect(),
        )
    }

    /// Renders the body, wrapping field labels in `emphasis`.
    #[must_use]
    pub fn render(&self, emphasis: &str) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Fields(fields) => fields
                .iter()
                .map(|(label, value)| format!("{emphasis}{label}{emphasis}: {value}"))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl From<&str> for MessageBody {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for MessageBody {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
