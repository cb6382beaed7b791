use std::fmt;

/// The structural elements of an alert whose tag name is validated.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Element {
    Header,
    Body,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Element::Header => "Header",
            Element::Body => "Body",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("{0} tag must be a string and cannot be empty.")]
    EmptyTag(Element),
    #[error("invalid alert configuration: {0}")]
    Config(#[from] toml::de::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum FlashError {
    #[error("could not decode flash messages: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("could not encode flash messages: {0}")]
    Encode(#[source] serde_json::Error),
}
