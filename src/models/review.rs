// src/models/review.rs
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// Separator between review text and its label in the display form.
pub const LABEL_ARROW: &str = "➝";

static ANNOTATED_REVIEW: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(.*) ➝ \[(Fake|Real)\]$").ok());

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Fake,
    Real,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fake => "Fake",
            Self::Real => "Real",
        }
    }

    /// Style class for the label badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Fake => "fake-label",
            Self::Real => "real-label",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fake" => Ok(Self::Fake),
            "real" => Ok(Self::Real),
            _ => Err(ClassifyError::UnknownLabel(s.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub text: String,    // Review text exactly as submitted
    pub label: Label,    // Classifier verdict
}

impl Review {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Display form: `<text> ➝ [<Label>]`.
impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.text, LABEL_ARROW, self.label)
    }
}

/// What the review renderer draws for one list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDisplay {
    Annotated { text: String, label: Label },
    Plain(String),
}

impl ReviewDisplay {
    /// Recovers text and label from a display-form string. Anything without a
    /// trailing `➝ [Fake]` / `➝ [Real]` comes back as `Plain`, unchanged.
    pub fn parse(raw: &str) -> Self {
        let captures = ANNOTATED_REVIEW
            .as_ref()
            .and_then(|re| re.captures(raw));
        match captures {
            Some(caps) => match caps[2].parse::<Label>() {
                Ok(label) => Self::Annotated {
                    text: caps[1].to_string(),
                    label,
                },
                Err(_) => Self::Plain(raw.to_string()),
            },
            None => Self::Plain(raw.to_string()),
        }
    }

    pub fn label(&self) -> Option<Label> {
        match self {
            Self::Annotated { label, .. } => Some(*label),
            Self::Plain(_) => None,
        }
    }
}

impl From<&Review> for ReviewDisplay {
    fn from(review: &Review) -> Self {
        Self::Annotated {
            text: review.text.clone(),
            label: review.label,
        }
    }
}
