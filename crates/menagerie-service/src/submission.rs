use menagerie_store::CreatureDraft;
use menagerie_types::ImageBlob;

/// Raw form-field view of a creature creation request.
///
/// Fields arrive exactly as the transport parsed them: every one optional,
/// elements still a single comma-separated string.
/// [`into_draft`](Self::into_draft) applies the defaulting and parsing rules
/// that turn this into a storable draft.
#[derive(Debug, Clone, Default)]
pub struct CreatureSubmission {
    pub name: Option<String>,
    pub description: Option<String>,
    pub elements: Option<String>,
    pub image: Option<ImageBlob>,
}

impl CreatureSubmission {
    /// Converts the submission into a draft the store accepts.
    ///
    /// Missing name and description degrade to empty strings; the elements
    /// field is split per [`parse_elements`].
    pub fn into_draft(self) -> CreatureDraft {
        CreatureDraft {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            elements: parse_elements(self.elements.as_deref()),
            image: self.image,
        }
    }
}

/// Splits a comma-separated elements field into individual labels.
///
/// Absent or empty input yields the empty list, never `[""]`. Empty
/// segments from stray commas are dropped; everything else is kept
/// verbatim, whitespace included.
pub fn parse_elements(raw: Option<&str>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(field) => field
            .split(',')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect(),
    }
}
