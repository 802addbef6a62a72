//! Post edit types
//!
//! [`PostPatch`] is what the store applies: any subset of editable columns,
//! untouched when `None`. [`PostEdit`] is what an operator submits; it is
//! checked and turned into a patch by [`PostEdit::into_patch`].

use serde::Deserialize;

use super::{PostStatus, ValidationError};

/// Partial update of the editable post columns.
///
/// `status` is stored verbatim; the store does not check it against
/// [`PostStatus`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub linkedin_post: Option<String>,
    pub short_post: Option<String>,
    pub hashtags: Option<Vec<String>>,
    pub status: Option<String>,
}

impl PostPatch {
    /// True when no column would change (the timestamp still refreshes).
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.linkedin_post.is_none()
            && self.short_post.is_none()
            && self.hashtags.is_none()
            && self.status.is_none()
    }
}

/// Hashtags as submitted: a list, or the raw text of the edit field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Raw(String),
}

impl TagsInput {
    /// Normalized tag list (trimmed, empties dropped, order kept).
    pub fn into_tags(self) -> Vec<String> {
        match self {
            Self::List(tags) => tags
                .into_iter()
                .map(|t| t.trim().to_owned())
                .filter(|t| !t.is_empty())
                .collect(),
            Self::Raw(raw) => parse_hashtags(&raw),
        }
    }
}

/// Split whitespace-separated hashtag text into tags.
///
/// ```
/// use postdeck_server::models::parse_hashtags;
///
/// assert_eq!(parse_hashtags("  #rust  #axum\n#sqlx "), vec!["#rust", "#axum", "#sqlx"]);
/// assert!(parse_hashtags("   ").is_empty());
/// ```
pub fn parse_hashtags(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_owned).collect()
}

/// Operator edit of a post, as received from a form or the CLI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostEdit {
    pub title: Option<String>,
    pub linkedin_post: Option<String>,
    pub short_post: Option<String>,
    pub hashtags: Option<TagsInput>,
    pub status: Option<String>,
}

impl PostEdit {
    /// Validate the edit and build the patch the store applies.
    ///
    /// Rejects statuses outside [`PostStatus`]; everything else passes
    /// through as typed.
    pub fn into_patch(self) -> Result<PostPatch, ValidationError> {
        let status = self
            .status
            .map(|s| s.parse::<PostStatus>())
            .transpose()?
            .map(|s| s.as_str().to_owned());

        Ok(PostPatch {
            title: self.title,
            linkedin_post: self.linkedin_post,
            short_post: self.short_post,
            hashtags: self.hashtags.map(TagsInput::into_tags),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_tags_split_on_any_whitespace() {
        let tags = TagsInput::Raw("#one\t#two\n\n #three".into()).into_tags();
        assert_eq!(tags, vec!["#one", "#two", "#three"]);
    }

    #[test]
    fn list_tags_drop_blanks() {
        let tags = TagsInput::List(vec![" #a ".into(), "".into(), "#b".into()]).into_tags();
        assert_eq!(tags, vec!["#a", "#b"]);
    }

    #[test]
    fn tags_deserialize_from_string_or_list() {
        let edit: PostEdit = serde_json::from_str(r##"{"hashtags": "#x #y"}"##).unwrap();
        assert_eq!(edit.hashtags, Some(TagsInput::Raw("#x #y".into())));

        let edit: PostEdit = serde_json::from_str(r##"{"hashtags": ["#x"]}"##).unwrap();
        assert_eq!(edit.hashtags, Some(TagsInput::List(vec!["#x".into()])));
    }

    #[test]
    fn into_patch_normalizes_status() {
        let edit = PostEdit {
            status: Some(" published ".into()),
            ..Default::default()
        };
        let patch = edit.into_patch().unwrap();
        assert_eq!(patch.status.as_deref(), Some("published"));
        assert!(patch.title.is_none());
    }

    #[test]
    fn into_patch_rejects_unknown_status() {
        let edit = PostEdit {
            status: Some("scheduled".into()),
            ..Default::default()
        };
        assert!(matches!(
            edit.into_patch(),
            Err(ValidationError::InvalidVariant { .. })
        ));
    }

    #[test]
    fn empty_edit_is_empty_patch() {
        let patch = PostEdit::default().into_patch().unwrap();
        assert!(patch.is_empty());
    }
}
