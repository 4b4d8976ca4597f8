use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("post id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn bounded_text(
    value: impl Into<String>,
    field: &str,
    min: usize,
    max: usize,
) -> DomainResult<String> {
    let value = value.into().trim().to_string();
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    let len = value.chars().count();
    if len < min {
        return Err(DomainError::Validation(format!(
            "{field} must be at least {min} characters long"
        )));
    }
    if len > max {
        return Err(DomainError::Validation(format!(
            "{field} cannot exceed {max} characters"
        )));
    }
    Ok(value)
}

/// Source text for the post slug. Titles are not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value, "title", 3, 200).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSlug(String);

impl PostSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDescription(String);

impl PostDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value, "description", 1, 1000).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostImage {
    pub url: String,
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub is_primary: bool,
}

impl PostImage {
    /// Builds the ordered image list for a post. The first image is the
    /// primary one; missing alt texts default to `"{title} - Image {n}"`.
    pub fn gallery(title: &PostTitle, images: Vec<PostImageInput>) -> DomainResult<Vec<Self>> {
        if images.is_empty() {
            return Err(DomainError::Validation(
                "at least one image is required".into(),
            ));
        }
        images
            .into_iter()
            .enumerate()
            .map(|(index, input)| {
                let url = input.url.trim().to_string();
                if url.is_empty() {
                    return Err(DomainError::Validation("image url cannot be empty".into()));
                }
                let alt = input
                    .alt
                    .map(|alt| alt.trim().to_string())
                    .filter(|alt| !alt.is_empty())
                    .unwrap_or_else(|| format!("{title} - Image {}", index + 1));
                Ok(Self {
                    url,
                    public_id: input.public_id.filter(|id| !id.trim().is_empty()),
                    alt,
                    is_primary: index == 0,
                })
            })
            .collect()
    }
}

/// Image reference as submitted by the admin panel after upload.
#[derive(Debug, Clone, Default)]
pub struct PostImageInput {
    pub url: String,
    pub public_id: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hashtag(String);

impl Hashtag {
    pub const MAX_LEN: usize = 30;

    /// Normalizes raw tags: trims, lowercases, strips `#`, drops empties.
    pub fn normalize_all<I, S>(raw: I) -> DomainResult<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<Self> = Vec::new();
        for value in raw {
            let tag = value.as_ref().trim().to_lowercase().replace('#', "");
            let tag = tag.trim();
            if tag.is_empty() {
                continue;
            }
            if tag.chars().count() > Self::MAX_LEN {
                return Err(DomainError::Validation(format!(
                    "hashtag cannot exceed {} characters",
                    Self::MAX_LEN
                )));
            }
            let tag = Self(tag.to_string());
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Ok(tags)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Rehydrates an already normalized tag from storage.
    pub(crate) const fn from_stored(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateLink {
    pub title: String,
    pub url: String,
    #[serde(default = "AffiliateLink::default_icon")]
    pub icon: String,
}

impl AffiliateLink {
    pub const MAX_TITLE_LEN: usize = 100;

    fn default_icon() -> String {
        "🔗".to_string()
    }

    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        icon: Option<String>,
    ) -> DomainResult<Self> {
        let title = bounded_text(title, "affiliate link title", 1, Self::MAX_TITLE_LEN)?;
        let url = url.into().trim().to_string();
        let has_scheme = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_scheme {
            return Err(DomainError::Validation(
                "please enter a valid URL starting with http:// or https://".into(),
            ));
        }
        let icon = icon
            .map(|icon| icon.trim().to_string())
            .filter(|icon| !icon.is_empty())
            .unwrap_or_else(Self::default_icon);
        Ok(Self { title, url, icon })
    }
}

/// Optional SEO metadata with per-field length limits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoMeta {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl SeoMeta {
    pub const MAX_TITLE_LEN: usize = 60;
    pub const MAX_DESCRIPTION_LEN: usize = 160;

    pub fn new(title: Option<String>, description: Option<String>) -> DomainResult<Self> {
        Ok(Self {
            title: Self::check(title, "seo title", Self::MAX_TITLE_LEN)?,
            description: Self::check(description, "seo description", Self::MAX_DESCRIPTION_LEN)?,
        })
    }

    fn check(value: Option<String>, field: &str, max: usize) -> DomainResult<Option<String>> {
        let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        if value.chars().count() > max {
            return Err(DomainError::Validation(format!(
                "{field} cannot exceed {max} characters"
            )));
        }
        Ok(Some(value))
    }
}

/// Engagement counters that are bumped atomically in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostCounter {
    Views,
    Likes,
    Shares,
}

impl PostCounter {
    pub const fn column(self) -> &'static str {
        match self {
            Self::Views => "views",
            Self::Likes => "likes",
            Self::Shares => "shares",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_length_is_enforced() {
        assert!(PostTitle::new("ab").is_err());
        assert!(PostTitle::new("   ").is_err());
        assert!(PostTitle::new("a".repeat(201)).is_err());
        assert_eq!(PostTitle::new("  Street Style ").unwrap().as_str(), "Street Style");
    }

    #[test]
    fn hashtags_are_normalized_and_deduplicated() {
        let tags = Hashtag::normalize_all(["#Summer", " casual ", "", "#", "SUMMER"]).unwrap();
        let tags: Vec<_> = tags.iter().map(Hashtag::as_str).collect();
        assert_eq!(tags, vec!["summer", "casual"]);
    }

    #[test]
    fn overlong_hashtag_is_rejected() {
        assert!(Hashtag::normalize_all(["a".repeat(31)]).is_err());
    }

    #[test]
    fn gallery_marks_first_image_primary_and_fills_alt() {
        let title = PostTitle::new("Denim Days").unwrap();
        let images = PostImage::gallery(
            &title,
            vec![
                PostImageInput {
                    url: "https://cdn/a.jpg".into(),
                    ..Default::default()
                },
                PostImageInput {
                    url: "https://cdn/b.jpg".into(),
                    alt: Some("back view".into()),
                    ..Default::default()
                },
            ],
        )
        .unwrap();
        assert!(images[0].is_primary);
        assert!(!images[1].is_primary);
        assert_eq!(images[0].alt, "Denim Days - Image 1");
        assert_eq!(images[1].alt, "back view");
    }

    #[test]
    fn gallery_requires_an_image() {
        let title = PostTitle::new("Denim Days").unwrap();
        assert!(PostImage::gallery(&title, vec![]).is_err());
    }

    #[test]
    fn affiliate_link_requires_http_scheme() {
        assert!(AffiliateLink::new("Shop", "ftp://x", None).is_err());
        assert!(AffiliateLink::new("Shop", "https://", None).is_err());
        let link = AffiliateLink::new("Shop", "https://shop.example/item", None).unwrap();
        assert_eq!(link.icon, "🔗");
    }

    #[test]
    fn seo_meta_limits() {
        assert!(SeoMeta::new(Some("t".repeat(61)), None).is_err());
        assert!(SeoMeta::new(None, Some("d".repeat(161))).is_err());
        let meta = SeoMeta::new(Some("  ".into()), Some("desc".into())).unwrap();
        assert!(meta.title.is_none());
        assert_eq!(meta.description.as_deref(), Some("desc"));
    }
}
