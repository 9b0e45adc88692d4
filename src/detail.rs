use crate::Photo;
use std::fmt;
use url::Url;

/// Placeholder for unknown locations.
const UNKNOWN_LOCATION: &str = "no information";

/// What the like button does.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LikeAction {
    /// The photo isn't liked yet.
    Add,
    /// The photo is already liked.
    Remove,
}

impl fmt::Display for LikeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Add => "Add to favorites",
                Self::Remove => "Remove from favorites",
            }
        )
    }
}

/// The detailed view of a photo.
#[derive(Debug, Clone, Copy)]
pub struct PhotoDetail<'a> {
    photo: &'a Photo,
}

impl<'a> PhotoDetail<'a> {
    /// Initializes the view of `photo`.
    pub fn new(photo: &'a Photo) -> Self {
        Self { photo }
    }

    /// Returns the author name.
    pub fn author(&self) -> &'a str {
        self.photo.author().name()
    }

    /// Returns the author location, or a placeholder.
    pub fn location(&self) -> &'a str {
        self.photo.author().location().unwrap_or(UNKNOWN_LOCATION)
    }

    /// Returns the number of downloads (0 if unknown).
    pub fn downloads(&self) -> u64 {
        self.photo.downloads().unwrap_or_default()
    }

    /// Returns the creation date, without the time of day.
    pub fn created_on(&self) -> &'a str {
        let created_at = self.photo.created_at();

        created_at
            .split_once('T')
            .map_or(created_at, |(date, _)| date)
    }

    /// Returns what the like button does.
    pub fn like_action(&self) -> LikeAction {
        if self.photo.is_liked() {
            LikeAction::Remove
        } else {
            LikeAction::Add
        }
    }

    /// Returns the image to display, if its URL is usable.
    pub fn image_url(&self) -> Option<Url> {
        self.photo.full_url()
    }
}

impl fmt::Display for PhotoDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Author    - {}", self.author())?;
        writeln!(f, "Location  - {}", self.location())?;
        writeln!(f, "Created   - {}", self.created_on())?;
        writeln!(f, "Downloads - {}", self.downloads())?;
        match self.image_url() {
            Some(url) => writeln!(f, "Image     - {url}")?,
            None => writeln!(f, "Image     - unavailable")?,
        }
        write!(f, "[{}]", self.like_action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models, testing};

    fn sparse_photo() -> Photo {
        let payload = testing::photo_json("sparse", true)
            .replace(r#""downloads":42,"#, "")
            .replace(r#""location":"Paris""#, r#""location":null"#)
            .replace("2016-05-03T11:00:28-04:00", "2016-05-03");

        serde_json::from_str::<models::photo::Photo>(&payload)
            .expect("valid photo")
            .into()
    }

    #[test]
    fn full_detail() {
        let photo = testing::photo("a");
        let detail = PhotoDetail::new(&photo);

        assert_eq!(detail.author(), "Author a");
        assert_eq!(detail.location(), "Paris");
        assert_eq!(detail.downloads(), 42);
        assert_eq!(detail.created_on(), "2016-05-03");
        assert_eq!(detail.like_action(), LikeAction::Add);
        assert_eq!(
            detail.image_url().map(String::from).as_deref(),
            Some("https://images.example.com/a/full")
        );
    }

    #[test]
    fn placeholders() {
        let photo = sparse_photo();
        let detail = PhotoDetail::new(&photo);

        assert_eq!(detail.location(), "no information");
        assert_eq!(detail.downloads(), 0);
        assert_eq!(detail.created_on(), "2016-05-03");
        assert_eq!(detail.like_action(), LikeAction::Remove);
    }

    #[test]
    fn render() {
        let photo = testing::photo("a");

        let text = PhotoDetail::new(&photo).to_string();

        assert!(text.starts_with("Author    - Author a\n"));
        assert!(text.ends_with("[Add to favorites]"));
    }
}
