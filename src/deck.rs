//! Demo deck content
//!
//! Everything the mock displays comes from the literals in this module:
//! one incoming like, the discovery copy, and the empty states. There is
//! no feed, no store, and no service behind any of it.

/// Reference to an image shipped outside the program.
///
/// Only the identifier and an intrinsic aspect ratio are carried; turning
/// the identifier into pixels is a renderer concern, and in a terminal the
/// frame stands in for the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAsset {
    pub id: &'static str,
    /// Width:height ratio the layout box should approximate
    pub aspect: (u16, u16),
}

impl ImageAsset {
    /// Rows needed to show this asset at the given cell width, assuming
    /// the usual 1:2 terminal cell aspect
    pub fn rows_for_width(&self, width: u16) -> u16 {
        let (aw, ah) = self.aspect;
        (u32::from(width) * u32::from(ah) / u32::from(aw.max(1)) / 2) as u16
    }
}

/// The one incoming like the mock ever shows
#[derive(Debug, Clone)]
pub struct LikeCard {
    pub name: &'static str,
    pub presence: &'static str,
    pub prompt_heading: &'static str,
    pub prompt_response: &'static str,
    pub photo: ImageAsset,
    /// Label on the tinted banner across the top of the card
    pub rose_label: &'static str,
    /// Caption shown above the card
    pub received: &'static str,
}

impl LikeCard {
    /// The fixed demo profile
    pub fn demo() -> Self {
        Self {
            name: "Chetanya Goyal",
            presence: "Active now",
            prompt_heading: "Replied to Your Prompt",
            prompt_response: "“Full Marx”",
            photo: ImageAsset { id: "chetanya.jpeg", aspect: (3, 4) },
            rose_label: "Rose",
            received: "Has liked you just now",
        }
    }
}

/// Brand mark referenced by the Discover nav slot. Only the reference
/// lives here; the nav draws a glyph in its place.
pub const LOGO: ImageAsset = ImageAsset { id: "logo.png", aspect: (1, 1) };

/// Copy on the discovery placeholder card
pub const DISCOVER_LOADING: &str = "Loading Potential Matches...";

/// Rose notice layered over the discovery placeholder
pub const DISCOVER_NOTICE_TITLE: &str = "Someone sent you a rose.";
pub const DISCOVER_NOTICE_HINT: &str = "Go to your Likes to see who it is.";

/// Empty state for the Standouts toggle
pub const NO_STANDOUTS: &str = "No Standouts today.";
