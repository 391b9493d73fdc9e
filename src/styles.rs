//! Font roles and static text alignment.
//!
//! Widgets never name a font directly; they tag text with a [`FontRole`] and
//! the renderer resolves it here. Text color varies per frame (the pulsing
//! title) and carries alpha, so styles are built at draw time from
//! [`FontRole::font`] plus a color, while the alignment is a `const`.
//!
//! | Role       | Font                  |
//! |------------|-----------------------|
//! | `Title`    | `ProFont` 24pt        |
//! | `Icon`     | `ProFont` 24pt        |
//! | `Subtitle` | `ProFont` 18pt        |
//! | `Label`    | `ProFont` 14pt        |
//! | `Footer`   | `ProFont` 10pt        |
//! | `Overlay`  | 6x10                  |

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_10_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Text centered on its anchor point both ways. Used for every label.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Right-aligned, top baseline. Used for the FPS overlay.
pub const TOP_RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font Roles
// =============================================================================

/// What a piece of text is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontRole {
    Title,
    Subtitle,
    Label,
    Icon,
    Footer,
    Overlay,
}

impl FontRole {
    /// Monospace font used for this role.
    pub const fn font(self) -> &'static MonoFont<'static> {
        match self {
            Self::Title | Self::Icon => &PROFONT_24_POINT,
            Self::Subtitle => &PROFONT_18_POINT,
            Self::Label => &PROFONT_14_POINT,
            Self::Footer => &PROFONT_10_POINT,
            Self::Overlay => &FONT_6X10,
        }
    }
}
