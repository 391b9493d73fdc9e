//! Screen composers.
//!
//! - **Welcome Screen** ([`welcome`]): animated background, pulsing title and
//!   the Login / Sign Up / Exit option row
//!
//! A screen owns its widgets, the tween engine and the frame clock. The
//! platform shell drives it with three calls per frame cycle: deliver
//! events ([`Screen::resize`], [`Screen::handle_touch`]), advance time
//! ([`Screen::tick`]) and rasterize ([`Screen::draw`]).

pub mod welcome;

pub use welcome::Screen;
