//! Terminal dashboard for animated population pyramids
//!
//! Renders UN World Population Prospects data as a two-sided bar chart you
//! can step or play through year by year:
//! - Location picker with incremental search
//! - Year stepping and timed playback (wrapping at the end of the range)
//! - Per-location fixed axis so bars don't rescale between frames
//! - Total/male/female population and sex-ratio metric cells
//!
//! All data shaping lives in the `pyramid_core` crate; this crate only
//! renders and routes input.

pub mod app;
pub mod components;
pub mod logging;
pub mod state;

pub use app::App;
pub use logging::init_logging;
