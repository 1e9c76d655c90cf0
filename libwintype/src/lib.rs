//! `libwintype` classifies X11 windows by the window type they declare through the
//! [Extended Window Manager Hints (EWMH) specification](https://specifications.freedesktop.org/wm-spec/latest/).
//! The EWMH spec builds on the lower level Inter Client Communication Conventions Manual
//! (ICCCM) to define interactions between window managers, compositing managers and
//! applications.
//!
//! [Application Window Properties](https://specifications.freedesktop.org/wm-spec/latest/ar01s05.html)
//! EWMH compliant clients declare what kind of window they are mapping by setting the
//! `_NET_WM_WINDOW_TYPE` property. `libwintype` reads that property for a given window,
//! resolves the declared type atom back to its printable name and recognizes desktop
//! background windows, the window type that panels and compositors treat specially.
//!
//! `wtcli` uses `libwintype` to answer window type queries from scripts and hot key
//! bindings; however `libwintype` could be used for a variety of reasons.
mod atoms;
mod classifier;
mod error;
mod model;
pub use atoms::AtomCollection;
pub use classifier::{classify, Classifier};
pub use error::*;
pub use model::*;

/// All essential symbols in a simple consumable form
///
/// ### Examples
/// ```
/// use libwintype::prelude::*;
/// ```
pub mod prelude {
    pub use crate::*;
}
