//! Atom resolution for the EWMH window type vocabulary.
//!
//! The X11 protocol transmits property names and enumerated property values
//! as atoms, server-interned integer ids standing in for strings. All the
//! atoms `libwintype` cares about are resolved once per connection and kept
//! in an [`AtomCollection`].
use tracing::trace;

use x11rb::{
    protocol::xproto::{Atom, ConnectionExt as _},
    rust_connection::RustConnection,
};

use crate::WindowTypeResult;

/// Window type atoms resolved against the server at connect time.
///
/// Resolution uses only-if-exists interning: a name that no client has ever
/// interned resolves to `x11rb::NONE` instead of being created server-side.
/// A `NONE` entry can never equal an atom read out of a property value.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomCollection {
    pub _NET_WM_WINDOW_TYPE: Atom,
    pub _NET_WM_WINDOW_TYPE_COMBO: Atom,
    pub _NET_WM_WINDOW_TYPE_DESKTOP: Atom,
    pub _NET_WM_WINDOW_TYPE_DIALOG: Atom,
    pub _NET_WM_WINDOW_TYPE_DND: Atom,
    pub _NET_WM_WINDOW_TYPE_DOCK: Atom,
    pub _NET_WM_WINDOW_TYPE_DROPDOWN_MENU: Atom,
    pub _NET_WM_WINDOW_TYPE_MENU: Atom,
    pub _NET_WM_WINDOW_TYPE_NORMAL: Atom,
    pub _NET_WM_WINDOW_TYPE_NOTIFICATION: Atom,
    pub _NET_WM_WINDOW_TYPE_POPUP_MENU: Atom,
    pub _NET_WM_WINDOW_TYPE_SPLASH: Atom,
    pub _NET_WM_WINDOW_TYPE_TOOLBAR: Atom,
    pub _NET_WM_WINDOW_TYPE_TOOLTIP: Atom,
    pub _NET_WM_WINDOW_TYPE_UTILITY: Atom,
}

// Order must match the destructuring in AtomCollection::new
const ATOM_NAMES: [&str; 15] = [
    "_NET_WM_WINDOW_TYPE",
    "_NET_WM_WINDOW_TYPE_COMBO",
    "_NET_WM_WINDOW_TYPE_DESKTOP",
    "_NET_WM_WINDOW_TYPE_DIALOG",
    "_NET_WM_WINDOW_TYPE_DND",
    "_NET_WM_WINDOW_TYPE_DOCK",
    "_NET_WM_WINDOW_TYPE_DROPDOWN_MENU",
    "_NET_WM_WINDOW_TYPE_MENU",
    "_NET_WM_WINDOW_TYPE_NORMAL",
    "_NET_WM_WINDOW_TYPE_NOTIFICATION",
    "_NET_WM_WINDOW_TYPE_POPUP_MENU",
    "_NET_WM_WINDOW_TYPE_SPLASH",
    "_NET_WM_WINDOW_TYPE_TOOLBAR",
    "_NET_WM_WINDOW_TYPE_TOOLTIP",
    "_NET_WM_WINDOW_TYPE_UTILITY",
];

impl AtomCollection {
    /// Resolve all the window type atoms in a single batch, queueing every
    /// intern request before reading the first reply.
    pub fn new(conn: &RustConnection) -> WindowTypeResult<Self> {
        let cookies = ATOM_NAMES.map(|name| conn.intern_atom(true, name.as_bytes()));

        let mut atoms = [x11rb::NONE; ATOM_NAMES.len()];
        for ((slot, cookie), name) in atoms.iter_mut().zip(cookies).zip(ATOM_NAMES) {
            *slot = cookie?.reply()?.atom;
            trace!("atom: {}: {}", name, *slot);
        }

        let [window_type, combo, desktop, dialog, dnd, dock, dropdown_menu, menu, normal, notification, popup_menu, splash, toolbar, tooltip, utility] =
            atoms;
        Ok(AtomCollection {
            _NET_WM_WINDOW_TYPE: window_type,
            _NET_WM_WINDOW_TYPE_COMBO: combo,
            _NET_WM_WINDOW_TYPE_DESKTOP: desktop,
            _NET_WM_WINDOW_TYPE_DIALOG: dialog,
            _NET_WM_WINDOW_TYPE_DND: dnd,
            _NET_WM_WINDOW_TYPE_DOCK: dock,
            _NET_WM_WINDOW_TYPE_DROPDOWN_MENU: dropdown_menu,
            _NET_WM_WINDOW_TYPE_MENU: menu,
            _NET_WM_WINDOW_TYPE_NORMAL: normal,
            _NET_WM_WINDOW_TYPE_NOTIFICATION: notification,
            _NET_WM_WINDOW_TYPE_POPUP_MENU: popup_menu,
            _NET_WM_WINDOW_TYPE_SPLASH: splash,
            _NET_WM_WINDOW_TYPE_TOOLBAR: toolbar,
            _NET_WM_WINDOW_TYPE_TOOLTIP: tooltip,
            _NET_WM_WINDOW_TYPE_UTILITY: utility,
        })
    }
}
