//! `Classifier` uses the [Extended Window Manager Hints (EWMH) specification](https://specifications.freedesktop.org/wm-spec/latest/)
//! to determine what kind of window a given window id refers to. The EWMH spec builds on the
//! lower level Inter Client Communication Conventions Manual (ICCCM) to define interactions
//! between window managers, compositing managers and applications.
//!
//! [Application Window Properties](https://specifications.freedesktop.org/wm-spec/latest/ar01s05.html)
//! A window's declared type is carried in its `_NET_WM_WINDOW_TYPE` property as a list of
//! atoms, ordered most to least preferable. `Classifier` reads the first of those atoms,
//! resolves it back to its printable name and tells desktop background windows apart from
//! everything else.
use std::str;

use tracing::{debug, trace};

use x11rb::{
    connection::Connection,
    protocol::xproto::{Atom, AtomEnum, ConnectionExt as _, GetPropertyReply, Window},
    rust_connection::RustConnection,
};

use crate::{atoms::AtomCollection, model::WinType, WindowTypeError, WindowTypeResult};

/// Classifier implements the EWMH window type lookup using x11rb to provide a simplified
/// access layer for window type queries.
///
/// Each instance owns its connection exclusively. The connection is closed when the
/// classifier is dropped, on every exit path, and property buffers are freed with the
/// replies that carry them.
pub struct Classifier {
    conn: RustConnection,      // x11 connection
    pub atoms: AtomCollection, // atom cache
    screen: usize,             // screen number
    root: u32,                 // root window id
}

impl Classifier {
    /// Create the classifier instance and connect to the X11 server
    ///
    /// ### Arguments
    /// * `display` - display to connect to in X11 notation e.g. `:0`, else `$DISPLAY` when None
    ///
    /// ### Examples
    /// ```ignore
    /// use libwintype::prelude::*;
    /// let classifier = Classifier::connect(None).unwrap();
    /// ```
    pub fn connect(display: Option<&str>) -> WindowTypeResult<Self> {
        let (conn, screen) = x11rb::connect(display)?;
        let root = conn.setup().roots[screen].root;

        // Resolve the window type atoms
        let atoms = AtomCollection::new(&conn)?;

        debug!("connect: screen: {}, root: {}", screen, root);
        Ok(Classifier { conn, atoms, screen, root })
    }

    /// Get the default screen number
    pub fn screen(&self) -> usize {
        self.screen
    }

    /// Get the root window
    pub fn root(&self) -> u32 {
        self.root
    }

    // A single atom is all the classification needs, so rather than pulling the full
    // list only the first 32bit unit is requested. The property is not deleted.
    fn get_window_property<A: Into<Atom>, B: Into<Atom>>(
        &self, win: Window, property: A, type_: B,
    ) -> WindowTypeResult<GetPropertyReply> {
        Ok(self.conn.get_property(false, win, property, type_, 0, 1)?.reply()?)
    }

    /// Get the window's declared type as a raw atom id
    ///
    /// ### Arguments
    /// * `win` - id of the window to query
    ///
    /// ### Examples
    /// ```ignore
    /// use libwintype::prelude::*;
    /// let classifier = Classifier::connect(None).unwrap();
    /// let atom = classifier.win_type_atom(12345).unwrap();
    /// ```
    pub fn win_type_atom(&self, win: Window) -> WindowTypeResult<Atom> {
        // Defined as: _NET_WM_WINDOW_TYPE, ATOM[]/32
        if self.atoms._NET_WM_WINDOW_TYPE == x11rb::NONE {
            return Err(WindowTypeError::AtomNotFound("_NET_WM_WINDOW_TYPE".to_owned()).into());
        }
        let reply = self.get_window_property(win, self.atoms._NET_WM_WINDOW_TYPE, AtomEnum::ATOM)?;
        first_atom(&reply)
            .ok_or_else(|| WindowTypeError::PropertyNotFound("_NET_WM_WINDOW_TYPE".to_owned()).into())
    }

    /// Resolve an atom id back to its printable name
    ///
    /// ### Arguments
    /// * `atom` - atom to resolve
    ///
    /// ### Examples
    /// ```ignore
    /// use libwintype::prelude::*;
    /// let classifier = Classifier::connect(None).unwrap();
    /// let name = classifier.atom_name(classifier.atoms._NET_WM_WINDOW_TYPE).unwrap();
    /// ```
    pub fn atom_name(&self, atom: Atom) -> WindowTypeResult<String> {
        let reply = self.conn.get_atom_name(atom)?.reply()?;
        let name = str::from_utf8(&reply.name)?.to_owned();
        trace!("atom_name: {}: {}", atom, name);
        Ok(name)
    }

    /// Get the window's type
    ///
    /// ### Arguments
    /// * `win` - id of the window to query
    ///
    /// ### Examples
    /// ```ignore
    /// use libwintype::prelude::*;
    /// let classifier = Classifier::connect(None).unwrap();
    /// let typ = classifier.win_type(12345).unwrap();
    /// ```
    pub fn win_type(&self, win: Window) -> WindowTypeResult<WinType> {
        let typ = WinType::from(&self.atoms, self.win_type_atom(win)?);
        debug!("win_type: id: {}, type: {}", win, typ);
        Ok(typ)
    }

    /// Get the printable name of the window's declared type, or None when the window has
    /// no type property, the property is empty or any request failed.
    ///
    /// When the type denotes a desktop background window a single diagnostic line is
    /// written to stderr. The comparison is made on the numeric atom ids, not on the
    /// resolved names.
    ///
    /// ### Arguments
    /// * `win` - id of the window to query
    ///
    /// ### Examples
    /// ```ignore
    /// use libwintype::prelude::*;
    /// let classifier = Classifier::connect(None).unwrap();
    /// let name = classifier.classify(12345);
    /// ```
    pub fn classify(&self, win: Window) -> Option<String> {
        let atom = self.win_type_atom(win).ok()?;

        // The desktop check below must still run when the name lookup fails
        let name = self.atom_name(atom).ok();
        debug!("classify: id: {}, atom: {}, name: {:?}", win, atom, name);

        let desktop = self.atoms._NET_WM_WINDOW_TYPE_DESKTOP;
        if desktop != x11rb::NONE && atom == desktop {
            eprintln!("window {} is a desktop window", win);
        }
        name
    }
}

// Extract the first atom from an ATOM[] property value
fn first_atom(reply: &GetPropertyReply) -> Option<Atom> {
    reply.value32().and_then(|mut x| x.next())
}

/// Classify a window in one shot: connect to the given display, resolve the printable
/// name of the window's `_NET_WM_WINDOW_TYPE` and disconnect. Every failure, including
/// an unreachable display server, degrades to None.
///
/// ### Arguments
/// * `display` - display to connect to in X11 notation e.g. `:0`, else `$DISPLAY` when None
/// * `win` - id of the window to query
///
/// ### Examples
/// ```ignore
/// use libwintype::prelude::*;
/// let name = libwintype::classify(None, 12345);
/// ```
pub fn classify(display: Option<&str>, win: Window) -> Option<String> {
    // The connection closes when the classifier drops, no matter which path returns
    let classifier = Classifier::connect(display).ok()?;
    classifier.classify(win)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A display no server listens on. Connecting must fail fast rather than hang.
    const DEAD_DISPLAY: &str = ":31313";

    fn atom_property_reply(format: u8, value: Vec<u8>) -> GetPropertyReply {
        GetPropertyReply {
            format,
            sequence: 0,
            length: value.len() as u32 / 4,
            type_: AtomEnum::ATOM.into(),
            bytes_after: 0,
            value_len: value.len() as u32 / 4,
            value,
        }
    }

    #[test]
    fn test_first_atom_takes_the_first() {
        let mut value = 302u32.to_ne_bytes().to_vec();
        value.extend_from_slice(&308u32.to_ne_bytes());
        let reply = atom_property_reply(32, value);
        assert_eq!(first_atom(&reply), Some(302));
    }

    #[test]
    fn test_first_atom_empty_value() {
        let reply = atom_property_reply(32, vec![]);
        assert_eq!(first_atom(&reply), None);
    }

    #[test]
    fn test_first_atom_missing_property() {
        // A window without the property answers with format 0 and no data
        let reply = atom_property_reply(0, vec![]);
        assert_eq!(first_atom(&reply), None);
    }

    #[test]
    fn test_connect_unreachable_display() {
        assert!(Classifier::connect(Some(DEAD_DISPLAY)).is_err());
    }

    #[test]
    fn test_classify_unreachable_display() {
        // The one shot contract never raises, it degrades to None
        assert_eq!(classify(Some(DEAD_DISPLAY), 12345), None);
    }
}
