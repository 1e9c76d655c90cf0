use std::fmt;

use x11rb::protocol::xproto;

use crate::{atoms::AtomCollection, WindowTypeError, WindowTypeResult};

/// WinType provides an easy way to identify the different window types
#[derive(Debug, Clone, PartialEq)]
pub enum WinType {
    Combo,
    Desktop,
    Dialog,
    DND,
    Dock,
    DropDownMenu,
    Menu,
    Normal,
    Notification,
    PopupMenu,
    Splash,
    Toolbar,
    ToolTip,
    Utility,
    Other(u32),
}

// Convert from u32 to Type
impl WinType {
    pub fn from(atoms: &AtomCollection, val: u32) -> WinType {
        // An unresolved collection entry is NONE and must never match
        if val == x11rb::NONE {
            return WinType::Other(val);
        }
        match val {
            _ if val == atoms._NET_WM_WINDOW_TYPE_COMBO => WinType::Combo,
            _ if val == atoms._NET_WM_WINDOW_TYPE_DESKTOP => WinType::Desktop,
            _ if val == atoms._NET_WM_WINDOW_TYPE_DIALOG => WinType::Dialog,
            _ if val == atoms._NET_WM_WINDOW_TYPE_DND => WinType::DND,
            _ if val == atoms._NET_WM_WINDOW_TYPE_DOCK => WinType::Dock,
            _ if val == atoms._NET_WM_WINDOW_TYPE_DROPDOWN_MENU => WinType::DropDownMenu,
            _ if val == atoms._NET_WM_WINDOW_TYPE_MENU => WinType::Menu,
            _ if val == atoms._NET_WM_WINDOW_TYPE_NORMAL => WinType::Normal,
            _ if val == atoms._NET_WM_WINDOW_TYPE_NOTIFICATION => WinType::Notification,
            _ if val == atoms._NET_WM_WINDOW_TYPE_POPUP_MENU => WinType::PopupMenu,
            _ if val == atoms._NET_WM_WINDOW_TYPE_SPLASH => WinType::Splash,
            _ if val == atoms._NET_WM_WINDOW_TYPE_TOOLBAR => WinType::Toolbar,
            _ if val == atoms._NET_WM_WINDOW_TYPE_TOOLTIP => WinType::ToolTip,
            _ if val == atoms._NET_WM_WINDOW_TYPE_UTILITY => WinType::Utility,
            _ => WinType::Other(val),
        }
    }

    /// Check if this is the desktop background window type
    pub fn is_desktop(&self) -> bool {
        *self == WinType::Desktop
    }
}

// Implement format! support
impl fmt::Display for WinType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WinType::Other(_) => write!(f, ""),
            _ => write!(f, "{}", format!("{:?}", self).to_lowercase()),
        }
    }
}

/// Parse a window id given as a decimal or `0x` prefixed hexadecimal string
///
/// ### Examples
/// ```
/// use libwintype::prelude::*;
/// assert_eq!(parse_window_id("0x2e00005").unwrap(), 48234501);
/// ```
pub fn parse_window_id(val: &str) -> WindowTypeResult<xproto::Window> {
    let parsed = match val.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => val.parse::<u32>(),
    };
    parsed.map_err(|_| WindowTypeError::InvalidWindowId(val.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Atom values are arbitrary but unique, the way a live server hands them out
    fn atoms() -> AtomCollection {
        AtomCollection {
            _NET_WM_WINDOW_TYPE: 300,
            _NET_WM_WINDOW_TYPE_COMBO: 301,
            _NET_WM_WINDOW_TYPE_DESKTOP: 302,
            _NET_WM_WINDOW_TYPE_DIALOG: 303,
            _NET_WM_WINDOW_TYPE_DND: 304,
            _NET_WM_WINDOW_TYPE_DOCK: 305,
            _NET_WM_WINDOW_TYPE_DROPDOWN_MENU: 306,
            _NET_WM_WINDOW_TYPE_MENU: 307,
            _NET_WM_WINDOW_TYPE_NORMAL: 308,
            _NET_WM_WINDOW_TYPE_NOTIFICATION: 309,
            _NET_WM_WINDOW_TYPE_POPUP_MENU: 310,
            _NET_WM_WINDOW_TYPE_SPLASH: 311,
            _NET_WM_WINDOW_TYPE_TOOLBAR: 312,
            _NET_WM_WINDOW_TYPE_TOOLTIP: 313,
            _NET_WM_WINDOW_TYPE_UTILITY: 314,
        }
    }

    #[test]
    fn test_win_type_from_atom() {
        let atoms = atoms();
        assert_eq!(WinType::from(&atoms, 302), WinType::Desktop);
        assert_eq!(WinType::from(&atoms, 305), WinType::Dock);
        assert_eq!(WinType::from(&atoms, 308), WinType::Normal);
        assert_eq!(WinType::from(&atoms, 999), WinType::Other(999));
    }

    #[test]
    fn test_win_type_none_never_matches() {
        // Simulate a server where none of the type atoms were ever interned
        let mut atoms = atoms();
        atoms._NET_WM_WINDOW_TYPE_DESKTOP = x11rb::NONE;
        assert_eq!(WinType::from(&atoms, x11rb::NONE), WinType::Other(0));
    }

    #[test]
    fn test_win_type_desktop_check() {
        assert!(WinType::Desktop.is_desktop());
        assert!(!WinType::Normal.is_desktop());
        assert!(!WinType::Other(42).is_desktop());
    }

    #[test]
    fn test_win_type_display() {
        assert_eq!(WinType::Desktop.to_string(), "desktop");
        assert_eq!(WinType::DropDownMenu.to_string(), "dropdownmenu");
        assert_eq!(WinType::Other(42).to_string(), "");
    }

    #[test]
    fn test_parse_window_id() {
        assert_eq!(parse_window_id("48234501").unwrap(), 48234501);
        assert_eq!(parse_window_id("0x2e00005").unwrap(), 48234501);
        assert!(parse_window_id("desktop").is_err());
        assert!(parse_window_id("0xzz").is_err());
        assert!(parse_window_id("").is_err());
    }
}
