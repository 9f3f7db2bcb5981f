//! Binary envelope for persisted window geometry.
//!
//! The envelope is MessagePack with named fields:
//!
//! ```text
//! Windows { windows: [Window] }
//! Window  { name, position: { x, y }, size: { width, height }, maximized }
//! ```
//!
//! Field names are kept on the wire and every struct falls back to defaults
//! for missing fields, so records can grow new fields without breaking files
//! written by older builds.

use rmp_serde::{Deserializer, decode};
use serde::{Deserialize, Serialize};

use crate::{Result, WindowGeometry, Windows};

/// Top-level envelope: every window in one ordered list.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct WireWindows {
    /// Records in ascending id order.
    windows: Vec<WireWindow>,
}

/// One named window record.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct WireWindow {
    /// Window slot identifier.
    name: String,
    /// Window origin.
    position: WirePosition,
    /// Window dimensions.
    size: WireSize,
    /// Maximized flag.
    maximized: bool,
}

/// Window origin on the wire.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct WirePosition {
    /// Horizontal coordinate.
    x: i32,
    /// Vertical coordinate.
    y: i32,
}

/// Window dimensions on the wire.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct WireSize {
    /// Width.
    width: i32,
    /// Height.
    height: i32,
}

impl From<&WindowGeometry> for WireWindow {
    fn from(g: &WindowGeometry) -> Self {
        let (x, y) = g.position();
        let (width, height) = g.size();
        Self {
            name: g.id().as_str().to_string(),
            position: WirePosition { x, y },
            size: WireSize { width, height },
            maximized: g.is_maximized(),
        }
    }
}

impl From<WireWindow> for WindowGeometry {
    fn from(w: WireWindow) -> Self {
        let mut g = Self::new(w.name);
        g.move_to(w.position.x, w.position.y);
        g.resize(w.size.width, w.size.height);
        g.set_maximized(w.maximized);
        g
    }
}

/// Encode a complete window map.
///
/// Records are emitted in ascending id order, so equal maps always encode to
/// identical bytes.
pub fn encode(windows: &Windows) -> Result<Vec<u8>> {
    let wire = WireWindows {
        windows: windows.iter().map(WireWindow::from).collect(),
    };
    Ok(rmp_serde::to_vec_named(&wire)?)
}

/// Decode a complete window map.
///
/// When a name appears more than once the last record wins.
///
/// # Errors
/// Returns [`crate::Error::Decode`] if `bytes` is not exactly one valid
/// envelope; trailing bytes are rejected. No partial result is produced.
pub fn decode(bytes: &[u8]) -> Result<Windows> {
    let mut rest = bytes;
    let wire = {
        let mut de = Deserializer::new(&mut rest);
        WireWindows::deserialize(&mut de)?
    };
    if !rest.is_empty() {
        return Err(decode::Error::Syntax(format!(
            "{} trailing bytes after window geometry envelope",
            rest.len()
        ))
        .into());
    }
    let mut windows = Windows::new();
    for record in wire.windows {
        windows.insert(WindowGeometry::from(record));
    }
    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn sample() -> Windows {
        let mut windows = Windows::new();
        let main = windows.get("main");
        main.move_to(1, 2);
        main.resize(3, 4);
        main.set_maximized(true);
        let dialog = windows.get("dialog");
        dialog.move_to(-10, 20);
        dialog.resize(300, 400);
        windows
    }

    #[test]
    fn encoding_is_deterministic() {
        let a = encode(&sample()).unwrap();
        let b = encode(&sample()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn decode_restores_every_field() {
        let bytes = encode(&sample()).unwrap();
        let mut back = decode(&bytes).unwrap();
        assert_eq!(back.len(), 2);
        let main = back.get("main").clone();
        assert_eq!(main.position(), (1, 2));
        assert_eq!(main.size(), (3, 4));
        assert!(main.is_maximized());
        let dialog = back.get("dialog").clone();
        assert_eq!(dialog.position(), (-10, 20));
        assert_eq!(dialog.size(), (300, 400));
        assert!(!dialog.is_maximized());
    }

    #[test]
    fn empty_map_encodes_an_empty_list() {
        let bytes = encode(&Windows::new()).unwrap();
        assert!(decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn duplicate_names_keep_the_last_record() {
        let wire = WireWindows {
            windows: vec![
                WireWindow {
                    name: "a".into(),
                    position: WirePosition { x: 1, y: 1 },
                    ..WireWindow::default()
                },
                WireWindow {
                    name: "a".into(),
                    position: WirePosition { x: 2, y: 2 },
                    ..WireWindow::default()
                },
            ],
        };
        let bytes = rmp_serde::to_vec_named(&wire).unwrap();
        let mut windows = decode(&bytes).unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows.get("a").position(), (2, 2));
    }

    #[test]
    fn negative_sizes_are_accepted() {
        let mut windows = Windows::new();
        windows.get("odd").resize(-3, -4);
        let mut back = decode(&encode(&windows).unwrap()).unwrap();
        assert_eq!(back.get("odd").size(), (-3, -4));
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let bytes = encode(&sample()).unwrap();
        let err = decode(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "got {err:?}");
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut bytes = encode(&sample()).unwrap();
        bytes.extend_from_slice(b"\xc1garbage");
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "got {err:?}");
        assert!(err.to_string().contains("8 trailing bytes"), "{err}");
    }

    #[test]
    fn garbage_payload_is_rejected() {
        assert!(matches!(decode(b"not geometry"), Err(Error::Decode(_))));
        assert!(matches!(decode(&[]), Err(Error::Decode(_))));
    }
}
