//! Track, persist, and restore the on-screen geometry of named windows.
//!
//! Applications register each live window under a stable [`WindowId`] with
//! [`Registry::add`]. The registry remembers every window's rectangle and
//! maximized state, writes the whole set to a single file with
//! [`Registry::store`], and on the next start reads it back with
//! [`Registry::restore`], pushing the saved geometry onto whichever windows
//! are registered.
//!
//! Live windows are reached only through the [`Applyable`] and
//! [`Observable`] capability traits, so any toolkit adapter can plug in.
#![warn(missing_docs)]

mod codec;
mod error;
mod id;
mod registry;
mod window;
mod windows;

pub use codec::{decode, encode};
pub use error::{Error, Result};
pub use id::WindowId;
pub use registry::Registry;
pub use window::{Applyable, Connectable, Observable, WindowGeometry};
pub use windows::Windows;
