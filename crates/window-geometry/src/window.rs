//! Window geometry records and the capability traits used to sync them with
//! live windows.
//!
//! A [`WindowGeometry`] remembers where a window was and whether it was
//! maximized. Live windows are reached only through [`Applyable`] (push a
//! geometry onto a window) and [`Observable`] (read the window's current
//! geometry); anything implementing both is [`Connectable`].

use std::{
    cell::RefCell,
    fmt::{Display, Formatter, Result as FmtResult},
    rc::Rc,
    sync::Arc,
};

use parking_lot::Mutex;

use crate::WindowId;

/// Rectangle and maximized state for one window slot.
///
/// While `maximized` is set the rectangle is frozen: [`move_to`] and
/// [`resize`] are no-ops. Leaving the maximized state keeps the last
/// rectangle, so a window that is un-maximized returns to where it was.
///
/// [`move_to`]: WindowGeometry::move_to
/// [`resize`]: WindowGeometry::resize
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct WindowGeometry {
    /// Slot this record belongs to.
    id: WindowId,
    /// Horizontal screen coordinate; negative on monitors left of the primary.
    x: i32,
    /// Vertical screen coordinate.
    y: i32,
    /// Window width.
    width: i32,
    /// Window height.
    height: i32,
    /// Whether the window was maximized.
    maximized: bool,
}

impl WindowGeometry {
    /// Zero-valued record: `(0, 0) (0 x 0)`, not maximized.
    #[must_use]
    pub fn new(id: impl Into<WindowId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Seed a record from the current geometry of a live window.
    pub fn observe<O: Observable + ?Sized>(id: impl Into<WindowId>, window: &O) -> Self {
        let mut geometry = Self::new(id);
        let (x, y) = window.position();
        let (width, height) = window.size();
        geometry.move_to(x, y);
        geometry.resize(width, height);
        geometry.set_maximized(window.is_maximized());
        geometry
    }

    /// The slot identifier.
    pub fn id(&self) -> &WindowId {
        &self.id
    }

    /// Stored `(x, y)` position.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Stored `(width, height)` size.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Stored horizontal coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Stored vertical coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Stored width.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Stored height.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the window is recorded as maximized.
    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Record a new position. Ignored while maximized.
    pub fn move_to(&mut self, x: i32, y: i32) {
        if self.maximized {
            return;
        }
        self.x = x;
        self.y = y;
    }

    /// Record a new size. Ignored while maximized.
    pub fn resize(&mut self, width: i32, height: i32) {
        if self.maximized {
            return;
        }
        self.width = width;
        self.height = height;
    }

    /// Set the maximized flag. The stored rectangle is left untouched.
    pub fn set_maximized(&mut self, maximized: bool) {
        self.maximized = maximized;
    }

    /// Pull the current geometry of a live window into this record.
    ///
    /// The flag is updated first: a window that has just been maximized keeps
    /// the rectangle it had before, and one that has just left the maximized
    /// state records its new rectangle.
    pub fn capture<O: Observable + ?Sized>(&mut self, window: &O) {
        self.set_maximized(window.is_maximized());
        let (x, y) = window.position();
        let (width, height) = window.size();
        self.move_to(x, y);
        self.resize(width, height);
    }

    /// Push this geometry onto a live window.
    ///
    /// Moves and resizes the target, then maximizes it if the record is
    /// maximized. Un-maximizing is left to the window itself.
    pub fn apply_to<A: Applyable + ?Sized>(&self, target: &mut A) {
        target.move_to(self.x, self.y);
        target.resize(self.width, self.height);
        if self.maximized {
            target.maximize();
        }
    }
}

impl Display for WindowGeometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Window {}: ({}, {}) ({} x {}) {}",
            self.id, self.x, self.y, self.width, self.height, self.maximized
        )
    }
}

/// Anything a window geometry can be applied to.
pub trait Applyable {
    /// Move the window so its origin is at `(x, y)`.
    fn move_to(&mut self, x: i32, y: i32);
    /// Resize the window to `width` x `height`.
    fn resize(&mut self, width: i32, height: i32);
    /// Maximize the window.
    fn maximize(&mut self);
}

/// Anything a window geometry can be read from.
pub trait Observable {
    /// Current `(x, y)` position.
    fn position(&self) -> (i32, i32);
    /// Current `(width, height)` size.
    fn size(&self) -> (i32, i32);
    /// Whether the window is currently maximized.
    fn is_maximized(&self) -> bool;
}

/// A live window that can be both observed and driven.
pub trait Connectable: Applyable + Observable {}

impl<T: Applyable + Observable + ?Sized> Connectable for T {}

impl<T: Applyable + ?Sized> Applyable for &mut T {
    fn move_to(&mut self, x: i32, y: i32) {
        (**self).move_to(x, y);
    }

    fn resize(&mut self, width: i32, height: i32) {
        (**self).resize(width, height);
    }

    fn maximize(&mut self) {
        (**self).maximize();
    }
}

impl<T: Observable + ?Sized> Observable for &T {
    fn position(&self) -> (i32, i32) {
        (**self).position()
    }

    fn size(&self) -> (i32, i32) {
        (**self).size()
    }

    fn is_maximized(&self) -> bool {
        (**self).is_maximized()
    }
}

impl<T: Observable + ?Sized> Observable for &mut T {
    fn position(&self) -> (i32, i32) {
        (**self).position()
    }

    fn size(&self) -> (i32, i32) {
        (**self).size()
    }

    fn is_maximized(&self) -> bool {
        (**self).is_maximized()
    }
}

// Shared handles let the toolkit keep its window while the registry drives it.

impl<T: Applyable + ?Sized> Applyable for Rc<RefCell<T>> {
    fn move_to(&mut self, x: i32, y: i32) {
        self.borrow_mut().move_to(x, y);
    }

    fn resize(&mut self, width: i32, height: i32) {
        self.borrow_mut().resize(width, height);
    }

    fn maximize(&mut self) {
        self.borrow_mut().maximize();
    }
}

impl<T: Observable + ?Sized> Observable for Rc<RefCell<T>> {
    fn position(&self) -> (i32, i32) {
        self.borrow().position()
    }

    fn size(&self) -> (i32, i32) {
        self.borrow().size()
    }

    fn is_maximized(&self) -> bool {
        self.borrow().is_maximized()
    }
}

impl<T: Applyable + ?Sized> Applyable for Arc<Mutex<T>> {
    fn move_to(&mut self, x: i32, y: i32) {
        self.lock().move_to(x, y);
    }

    fn resize(&mut self, width: i32, height: i32) {
        self.lock().resize(width, height);
    }

    fn maximize(&mut self) {
        self.lock().maximize();
    }
}

impl<T: Observable + ?Sized> Observable for Arc<Mutex<T>> {
    fn position(&self) -> (i32, i32) {
        self.lock().position()
    }

    fn size(&self) -> (i32, i32) {
        self.lock().size()
    }

    fn is_maximized(&self) -> bool {
        self.lock().is_maximized()
    }
}
