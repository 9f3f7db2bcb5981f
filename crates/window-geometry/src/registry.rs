//! The geometry registry: known window records plus the live windows they
//! are synchronized with.

use std::{
    collections::HashMap,
    fmt::{Debug, Formatter, Result as FmtResult},
    fs::{File, OpenOptions},
    io::{Read, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info, trace};

use crate::{Connectable, Error, Result, WindowGeometry, WindowId, Windows};

/// Tracks window geometry and keeps it in sync with live windows.
///
/// The registry owns two maps. `windows` holds one record per window slot
/// ever seen and is what gets persisted. `connectables` holds the live window
/// registered for each slot in this process; it is never persisted and is
/// rebuilt as windows register themselves through [`Registry::add`].
///
/// Records are never removed during a run. The registry does no locking;
/// callers sharing one instance across threads must serialize access.
pub struct Registry {
    /// File that [`store`](Self::store) writes and [`restore`](Self::restore) reads.
    path: PathBuf,
    /// Durable records, one per slot.
    windows: Windows,
    /// Live windows registered in this process.
    connectables: HashMap<WindowId, Box<dyn Connectable>>,
}

impl Registry {
    /// Create an empty registry persisting to `path`. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            windows: Windows::new(),
            connectables: HashMap::new(),
        }
    }

    /// Register a live window for `id`.
    ///
    /// The first time an id is seen its record is seeded from the window's
    /// current geometry. If a record already exists (from an earlier session
    /// or a previous window with the same id) it is applied onto the new
    /// window instead, overwriting whatever geometry the window had. Either
    /// way the window replaces any handle previously registered for `id`.
    pub fn add<C>(&mut self, id: impl Into<WindowId>, mut window: C)
    where
        C: Connectable + 'static,
    {
        let id = id.into();
        match self.windows.find(&id) {
            Some(known) => {
                debug!(window = %known, "reapplying known geometry");
                known.apply_to(&mut window);
            }
            None => {
                let seeded = WindowGeometry::observe(id.clone(), &window);
                debug!(window = %seeded, "tracking new window");
                self.windows.insert(seeded);
            }
        }
        self.connectables.insert(id, Box::new(window));
    }

    /// Get the record for `id`, creating a zero-valued one if absent.
    ///
    /// Mutating the returned record is how callers report that a window moved,
    /// resized, or changed its maximized state.
    pub fn get(&mut self, id: impl Into<WindowId>) -> &mut WindowGeometry {
        self.windows.get(id)
    }

    /// Pull the current geometry of every registered window into its record.
    pub fn capture(&mut self) {
        for (id, window) in &self.connectables {
            let record = self.windows.get(id.clone());
            record.capture(&**window);
            trace!(window = %record, "captured");
        }
    }

    /// Write every record to the registry's file, creating or truncating it.
    ///
    /// # Errors
    /// Fails with [`Error::Open`] if the file cannot be opened, and with
    /// [`Error::Store`] naming the file if the payload cannot be encoded or
    /// fully written. Nothing is retried.
    pub fn store(&self) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|source| Error::Open {
                path: self.path.clone(),
                source,
            })?;
        self.store_to(&mut file).map_err(|source| Error::Store {
            path: self.path.clone(),
            source: Box::new(source),
        })?;
        info!(
            path = %self.path.display(),
            count = self.windows.len(),
            "stored window geometry"
        );
        Ok(())
    }

    /// Write every record to `writer`.
    pub fn store_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.windows.store(writer)
    }

    /// Load records from the registry's file and apply them.
    ///
    /// See [`restore_from`](Self::restore_from) for how loaded records are
    /// merged.
    ///
    /// # Errors
    /// Fails with [`Error::Open`] if the file is missing, and with
    /// [`Error::Restore`] naming the file if it is unreadable or its payload
    /// cannot be decoded. On failure the registry is left unchanged.
    pub fn restore(&mut self) -> Result<()> {
        info!(path = %self.path.display(), "loading window geometry");
        let mut file = File::open(&self.path).map_err(|source| Error::Open {
            path: self.path.clone(),
            source,
        })?;
        self.restore_from(&mut file).map_err(|source| Error::Restore {
            path: self.path.clone(),
            source: Box::new(source),
        })
    }

    /// Load records from `reader` and apply them.
    ///
    /// Loaded records overwrite in-memory ones with the same id; records for
    /// other ids are kept. Every loaded record whose window is currently
    /// registered is applied onto that window right away. The others wait
    /// for a later [`add`](Self::add).
    ///
    /// # Errors
    /// The whole payload is decoded before anything is merged, so a decode
    /// failure leaves the registry untouched.
    pub fn restore_from<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<()> {
        let loaded = Windows::load(reader)?;
        let count = loaded.len();
        for (id, record) in loaded {
            match self.connectables.get_mut(&id) {
                Some(window) => {
                    debug!(window = %record, "applying restored geometry");
                    record.apply_to(&mut **window);
                }
                None => trace!(window = %record, "restored geometry has no live window"),
            }
            self.windows.insert(record);
        }
        info!(count, "restored window geometry");
        Ok(())
    }

    /// File this registry persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All known records, in ascending id order.
    pub fn windows(&self) -> &Windows {
        &self.windows
    }

    /// Whether a live window is registered for `id`.
    pub fn is_connected(&self, id: &WindowId) -> bool {
        self.connectables.contains_key(id)
    }
}

impl Debug for Registry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut connected: Vec<&WindowId> = self.connectables.keys().collect();
        connected.sort();
        f.debug_struct("Registry")
            .field("path", &self.path)
            .field("windows", &self.windows)
            .field("connected", &connected)
            .finish()
    }
}
