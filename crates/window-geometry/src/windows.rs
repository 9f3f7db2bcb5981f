//! The window map and its reader/writer boundary.

use std::{
    collections::{
        BTreeMap,
        btree_map::{IntoIter, Values},
    },
    fmt::{Display, Formatter, Result as FmtResult},
    io::{Read, Write},
};

use crate::{Error, Result, WindowGeometry, WindowId, codec};

/// Window geometry records keyed by id, iterated in ascending id order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Windows {
    /// Records by slot identifier.
    records: BTreeMap<WindowId, WindowGeometry>,
}

impl Windows {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the record for `id`, inserting a zero-valued one if absent.
    pub fn get(&mut self, id: impl Into<WindowId>) -> &mut WindowGeometry {
        let id = id.into();
        self.records
            .entry(id)
            .or_insert_with_key(|id| WindowGeometry::new(id.clone()))
    }

    /// Look up the record for `id` without inserting.
    pub fn find(&self, id: &WindowId) -> Option<&WindowGeometry> {
        self.records.get(id)
    }

    /// Insert a record under its own id, returning the one it replaced.
    pub fn insert(&mut self, geometry: WindowGeometry) -> Option<WindowGeometry> {
        self.records.insert(geometry.id().clone(), geometry)
    }

    /// Whether a record exists for `id`.
    pub fn contains(&self, id: &WindowId) -> bool {
        self.records.contains_key(id)
    }

    /// Iterate records in ascending id order.
    pub fn iter(&self) -> Values<'_, WindowId, WindowGeometry> {
        self.records.values()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Encode every record and write the payload with a single write call.
    ///
    /// # Errors
    /// Fails on encoding or write errors, and with [`Error::ShortWrite`] if
    /// the writer accepts fewer bytes than the payload holds.
    pub fn store<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        let bytes = codec::encode(self)?;
        let written = writer.write(&bytes).map_err(Error::Write)?;
        if written != bytes.len() {
            return Err(Error::ShortWrite {
                written,
                expected: bytes.len(),
            });
        }
        writer.flush().map_err(Error::Write)?;
        Ok(())
    }

    /// Read the reader to the end and decode the full window map.
    pub fn load<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(Error::Read)?;
        codec::decode(&bytes)
    }
}

impl<'a> IntoIterator for &'a Windows {
    type Item = &'a WindowGeometry;
    type IntoIter = Values<'a, WindowId, WindowGeometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Windows {
    type Item = (WindowId, WindowGeometry);
    type IntoIter = IntoIter<WindowId, WindowGeometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl FromIterator<WindowGeometry> for Windows {
    fn from_iter<I: IntoIterator<Item = WindowGeometry>>(iter: I) -> Self {
        let mut windows = Self::new();
        for geometry in iter {
            windows.insert(geometry);
        }
        windows
    }
}

impl Display for Windows {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for window in self {
            writeln!(f, "{window}")?;
        }
        Ok(())
    }
}
