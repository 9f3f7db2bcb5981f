//! Implementations of the `show` and `set` subcommands.

use std::io::Write;

use tracing::info;
use window_geometry::Registry;

use crate::{
    cli::{SetArgs, ShowArgs},
    error::Result,
};

/// Print every stored window, one per line, in id order.
pub fn show(args: &ShowArgs, out: &mut impl Write) -> Result<()> {
    let mut registry = Registry::new(&args.file);
    registry.restore()?;
    write!(out, "{}", registry.windows())?;
    Ok(())
}

/// Overwrite one window's record and store the file.
///
/// A missing file starts out empty; an unreadable or corrupt one is an error
/// and is left as it is.
pub fn set(args: &SetArgs, out: &mut impl Write) -> Result<()> {
    let mut registry = Registry::new(&args.file);
    if args.file.exists() {
        registry.restore()?;
    } else {
        info!(path = %args.file.display(), "creating new geometry file");
    }

    let record = registry.get(args.id.as_str());
    // Clear the flag first so the new rectangle is not ignored.
    record.set_maximized(false);
    record.move_to(args.x, args.y);
    record.resize(args.width, args.height);
    record.set_maximized(args.maximized);
    writeln!(out, "{record}")?;

    registry.store()?;
    Ok(())
}
