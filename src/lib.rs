//! # pymoddeps
//!
//! Module-level import dependencies of a Python source tree.
//!
//! The directory given to the analyzer plays the role of a `PYTHONPATH` entry:
//! every top-level module and package under it is a *target root*, and so is
//! every extra root supplied by the caller. Each scanned module is reported
//! with the target names it imports, one `source target` edge per line.
//!
//! ## Resolution
//!
//! - `import a.b.c` depends on `a.b.c`.
//! - `from a.b import x` depends on `a.b.x` when `a.b` is a scanned package,
//!   otherwise on `a.b` itself.
//! - `from a.b import *` depends on every direct member of package `a.b`.
//! - Relative imports (`from . import x`) are parsed but never resolved; they
//!   contribute no edges.
//!
//! Any file that fails to parse aborts the whole run.

pub mod core;
pub mod formatters;
pub mod parsers;
