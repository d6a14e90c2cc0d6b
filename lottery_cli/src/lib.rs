//! Interactive console for running a lottery draw.
//!
//! [`app::run`] walks an operator through loading entries, choosing a
//! randomization mode, revealing winners one at a time and exporting the
//! results. All terminal I/O goes through [`console::Console`], so the whole
//! flow can be scripted in tests.

pub mod app;
pub mod console;
pub mod demo;
