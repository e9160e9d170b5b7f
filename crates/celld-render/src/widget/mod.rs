#![forbid(unsafe_code)]

//! Per-widget renderers, one module per drawable kind.
//!
//! Each renderer maps one widget variant to sink calls, consulting the
//! motion engine for anything animated. Out-of-range positions, absent
//! text, and unsupported shapes are silent skips, not errors.

pub(crate) mod bar;
pub(crate) mod num;
pub(crate) mod scroller;
pub(crate) mod string;
pub(crate) mod title;
