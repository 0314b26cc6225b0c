// Common utilities shared by the derive macros
//
// This module contains:
// - side_attr: `#[either(left | right)]` parsing

mod side_attr;

pub use side_attr::*;
