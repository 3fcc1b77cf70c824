//! Browser-environment glue.

pub mod dark_mode;
