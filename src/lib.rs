pub use quay_core::*;
