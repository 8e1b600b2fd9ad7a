//! Browser bindings: the resume protocol over `window.localStorage`.
//!
//! Build with `wasm-pack build extension/web --target web`. On non-wasm
//! targets only [`api`] is compiled, which keeps it testable with `cargo test`.

pub mod api;

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use bindings::*;
