#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Browser entry point for the Creative Text Generator UI.
//!
//! Native builds only print how to produce the wasm bundle.

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    " renders in the browser only. Serve it with `trunk serve` or build for ",
    "`wasm32-unknown-unknown`.\n",
);

#[cfg(target_arch = "wasm32")]
fn main() {
    creative_text_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    std::io::stderr().lock().write_all(NATIVE_HINT.as_bytes())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn hint_names_the_wasm_target() {
        assert!(NATIVE_HINT.starts_with("creative-text-ui"));
        assert!(NATIVE_HINT.contains("wasm32-unknown-unknown"));
    }

    #[test]
    fn native_main_prints_hint() -> std::io::Result<()> {
        main()
    }
}
