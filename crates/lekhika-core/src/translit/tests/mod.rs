use super::*;

mod basic;
mod flags;
mod open;

/// Bundled tables with auto-correct off, so smart correction is isolated.
fn engine() -> Transliterator {
    let mut t = Transliterator::with_defaults();
    t.set_auto_correct(false);
    t
}
