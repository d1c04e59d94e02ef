//! Process-wide, write-only citation registration.
//!
//! Gated behind the `bibliography` feature and compiled out entirely
//! otherwise. Algorithms that implement a published technique call
//! [`cite`] once when they run; the registry only accumulates entries, it is
//! never read by the algorithmic core, and it must never influence any
//! numeric result — this module exists purely so a caller who wants an
//! audit trail of "which papers were actually exercised by this run" can
//! drain [`citations`] afterward.

#[cfg(feature = "bibliography")]
mod enabled {
    use alloc::vec::Vec;

    #[cfg(feature = "std")]
    use std::sync::Mutex;

    #[cfg(feature = "std")]
    static REGISTRY: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

    #[cfg(not(feature = "std"))]
    use core::cell::RefCell;
    #[cfg(not(feature = "std"))]
    struct SyncRefCell<T>(RefCell<T>);
    #[cfg(not(feature = "std"))]
    unsafe impl<T> Sync for SyncRefCell<T> {}
    #[cfg(not(feature = "std"))]
    static REGISTRY: SyncRefCell<Vec<&'static str>> = SyncRefCell(RefCell::new(Vec::new()));

    /// A short citation key, e.g. `"HS1996"` or `"Shiloach1979"`.
    pub type CitationKey = &'static str;

    /// Records that the algorithm identified by `key` ran. Idempotent with
    /// respect to correctness (duplicates are allowed and expected — a
    /// solver may call the same cited routine many times per process).
    pub fn cite(key: CitationKey) {
        #[cfg(feature = "std")]
        {
            REGISTRY.lock().expect("bibliography mutex poisoned").push(key);
        }
        #[cfg(not(feature = "std"))]
        {
            REGISTRY.0.borrow_mut().push(key);
        }
    }

    /// Returns every citation key recorded so far, in call order, without
    /// clearing the registry.
    #[must_use]
    pub fn citations() -> Vec<CitationKey> {
        #[cfg(feature = "std")]
        {
            REGISTRY.lock().expect("bibliography mutex poisoned").clone()
        }
        #[cfg(not(feature = "std"))]
        {
            REGISTRY.0.borrow().clone()
        }
    }

    /// Human-readable reference text for a known citation key, or `None` for
    /// an unrecognized one.
    #[must_use]
    pub fn describe(key: CitationKey) -> Option<&'static str> {
        match key {
            "HS1996" => Some(
                "Hochberg & Stallmann, \"Optimal one-page tree embeddings in linear time\", 1996",
            ),
            "Shiloach1979" => {
                Some("Shiloach, \"A minimum linear arrangement algorithm for undirected trees\", 1979")
            }
            "Chung1984" => Some("Chung, \"On optimal linear arrangements of trees\", 1984"),
            "Esteban2017" => Some(
                "Esteban & Ferrer-i-Cancho, \"A correction on Shiloach's algorithm for minimum linear arrangements of trees\", 2017",
            ),
            _ => None,
        }
    }
}

#[cfg(feature = "bibliography")]
pub use enabled::*;

#[cfg(not(feature = "bibliography"))]
mod disabled {
    /// A short citation key. No-op builds when the `bibliography` feature is
    /// off: call sites compile unconditionally, they just do nothing.
    pub type CitationKey = &'static str;

    /// No-op when the `bibliography` feature is disabled.
    #[inline(always)]
    pub fn cite(_key: CitationKey) {}
}

#[cfg(not(feature = "bibliography"))]
pub use disabled::*;
