//! Embedded corpus
//!
//! Category files from `data/` compiled into the binary at build time.

// Include generated sources from build script
include!(concat!(env!("OUT_DIR"), "/corpus.rs"));
