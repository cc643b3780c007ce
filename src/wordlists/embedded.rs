//! Embedded word bank
//!
//! Entries compiled into the binary at build time from `data/words.txt`.

// Include generated word bank from build script
include!(concat!(env!("OUT_DIR"), "/word_bank.rs"));
