//! # `tub` - explicitly constructed inline storage
//!
//! A [`Tub<T>`] holds space for one `T` without holding a `T`. The value is
//! built in place on demand and dropped automatically when the tub is
//! re-constructed, destroyed, or goes out of scope.
//!
//! ## Guarantees
//!
//! - **Presence tracks liveness**: [`Tub::is_present`] is `true` exactly when a
//!   live `T` occupies the storage.
//! - **Construction is all-or-nothing**: a failing or panicking constructor
//!   leaves the tub empty and runs no destructor for the value that was never
//!   built.
//! - **Natural layout**: the value sits at offset 0 and the tub has the
//!   alignment of `T`; no heap allocation.
//! - **Unsafe is concentrated**: all uninitialized-memory handling lives in a
//!   single private slot type.
//!
//! ## Cargo features
//!
//! - `tracing`: emit `trace!` events when values are constructed or destroyed.
//! - `serde`: serialize a tub the same way as `Option<T>`.
//!
//! ## Example
//!
//! ```rust
//! use tub::Tub;
//!
//! struct Conn {
//!     port: u16,
//! }
//!
//! let mut conn: Tub<Conn> = Tub::new();
//! if !conn.is_present() {
//!     conn.construct(Conn { port: 8080 });
//! }
//! assert_eq!(conn.port, 8080);
//!
//! let failed: Result<_, &str> = conn.try_construct_with(|| Err("refused"));
//! assert_eq!(failed.err(), Some("refused"));
//! assert!(!conn.is_present());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::inline_always)]

mod raw;
pub mod tub;

pub use tub::Tub;

// Compile-time assertions for the layout guarantees.
const _: () = {
    use core::mem;

    // Storage alignment follows `T`, not a fixed default.
    assert!(mem::align_of::<Tub<u8>>() == 1);
    assert!(mem::align_of::<Tub<u16>>() == mem::align_of::<u16>());
    assert!(mem::align_of::<Tub<u64>>() == mem::align_of::<u64>());
    assert!(mem::align_of::<Tub<u128>>() == mem::align_of::<u128>());

    // The flag costs at most one alignment unit.
    assert!(mem::size_of::<Tub<u8>>() == 2);
    assert!(mem::size_of::<Tub<u64>>() == mem::size_of::<u64>() + mem::align_of::<u64>());
    assert!(mem::size_of::<Tub<(u32, u8)>>() == mem::size_of::<(u32, u8)>() + mem::align_of::<u32>());
};
