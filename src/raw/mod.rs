//! Centralized unsafe storage for the tub layer.
//!
//! This module concentrates every `ptr::*` / `MaybeUninit` operation used by
//! [`Tub`](crate::Tub). Higher layers call the small surface on [`Slot`] and
//! never touch uninitialized memory directly.
//!
//! ## Core invariant
//! A slot's `value` is initialized *exactly when* its `occupied` flag is set.
//! Every method here either preserves that or documents the caller's part of it.

pub(crate) mod slot;

pub(crate) use slot::Slot;
