// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tuning parameters for block storage. Smaller blocks make splits and the partial copy
//! done by an insertion cheaper. Larger blocks mean fewer hops when an index is looked
//! up, and fewer allocations while growing.

use smallvec::SmallVec;

// PERF: Every block is a `[char; N]` array (4 bytes per unit), so 16 units is 64 bytes of
// payload, which fits a typical cache line.
pub const DEFAULT_BLOCK_CAPACITY: usize = 16;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
