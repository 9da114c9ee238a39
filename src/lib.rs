//! # tnum-rs: Tracked Numbers in Rust
//!
//! **`tnum-rs`** implements *tracked numbers* (tnums, also called tristate numbers): an abstract domain
//! describing sets of 64-bit integers bit by bit. It is designed for static analysis of low-level code,
//! e.g. range and alignment tracking in a bytecode verifier.
//!
//! ## What is a tnum?
//!
//! A tnum is a pair `(value, mask)`. Each bit where `mask` is 0 is **known** and equals the same bit of
//! `value`; each bit where `mask` is 1 is **unknown** and may take either value. The tnum stands for
//! every integer consistent with its known bits:
//!
//! ```text
//! (value = 0b0010, mask = 0b0001)  =  0 0 1 x  =  {2, 3}
//! ```
//!
//! Operations on tnums are **sound**: the result of `a ∘ b` contains `x ∘ y` for every member `x` of `a`
//! and every member `y` of `b`.
//!
//! ## Key Features
//!
//! - **Value Semantics**: [`Tnum`][crate::tnum::Tnum] is a `Copy` pair of words. Operations are pure
//!   functions that never allocate.
//! - **Checked Construction**: the fields are private, so a malformed pair (`value & mask != 0`) cannot
//!   be built. The completely unknown tnum is the constant [`Tnum::UNKNOWN`][crate::tnum::Tnum::UNKNOWN].
//! - **Full Algebra**: addition, subtraction, multiplication, AND, OR, XOR, logical and arithmetic shifts,
//!   plus join/intersect and 32-bit sub-register helpers.
//! - **Operators**: `+`, `-`, `*`, `&`, `|`, `^`, `<<`, `>>` all work on tnums directly.
//!
//! ## Basic Usage
//!
//! ```rust
//! use tnum_rs::tnum::Tnum;
//!
//! // {2, 3}
//! let a = Tnum::new(2, 1);
//! // {4}
//! let b = Tnum::constant(4);
//!
//! // {8, 12}
//! let p = a * b;
//! assert_eq!(p, Tnum::new(8, 4));
//! assert!(p.contains_value(8));
//! assert!(p.contains_value(12));
//!
//! // Every integer in 4..=7 is covered by 1xx.
//! let r = Tnum::range(4, 7);
//! assert_eq!(r.to_string(), "1xx");
//! assert!(r.is_aligned(1));
//! assert!(!r.is_aligned(4));
//! ```
//!
//! ## Core Components
//!
//! - **[`tnum`]**: the [`Tnum`][crate::tnum::Tnum] type, its constructors and queries.
//! - **[`arith`]**: addition, subtraction and multiplication.
//! - **[`bitwise`]**: AND, OR, XOR and shifts.
//! - **[`lattice`]**: join and intersection.
//! - **[`subreg`]**: truncation and 32-bit sub-register helpers.
//! - **[`iter`]**: enumeration of the concrete members of a tnum.
//! - **[`format`]**: the tristate binary text form (`10xx`) and its parser.
//! - **[`ops`]**: operator overloads (`+`, `-`, `*`, `&`, `|`, `^`, `<<`, `>>`).

pub mod arith;
pub mod bitwise;
pub mod format;
pub mod iter;
pub mod lattice;
pub mod ops;
pub mod subreg;
pub mod tnum;
