//! # Layer 2: Façades
//!
//! The pack algorithms under flavor-specific spellings, taking literal
//! `const usize` indices:
//!
//! | Module | Holds | Spelling |
//! |--------|-------|----------|
//! | `typelivore` | type packs | aliases: `Slice<P, 1, 3>` |
//! | `varybivore` | value packs | aliases plus `UnaryMinus`, `CognateModify` |
//! | `mouldivore` | Molds | operation types: `Sliced<1, 3>`, `Flip<Op>` |
//! | `pagelivore` | Pages | operation types: `Modified<F, P>`, `Bind<Op, Q>` |
//! | `omennivore` | vessels | `Repack`, `EasyKindredRepack` |
//!
//! Indices are lifted through `Nat<N>`, generated for `0..=256`. Indices of
//! 127 or more exceed the default `recursion_limit`; raise it to 1024.

pub mod typelivore;
pub mod varybivore;
pub mod mouldivore;
pub mod pagelivore;
pub mod omennivore;
