#![forbid(unsafe_code)]

//! Micro-widgets for toys.
//!
//! # Role in toys
//! `toys-widgets` defines the [`Toy`] contract and the small set of
//! combinators every widget is assembled from. Each combinator does one
//! thing: fill, move, resize, align, split, react, label, or follow state.
//!
//! # Primary responsibilities
//! - **Toy**: measure/paint/handle, implemented by concrete nodes and by
//!   boxed or shared type-erased handles.
//! - **Combinators**: `Rect`, `At`, `Sz`, `Lay`, `Split`, `On`, `Text`, `Bind`.
//! - **Facade**: `Toys<C, M>` builds any combinator under a memory policy;
//!   `flat` builds them by value without naming the canvas.
//!
//! # Coordinate discipline
//! Combinators that move a child hold a `Translation` guard on the canvas
//! or event only while the child runs. The frame a caller passes in is the
//! frame it gets back, whether the child returns, fails or panics.

pub mod bind;
pub mod facade;
pub mod flat;
pub mod on;
pub mod place;
pub mod rect;
pub mod split;
pub mod text;
pub mod toy;

pub use bind::Bind;
pub use facade::{Boxed, Flat, Memory, Owned, Rced, Shared, Toys, Value};
pub use on::On;
pub use place::{At, Lay, Sz};
pub use rect::Rect;
pub use split::{Split, SplitLayout};
pub use text::Text;
pub use toy::{OwnedToy, SharedToy, Toy, owned_toy, shared_toy};
