//! Pointer interaction for drag controls.
//!
//! Controls register hit areas while rendering; the [`PointerRouter`] uses
//! them to address terminal mouse events to the right control.

pub mod hit_area;
pub mod pointer_router;

pub use hit_area::{HitArea, HitAreaRegistry};
pub use pointer_router::{PointerRouter, Route};
