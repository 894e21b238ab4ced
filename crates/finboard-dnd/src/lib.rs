//! Drag classification for the finboard dashboard core.
//!
//! Given the two endpoints of a finished drag gesture, decide which single
//! domain-store operation the gesture triggers. The router is independent
//! of any particular drag library: the runtime only has to supply
//! [`DragNode`] descriptors at gesture end.

pub mod descriptor;
pub mod router;

pub use descriptor::DragNode;
pub use router::{classify, handle_drag_end};
