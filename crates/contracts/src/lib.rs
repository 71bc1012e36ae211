//! Platform-independent model behind the tab group and badge widgets.
//!
//! Nothing in here touches the DOM, so the whole crate is tested natively.

pub mod shared;
