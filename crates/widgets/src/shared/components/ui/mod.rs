pub mod badge;
pub mod tab_group;

pub use badge::Badge;
pub use tab_group::{Panel, TabGroup, TabStructureError, TitledTabGroup};
