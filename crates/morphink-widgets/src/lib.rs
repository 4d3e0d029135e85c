//! Morphink Widgets
//!
//! The handle-menu interaction and layout subsystem: context-sensitive
//! popup menus that appear on hover near an editable object's edge and
//! let the user pick a tool or command without a click.
//!
//! The heart of the crate is [`ItemGroup`], an event-driven state machine
//! over an ordered set of [`HandleItem`]s. Pointer motion is classified
//! against the menu's layout axis (see [`LayoutSpec`]): motion off the
//! axis slides the menu, exits along the axis change the active item or
//! close the group at its boundary. Layout orientation and slide behavior
//! are decided by a [`LayoutPolicy`]; everything the menu cannot do alone
//! (control activation, drag and drop, dirty regions, sub-handle picking)
//! goes through the collaborator contracts in [`managers`].

pub mod config;
pub mod error;
pub mod group;
pub mod item;
pub mod layout_spec;
pub mod managers;
pub mod policy;

pub use config::{BENCHMARK_OFFSET, ITEM_SIZE, JITTER_THRESHOLD, MenuConfig, SIDE_EXIT_THRESHOLD};
pub use error::MenuError;
pub use group::ItemGroup;
pub use item::{ExitClass, HandleItem};
pub use layout_spec::{LayoutSpec, benchmark_from_hotspot};
pub use managers::{ControlActivation, DragDrop, ItemId, MenuHost};
pub use policy::LayoutPolicy;
