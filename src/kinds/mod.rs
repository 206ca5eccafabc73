//! The kind catalogue: static [`KindDef`](crate::binding::schema::KindDef)
//! tables for every supported widget kind.
//!
//! Kinds are pure data. Adding one is a schema table plus a defaults
//! constructor; no per-kind get/set code exists anywhere.

pub mod buttons;
pub mod containers;
pub mod inputs;
pub mod node_editor;
pub mod text;

pub use buttons::BUTTON;
pub use containers::{
    CHILD, GROUP, MANAGED_COLUMNS, MENU, MENU_BAR, POPUP, TAB, TAB_BAR, TOOLTIP, TREE_NODE, WINDOW,
};
pub use inputs::{
    DRAG_FLOAT, DRAG_FLOAT2, DRAG_FLOAT3, DRAG_FLOAT4, DRAG_INT, DRAG_INT2, DRAG_INT3, DRAG_INT4,
    INPUT_FLOAT, INPUT_FLOAT2, INPUT_FLOAT3, INPUT_FLOAT4, INPUT_INT, INPUT_INT2, INPUT_INT3,
    INPUT_INT4, INPUT_TEXT, SLIDER_FLOAT, SLIDER_FLOAT2, SLIDER_FLOAT3, SLIDER_FLOAT4, SLIDER_INT,
    SLIDER_INT2, SLIDER_INT3, SLIDER_INT4,
};
pub use node_editor::{NODE, NODE_ATTRIBUTE, NODE_EDITOR};
pub use text::TEXT;
