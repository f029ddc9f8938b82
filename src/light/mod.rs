//! Scene-facing light types
//!
//! Provides the light data model (tagged variants over the six supported
//! light types), the visibility channel mask, shadow configuration, and
//! the slotmap-backed light storage issuing stable identities.

mod channel;
mod shadow;
mod light;
mod light_list;

pub use channel::ChannelMask;
pub use shadow::{LightShadow, ShadowMapHandle};
pub use light::{Light, LightKind};
pub use light_list::{LightList, LightKey};
