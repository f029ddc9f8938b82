/// Visibility channel masks.
///
/// A channel mask is attached to every light; render passes query the
/// aggregated state with a mask of their own, and only lights whose masks
/// intersect the query mask illuminate the geometry of that pass. This is
/// the mechanism behind layered and multi-pass lighting.

use bitflags::bitflags;

bitflags! {
    /// Bit set over 32 visibility channels.
    ///
    /// Lights default to channel 0. A mask with several bits set belongs
    /// to (or queries) several channels at once; the empty mask never
    /// passes any channel test.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChannelMask: u32 {
        /// Channel 0, the default channel every light starts on
        const DEFAULT = 1;
    }
}

impl ChannelMask {
    /// Mask with only the given channel set.
    ///
    /// # Arguments
    ///
    /// * `index` - Channel index, 0..=31
    pub fn channel(index: u32) -> Self {
        debug_assert!(index < 32, "channel index out of range: {}", index);
        Self::from_bits_retain(1 << index)
    }

    /// Test whether this mask and `other` share at least one channel.
    pub fn test(self, other: ChannelMask) -> bool {
        self.intersects(other)
    }

    /// Integer mask value, as folded into filtered-state hashes.
    pub fn mask(self) -> u32 {
        self.bits()
    }
}

impl Default for ChannelMask {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
