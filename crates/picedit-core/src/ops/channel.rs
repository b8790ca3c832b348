//! Single color channel isolation.

use std::fmt;
use std::str::FromStr;

use crate::picture::Picture;

/// One of the three color channels of an RGB picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Byte offset of this channel within an RGB pixel.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Channel::Red),
            "green" | "g" => Ok(Channel::Green),
            "blue" | "b" => Ok(Channel::Blue),
            other => Err(format!("unknown channel: {other}")),
        }
    }
}

/// Keep only `channel`, zeroing the other two components of every pixel.
pub fn isolate_channel(image: &Picture, channel: Channel) -> Picture {
    let keep = channel.offset();
    let mut pixels = vec![0u8; image.pixels.len()];

    for (dst, src) in pixels
        .chunks_exact_mut(3)
        .zip(image.pixels.chunks_exact(3))
    {
        dst[keep] = src[keep];
    }

    Picture::new(image.width, image.height, pixels)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn picture_strategy() -> impl Strategy<Value = Picture> {
        (1u32..=16, 1u32..=16).prop_flat_map(|(w, h)| {
            let size = (w * h * 3) as usize;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |pixels| Picture::new(w, h, pixels))
        })
    }

    fn channel_strategy() -> impl Strategy<Value = Channel> {
        prop_oneof![Just(Channel::Red), Just(Channel::Green), Just(Channel::Blue)]
    }

    proptest! {
        /// Property: isolating a channel twice gives the same result.
        #[test]
        fn prop_isolation_idempotent(img in picture_strategy(), channel in channel_strategy()) {
            let once = isolate_channel(&img, channel);
            let twice = isolate_channel(&once, channel);
            prop_assert_eq!(once, twice);
        }

        /// Property: the kept channel equals the source channel.
        #[test]
        fn prop_kept_channel_copied(img in picture_strategy(), channel in channel_strategy()) {
            let out = isolate_channel(&img, channel);
            let k = channel.offset();
            for (dst, src) in out.pixels.chunks_exact(3).zip(img.pixels.chunks_exact(3)) {
                prop_assert_eq!(dst[k], src[k]);
                for other in (0..3).filter(|&i| i != k) {
                    prop_assert_eq!(dst[other], 0);
                }
            }
        }
    }
}
