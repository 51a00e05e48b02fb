use crate::error::DeviceError;
use std::fmt;
use std::str::FromStr;

/// Static capability descriptor for a playback device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceCapability {
    pub display_name: &'static str,
    /// Coarse GPU class, 0 (none) to 4 (high-end discrete).
    pub gpu_tier: u8,
    /// Hardware decode for the advanced (VVC) codec.
    pub supports_advanced_codec: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Mobile,
    Tablet,
    Laptop,
    Desktop,
}

const MOBILE: DeviceCapability = DeviceCapability {
    display_name: "iPhone 15 Pro",
    gpu_tier: 2,
    supports_advanced_codec: false,
};
const TABLET: DeviceCapability = DeviceCapability {
    display_name: "iPad Pro M2",
    gpu_tier: 2,
    supports_advanced_codec: false,
};
const LAPTOP: DeviceCapability = DeviceCapability {
    display_name: "RTX 4060 Laptop",
    gpu_tier: 3,
    supports_advanced_codec: true,
};
const DESKTOP: DeviceCapability = DeviceCapability {
    display_name: "High Performance Desktop",
    gpu_tier: 4,
    supports_advanced_codec: true,
};

impl DeviceKind {
    pub const ALL: [DeviceKind; 4] = [
        DeviceKind::Mobile,
        DeviceKind::Tablet,
        DeviceKind::Laptop,
        DeviceKind::Desktop,
    ];

    /// Registry lookup; the table is fixed at compile time.
    #[inline]
    pub fn capability(self) -> &'static DeviceCapability {
        match self {
            DeviceKind::Mobile => &MOBILE,
            DeviceKind::Tablet => &TABLET,
            DeviceKind::Laptop => &LAPTOP,
            DeviceKind::Desktop => &DESKTOP,
        }
    }

    /// Key used by the `<select>` options and the CLI.
    pub fn key(self) -> &'static str {
        match self {
            DeviceKind::Mobile => "mobile",
            DeviceKind::Tablet => "tablet",
            DeviceKind::Laptop => "laptop",
            DeviceKind::Desktop => "desktop",
        }
    }
}

impl Default for DeviceKind {
    fn default() -> Self {
        DeviceKind::Desktop
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for DeviceKind {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mobile" => Ok(DeviceKind::Mobile),
            "tablet" => Ok(DeviceKind::Tablet),
            "laptop" => Ok(DeviceKind::Laptop),
            "desktop" => Ok(DeviceKind::Desktop),
            other => Err(DeviceError::UnknownDevice(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for kind in DeviceKind::ALL {
            assert_eq!(kind.key().parse::<DeviceKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(
            "phablet".parse::<DeviceKind>(),
            Err(DeviceError::UnknownDevice("phablet".into()))
        );
    }

    #[test]
    fn only_laptop_and_desktop_clear_the_l2_gpu_bar() {
        let capable: Vec<_> = DeviceKind::ALL
            .iter()
            .filter(|k| k.capability().gpu_tier >= 3)
            .map(|k| k.key())
            .collect();
        assert_eq!(capable, ["laptop", "desktop"]);
    }
}
