use crate::constants::*;
use crate::device::DeviceCapability;
use std::fmt;

/// Discrete quality tier; drives which render and filter branch runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    L1,
    L1Plus,
    L2,
}

impl Layer {
    pub fn label(self) -> &'static str {
        match self {
            Layer::L1 => "L1",
            Layer::L1Plus => "L1+",
            Layer::L2 => "L2",
        }
    }

    #[inline]
    pub fn is_high_fidelity(self) -> bool {
        self == Layer::L2
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Playback plan for one frame. Labels are cosmetic; no codec work happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strategy {
    pub layer: Layer,
    pub quality_label: &'static str,
    pub fps: u32,
    pub bitrate_label: &'static str,
    pub codec_label: &'static str,
}

pub const STRATEGY_4K_HDR: Strategy = Strategy {
    layer: Layer::L2,
    quality_label: "4K HDR",
    fps: 120,
    bitrate_label: "50 Mbps",
    codec_label: "VVC",
};
pub const STRATEGY_1440P: Strategy = Strategy {
    layer: Layer::L2,
    quality_label: "1440p",
    fps: 60,
    bitrate_label: "15 Mbps",
    codec_label: "AV1 Ultra",
};
pub const STRATEGY_1080P: Strategy = Strategy {
    layer: Layer::L1Plus,
    quality_label: "1080p",
    fps: 60,
    bitrate_label: "8 Mbps",
    codec_label: "AV1 + AI",
};
pub const STRATEGY_720P: Strategy = Strategy {
    layer: Layer::L1,
    quality_label: "720p",
    fps: 30,
    bitrate_label: "2.5 Mbps",
    codec_label: "AV1",
};
pub const STRATEGY_480P: Strategy = Strategy {
    layer: Layer::L1,
    quality_label: "480p",
    fps: 24,
    bitrate_label: "0.8 Mbps",
    codec_label: "AV1 Low",
};

/// Every tier `select_strategy` can return, best first.
pub const ALL_STRATEGIES: [Strategy; 5] = [
    STRATEGY_4K_HDR,
    STRATEGY_1440P,
    STRATEGY_1080P,
    STRATEGY_720P,
    STRATEGY_480P,
];

/// Map bandwidth and device capability to a tier.
///
/// Branches are evaluated in descending threshold order and the first match
/// wins. There is no range guard: negative and NaN bandwidths fall through to
/// the lowest tier, huge values are capped only by the device gates.
pub fn select_strategy(bandwidth_mbps: f64, device: &DeviceCapability) -> Strategy {
    let has_gpu = device.gpu_tier >= MIN_GPU_TIER_FOR_L2;
    if bandwidth_mbps >= BW_ULTRA_MBPS && device.supports_advanced_codec && has_gpu {
        STRATEGY_4K_HDR
    } else if bandwidth_mbps >= BW_HIGH_MBPS && has_gpu {
        STRATEGY_1440P
    } else if bandwidth_mbps >= BW_ENHANCED_MBPS {
        STRATEGY_1080P
    } else if bandwidth_mbps >= BW_STANDARD_MBPS {
        STRATEGY_720P
    } else {
        STRATEGY_480P
    }
}
