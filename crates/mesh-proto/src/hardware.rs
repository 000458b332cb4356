use serde::{Deserialize, Serialize};

macro_rules! hardware_models {
    ($($variant:ident = $value:literal => $name:literal,)*) => {
        /// Hardware variant reported in a node's user record.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum HardwareModel {
            $($variant,)*
            /// A value this build does not know about; kept so it re-encodes unchanged.
            Unrecognized(i32),
        }

        impl HardwareModel {
            pub fn from_i32(value: i32) -> Self {
                match value {
                    $($value => HardwareModel::$variant,)*
                    other => HardwareModel::Unrecognized(other),
                }
            }

            pub fn as_i32(self) -> i32 {
                match self {
                    $(HardwareModel::$variant => $value,)*
                    HardwareModel::Unrecognized(other) => other,
                }
            }

            /// Symbolic name as spelled in the protocol definition.
            pub fn name(self) -> &'static str {
                match self {
                    $(HardwareModel::$variant => $name,)*
                    HardwareModel::Unrecognized(_) => "UNRECOGNIZED",
                }
            }
        }
    };
}

hardware_models! {
    Unset = 0 => "UNSET",
    TloraV2 = 1 => "TLORA_V2",
    TloraV1 = 2 => "TLORA_V1",
    TloraV211p6 = 3 => "TLORA_V2_1_1p6",
    Tbeam = 4 => "TBEAM",
    HeltecV20 = 5 => "HELTEC_V2_0",
    Tbeam0p7 = 6 => "TBEAM0p7",
    TEcho = 7 => "T_ECHO",
    TloraV11p3 = 8 => "TLORA_V1_1p3",
    Rak4631 = 9 => "RAK4631",
    HeltecV21 = 10 => "HELTEC_V2_1",
    HeltecV1 = 11 => "HELTEC_V1",
    LilygoTbeamS3Core = 12 => "LILYGO_TBEAM_S3_CORE",
    Rak11200 = 13 => "RAK11200",
    NanoG1 = 14 => "NANO_G1",
    TloraV211p8 = 15 => "TLORA_V2_1_1p8",
    StationG1 = 25 => "STATION_G1",
    LoraRelayV1 = 32 => "LORA_RELAY_V1",
    Nrf52840dk = 33 => "NRF52840DK",
    Ppr = 34 => "PPR",
    Genieblocks = 35 => "GENIEBLOCKS",
    Nrf52Unknown = 36 => "NRF52_UNKNOWN",
    Portduino = 37 => "PORTDUINO",
    AndroidSim = 38 => "ANDROID_SIM",
    DiyV1 = 39 => "DIY_V1",
    Nrf52840Pca10059 = 40 => "NRF52840_PCA10059",
    DrDev = 41 => "DR_DEV",
    M5stack = 42 => "M5STACK",
    PrivateHw = 255 => "PRIVATE_HW",
}

impl Default for HardwareModel {
    fn default() -> Self {
        HardwareModel::Unset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values_map_both_ways() {
        assert_eq!(HardwareModel::from_i32(9), HardwareModel::Rak4631);
        assert_eq!(HardwareModel::Rak4631.as_i32(), 9);
        assert_eq!(HardwareModel::from_i32(255), HardwareModel::PrivateHw);
    }

    #[test]
    fn unknown_values_survive() {
        let m = HardwareModel::from_i32(1234);
        assert_eq!(m, HardwareModel::Unrecognized(1234));
        assert_eq!(m.as_i32(), 1234);
        assert_eq!(m.name(), "UNRECOGNIZED");
    }

    #[test]
    fn names_keep_protocol_spelling() {
        assert_eq!(HardwareModel::TloraV211p6.name(), "TLORA_V2_1_1p6");
        assert_eq!(HardwareModel::Unset.name(), "UNSET");
        assert_eq!(HardwareModel::default(), HardwareModel::Unset);
    }
}
