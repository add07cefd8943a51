use crate::identity_formulation::domain::{MacAddress, MacRandomization, Oui, SerialEntropy};
use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Uuid;

/// IdentifierSynthesizer service for generating serials, MACs and tokens
///
/// Every value is drawn from the operating system's CSPRNG; there is no
/// shared state between calls and no counter or clock based fallback.
pub struct IdentifierSynthesizer;

impl IdentifierSynthesizer {
    /// `prefix` followed by an uppercase hex suffix of 4, 6 or 8 characters
    /// for low, medium and high entropy respectively
    pub fn synthesize_serial(prefix: &str, entropy: SerialEntropy) -> String {
        let mut suffix = vec![0u8; entropy.byte_len()];
        OsRng.fill_bytes(&mut suffix);
        format!("{}{}", prefix, Self::hex(&suffix, true))
    }

    /// MAC address keeping the leading OUI octets the mode preserves and
    /// randomizing the rest
    pub fn synthesize_mac(oui: &Oui, mode: MacRandomization) -> MacAddress {
        let mut octets: [u8; 6] = Self::secure_bytes();
        let preserved = mode.preserved_octets();
        octets[..preserved].copy_from_slice(&oui.octets()[..preserved]);
        MacAddress::new(octets)
    }

    /// 32 lowercase hex characters, machine-id style
    pub fn synthesize_uuid_token() -> String {
        Uuid::from_bytes(Self::secure_bytes()).simple().to_string()
    }

    /// 32 lowercase hex characters grouped 8-4-4-4-12, boot-id style
    pub fn synthesize_dashed_token() -> String {
        Uuid::from_bytes(Self::secure_bytes())
            .hyphenated()
            .to_string()
    }

    /// Four lowercase hex characters used to disambiguate hostnames and profile names
    pub fn synthesize_short_suffix() -> String {
        let bytes: [u8; 2] = Self::secure_bytes();
        Self::hex(&bytes, false)
    }

    fn secure_bytes<const N: usize>() -> [u8; N] {
        let mut bytes = [0u8; N];
        OsRng.fill_bytes(&mut bytes);
        bytes
    }

    fn hex(bytes: &[u8], uppercase: bool) -> String {
        bytes
            .iter()
            .map(|byte| {
                if uppercase {
                    format!("{:02X}", byte)
                } else {
                    format!("{:02x}", byte)
                }
            })
            .collect()
    }
}
