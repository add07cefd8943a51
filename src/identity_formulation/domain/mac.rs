use crate::shared::error::FormulationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Organizationally Unique Identifier: the vendor half of a MAC address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Oui([u8; 3]);

impl Oui {
    pub fn new(octets: [u8; 3]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; 3] {
        self.0
    }
}

impl TryFrom<String> for Oui {
    type Error = FormulationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}

impl std::str::FromStr for Oui {
    type Err = FormulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormulationError::InvalidOui {
            value: s.to_string(),
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let mut octets = [0u8; 3];
        for (octet, part) in octets.iter_mut().zip(parts) {
            if part.len() != 2 {
                return Err(invalid());
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }
        Ok(Self(octets))
    }
}

impl fmt::Display for Oui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{:02x}:{:02x}:{:02x}", a, b, c)
    }
}

/// Six-octet MAC address, rendered as lowercase colon-hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .0
            .iter()
            .map(|octet| format!("{:02x}", octet))
            .collect::<Vec<_>>()
            .join(":");
        f.write_str(&rendered)
    }
}

impl Serialize for MacAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
