//! Marketplace platforms and cargo carriers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Marketplaces the fleet integrates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    Trendyol,
    Hepsiburada,
    N11,
    Amazon,
    Ciceksepeti,
    Pazarama,
}

impl Platform {
    /// Return the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trendyol => "TRENDYOL",
            Self::Hepsiburada => "HEPSIBURADA",
            Self::N11 => "N11",
            Self::Amazon => "AMAZON",
            Self::Ciceksepeti => "CICEKSEPETI",
            Self::Pazarama => "PAZARAMA",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRENDYOL" => Ok(Self::Trendyol),
            "HEPSIBURADA" => Ok(Self::Hepsiburada),
            "N11" => Ok(Self::N11),
            "AMAZON" => Ok(Self::Amazon),
            "CICEKSEPETI" => Ok(Self::Ciceksepeti),
            "PAZARAMA" => Ok(Self::Pazarama),
            _ => Err(AppError::validation(format!("Unknown platform: '{s}'"))),
        }
    }
}

/// Cargo carriers seen on marketplace orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Carrier {
    HepsiJet,
    Aras,
    Yurtici,
    Mng,
    Ptt,
    Surat,
    Ups,
    Sendeo,
    KolayGelsin,
    TrendyolExpress,
}

impl Carrier {
    /// Return the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HepsiJet => "HEPSI_JET",
            Self::Aras => "ARAS",
            Self::Yurtici => "YURTICI",
            Self::Mng => "MNG",
            Self::Ptt => "PTT",
            Self::Surat => "SURAT",
            Self::Ups => "UPS",
            Self::Sendeo => "SENDEO",
            Self::KolayGelsin => "KOLAY_GELSIN",
            Self::TrendyolExpress => "TRENDYOL_EXPRESS",
        }
    }

    /// Parse a carrier code as written by the marketplaces.
    ///
    /// Matching ignores case, spaces, dashes and underscores, so
    /// `"HepsiJet"`, `"hepsi-jet"` and `"HEPSI_JET"` are all accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized: String = code
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "HEPSIJET" => Some(Self::HepsiJet),
            "ARAS" | "ARASKARGO" => Some(Self::Aras),
            "YURTICI" | "YURTICIKARGO" => Some(Self::Yurtici),
            "MNG" | "MNGKARGO" => Some(Self::Mng),
            "PTT" | "PTTKARGO" => Some(Self::Ptt),
            "SURAT" | "SURATKARGO" => Some(Self::Surat),
            "UPS" => Some(Self::Ups),
            "SENDEO" => Some(Self::Sendeo),
            "KOLAYGELSIN" => Some(Self::KolayGelsin),
            "TRENDYOLEXPRESS" | "TEX" => Some(Self::TrendyolExpress),
            _ => None,
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
