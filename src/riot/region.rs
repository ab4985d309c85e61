use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Regional routing values for Riot API (Account-v1, Match-v5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Asia,
    Europe,
    Sea,
}

impl Region {
    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::Sea => "sea",
        }
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "americas" => Ok(Self::Americas),
            "asia" => Ok(Self::Asia),
            "europe" => Ok(Self::Europe),
            "sea" => Ok(Self::Sea),
            _ => Err(AppError::InvalidRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_regions_case_insensitively() {
        assert_eq!("europe".parse::<Region>().unwrap(), Region::Europe);
        assert_eq!("AMERICAS".parse::<Region>().unwrap(), Region::Americas);
    }

    #[test]
    fn rejects_unknown_region() {
        assert!(matches!(
            "euw".parse::<Region>(),
            Err(AppError::InvalidRegion(_))
        ));
    }

    #[test]
    fn base_url_uses_routing_value() {
        assert_eq!(
            Region::Europe.base_url(),
            "https://europe.api.riotgames.com"
        );
    }
}
