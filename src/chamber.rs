// Chamber - the request key for every fetch and cache lookup

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    pub const ALL: [Chamber; 2] = [Chamber::House, Chamber::Senate];

    /// Value of the `chamber` query parameter
    pub fn api_name(&self) -> &'static str {
        match self {
            Chamber::House => "house",
            Chamber::Senate => "senate",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Chamber::House => "US House of Representatives",
            Chamber::Senate => "US Senate",
        }
    }

    /// Full chamber size
    pub fn seats(&self) -> usize {
        match self {
            Chamber::House => 435,
            Chamber::Senate => 100,
        }
    }

    /// Row bands used by the default arc layout
    pub fn arc_rows(&self) -> usize {
        match self {
            Chamber::House => 8,
            Chamber::Senate => 4,
        }
    }

    /// Columns for the grid and split layouts
    pub fn grid_columns(&self) -> usize {
        match self {
            Chamber::House => 25,
            Chamber::Senate => 10,
        }
    }

    pub fn other(&self) -> Chamber {
        match self {
            Chamber::House => Chamber::Senate,
            Chamber::Senate => Chamber::House,
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

impl FromStr for Chamber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "house" | "h" => Ok(Chamber::House),
            "senate" | "s" => Ok(Chamber::Senate),
            other => Err(format!("unknown chamber '{}': expected house or senate", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chamber() {
        assert_eq!("house".parse::<Chamber>().unwrap(), Chamber::House);
        assert_eq!("Senate".parse::<Chamber>().unwrap(), Chamber::Senate);
        assert!("assembly".parse::<Chamber>().is_err());
    }

    #[test]
    fn test_chamber_sizes() {
        assert_eq!(Chamber::House.seats(), 435);
        assert_eq!(Chamber::Senate.seats(), 100);
        assert_eq!(Chamber::House.other(), Chamber::Senate);
    }
}
