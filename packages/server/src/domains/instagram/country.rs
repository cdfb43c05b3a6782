use std::fmt;

/// Destinations offered by the country selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Japan,
    Italy,
    Thailand,
    France,
    Mexico,
    Australia,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Japan,
        Country::Italy,
        Country::Thailand,
        Country::France,
        Country::Mexico,
        Country::Australia,
    ];

    /// Look up a country by its display name. Surrounding whitespace is
    /// ignored; the name itself must match exactly.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Country::Japan => "Japan",
            Country::Italy => "Italy",
            Country::Thailand => "Thailand",
            Country::France => "France",
            Country::Mexico => "Mexico",
            Country::Australia => "Australia",
        }
    }

    /// Hashtag searched for this country, without the leading `#`.
    pub fn hashtag(&self) -> &'static str {
        match self {
            Country::Japan => "japantravel",
            Country::Italy => "italytravel",
            Country::Thailand => "thailandtravel",
            Country::France => "francetravel",
            Country::Mexico => "mexicotravel",
            Country::Australia => "australiatravel",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Country::Japan => "🇯🇵",
            Country::Italy => "🇮🇹",
            Country::Thailand => "🇹🇭",
            Country::France => "🇫🇷",
            Country::Mexico => "🇲🇽",
            Country::Australia => "🇦🇺",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
