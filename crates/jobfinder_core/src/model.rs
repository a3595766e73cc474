use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single job listing as returned by `GET /api/jobs`.
///
/// Scraped fields may arrive as `null` or be missing; both decode to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub url: Option<String>,
    /// Server-side flag; the client's saved set takes precedence.
    #[serde(default, deserialize_with = "null_as_default")]
    pub saved: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|url| !url.trim().is_empty()))
}

/// Raised when a filter value typed by the user is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValue {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownValue {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JobSource {
    LinkedIn,
    Naukri,
    Indeed,
    Unstop,
    Adzuna,
}

impl JobSource {
    pub const ALL: [JobSource; 5] = [
        JobSource::LinkedIn,
        JobSource::Naukri,
        JobSource::Indeed,
        JobSource::Unstop,
        JobSource::Adzuna,
    ];

    /// Lowercase key used on the wire and for matching postings.
    pub fn key(self) -> &'static str {
        match self {
            JobSource::LinkedIn => "linkedin",
            JobSource::Naukri => "naukri",
            JobSource::Indeed => "indeed",
            JobSource::Unstop => "unstop",
            JobSource::Adzuna => "adzuna",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobSource::LinkedIn => "LinkedIn",
            JobSource::Naukri => "Naukri",
            JobSource::Indeed => "Indeed",
            JobSource::Unstop => "Unstop",
            JobSource::Adzuna => "Adzuna",
        }
    }
}

impl FromStr for JobSource {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        JobSource::ALL
            .into_iter()
            .find(|source| source.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownValue::new("source", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFilter {
    #[default]
    All,
    Only(JobSource),
}

impl SourceFilter {
    pub fn matches(self, posting_source: &str) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Only(source) => source.key().eq_ignore_ascii_case(posting_source.trim()),
        }
    }

    /// Wire value, or `None` for `All` (omitted from the query).
    pub fn param(self) -> Option<&'static str> {
        match self {
            SourceFilter::All => None,
            SourceFilter::Only(source) => Some(source.key()),
        }
    }
}

impl fmt::Display for SourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFilter::All => write!(f, "All Sources"),
            SourceFilter::Only(source) => write!(f, "{}", source.label()),
        }
    }
}

impl FromStr for SourceFilter {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(SourceFilter::All);
        }
        s.parse().map(SourceFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperienceBracket {
    #[default]
    Any,
    ZeroToOne,
    OneToThree,
    ThreeToFive,
    FivePlus,
}

impl ExperienceBracket {
    pub fn param(self) -> Option<&'static str> {
        match self {
            ExperienceBracket::Any => None,
            ExperienceBracket::ZeroToOne => Some("0-1"),
            ExperienceBracket::OneToThree => Some("1-3"),
            ExperienceBracket::ThreeToFive => Some("3-5"),
            ExperienceBracket::FivePlus => Some("5+"),
        }
    }
}

impl fmt::Display for ExperienceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.param() {
            Some(value) => write!(f, "{value} years"),
            None => write!(f, "Any experience"),
        }
    }
}

impl FromStr for ExperienceBracket {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" | "" => Ok(ExperienceBracket::Any),
            "0-1" => Ok(ExperienceBracket::ZeroToOne),
            "1-3" => Ok(ExperienceBracket::OneToThree),
            "3-5" => Ok(ExperienceBracket::ThreeToFive),
            "5+" => Ok(ExperienceBracket::FivePlus),
            _ => Err(UnknownValue::new("experience bracket", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    India,
    UnitedStates,
    UnitedKingdom,
    Canada,
    Australia,
    Germany,
}

const INDIA_REGIONS: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

impl Country {
    pub const ALL: [Country; 6] = [
        Country::India,
        Country::UnitedStates,
        Country::UnitedKingdom,
        Country::Canada,
        Country::Australia,
        Country::Germany,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Country::India => "IN",
            Country::UnitedStates => "US",
            Country::UnitedKingdom => "GB",
            Country::Canada => "CA",
            Country::Australia => "AU",
            Country::Germany => "DE",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Country::India => "India",
            Country::UnitedStates => "United States",
            Country::UnitedKingdom => "United Kingdom",
            Country::Canada => "Canada",
            Country::Australia => "Australia",
            Country::Germany => "Germany",
        }
    }

    /// Sub-regions selectable for this country; empty when unsupported.
    pub fn regions(self) -> &'static [&'static str] {
        match self {
            Country::India => INDIA_REGIONS,
            _ => &[],
        }
    }

    pub fn supports_regions(self) -> bool {
        !self.regions().is_empty()
    }

    /// Canonical spelling of `name` if it is a region of this country.
    pub fn canonical_region(self, name: &str) -> Option<&'static str> {
        let needle = name.trim();
        self.regions()
            .iter()
            .copied()
            .find(|region| region.eq_ignore_ascii_case(needle))
    }
}

impl FromStr for Country {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Country::ALL
            .into_iter()
            .find(|country| {
                country.code().eq_ignore_ascii_case(needle)
                    || country.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownValue::new("country", s))
    }
}

/// Country plus optional sub-region, rendered as the `where` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    country: Option<Country>,
    region: Option<&'static str>,
}

impl Location {
    pub fn country(&self) -> Option<Country> {
        self.country
    }

    pub fn region(&self) -> Option<&'static str> {
        self.region
    }

    /// Replaces the country; any previously chosen region is cleared.
    pub fn set_country(&mut self, country: Option<Country>) {
        if self.country != country {
            self.region = None;
        }
        self.country = country;
    }

    /// Returns `false` when the region is not valid for the current country.
    pub fn set_region(&mut self, region: Option<&str>) -> bool {
        let Some(name) = region else {
            self.region = None;
            return true;
        };
        match self.country.and_then(|country| country.canonical_region(name)) {
            Some(canonical) => {
                self.region = Some(canonical);
                true
            }
            None => false,
        }
    }

    pub fn param(&self) -> Option<String> {
        let country = self.country?;
        Some(match self.region {
            Some(region) if country.supports_regions() => format!("{}, {}", country.code(), region),
            _ => country.code().to_string(),
        })
    }
}
