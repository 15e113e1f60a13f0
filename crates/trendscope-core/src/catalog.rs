//! Per-industry vocabulary used by record generation: trend names, hashtags
//! and the growth-rate range each industry draws from.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::Industry;
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryProfile {
    pub industry: Industry,
    pub trends: Vec<String>,
    pub hashtags: Vec<String>,
    /// Inclusive `[low, high]` growth-rate percentage range.
    pub growth_range: (f64, f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryCatalog {
    pub industries: Vec<IndustryProfile>,
}

type BuiltinEntry = (Industry, &'static [&'static str], &'static [&'static str], (f64, f64));

const BUILTIN: &[BuiltinEntry] = &[
    (
        Industry::Technology,
        &["AI Ethics", "Web3", "Quantum Computing", "AR Experiences", "Green Tech"],
        &["#AI", "#Tech", "#Innovation", "#Web3", "#SmartHome", "#5G", "#MachineLearning"],
        (5.0, 25.0),
    ),
    (
        Industry::Fashion,
        &["Sustainable Fashion", "Y2K Revival", "Gender-Neutral", "Vintage", "Upcycling"],
        &["#OOTD", "#Fashion", "#Vintage", "#Sustainable", "#StyleTips", "#FashionWeek"],
        (8.0, 30.0),
    ),
    (
        Industry::Entertainment,
        &[
            "Streaming Exclusives",
            "Interactive Content",
            "Comeback Tours",
            "Fan Edits",
            "Character Analysis",
        ],
        &["#Netflix", "#MovieNight", "#NewMusic", "#Premiere", "#MustWatch", "#TVShow"],
        (10.0, 35.0),
    ),
    (
        Industry::Food,
        &["Plant-Based Recipes", "Food Fusion", "Local Sourcing", "Cloud Kitchens", "Food Reels"],
        &["#Foodie", "#Recipes", "#Cooking", "#Vegan", "#FoodPhotography", "#HomeCooking"],
        (4.0, 18.0),
    ),
    (
        Industry::Travel,
        &["Off-Grid Travel", "Workations", "Sustainable Tourism", "Virtual Tours", "Solo Travel"],
        &["#Travel", "#Wanderlust", "#Vacation", "#TravelTips", "#Adventure", "#Explore"],
        (6.0, 22.0),
    ),
    (
        Industry::Fitness,
        &[
            "Home Workouts",
            "Mental Fitness",
            "Hybrid Gyms",
            "Recovery Focus",
            "Community Challenges",
        ],
        &["#Fitness", "#Workout", "#HealthyLifestyle", "#Exercise", "#FitnessGoals", "#ActiveLife"],
        (7.0, 24.0),
    ),
    (
        Industry::Beauty,
        &[
            "Clean Beauty",
            "Skincare Tech",
            "Inclusive Products",
            "Male Beauty",
            "Beauty Subscriptions",
        ],
        &["#BeautyTips", "#Skincare", "#Makeup", "#BeautyHacks", "#Cosmetics", "#SelfCare"],
        (9.0, 28.0),
    ),
    (
        Industry::Business,
        &["Remote Work", "ESG Investing", "Creator Economy", "NFT Business", "Direct-to-Consumer"],
        &["#Business", "#Entrepreneur", "#Marketing", "#StartUp", "#Leadership", "#Strategy"],
        (3.0, 15.0),
    ),
    (
        Industry::Education,
        &["Microlearning", "EdTech", "Skill Certificates", "Cohort Learning", "Education Pods"],
        &["#Education", "#Learning", "#StudentLife", "#Study", "#OnlineLearning", "#TeacherLife"],
        (2.0, 12.0),
    ),
];

impl IndustryCatalog {
    /// The vocabulary the dashboard ships with: nine industries, five trends
    /// each, six or seven hashtags each.
    #[must_use]
    pub fn builtin() -> Self {
        let industries = BUILTIN
            .iter()
            .map(|&(industry, trends, hashtags, growth_range)| IndustryProfile {
                industry,
                trends: trends.iter().map(ToString::to_string).collect(),
                hashtags: hashtags.iter().map(ToString::to_string).collect(),
                growth_range,
            })
            .collect();
        Self { industries }
    }

    #[must_use]
    pub fn profile(&self, industry: Industry) -> Option<&IndustryProfile> {
        self.industries.iter().find(|p| p.industry == industry)
    }

    /// Find which industry's vocabulary contains `trend`.
    #[must_use]
    pub fn industry_of_trend(&self, trend: &str) -> Option<Industry> {
        self.industries
            .iter()
            .find(|p| p.trends.iter().any(|t| t == trend))
            .map(|p| p.industry)
    }
}

impl Default for IndustryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Load and validate an industry catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<IndustryCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_catalog(&content)
}

/// Parse and validate an industry catalog from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text cannot be parsed or fails validation.
pub fn parse_catalog(yaml: &str) -> Result<IndustryCatalog, ConfigError> {
    let catalog: IndustryCatalog = serde_yaml::from_str(yaml)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

fn validate_catalog(catalog: &IndustryCatalog) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for profile in &catalog.industries {
        let name = profile.industry;

        if !seen.insert(name) {
            return Err(ConfigError::Validation(format!(
                "duplicate industry: '{name}'"
            )));
        }

        if profile.trends.is_empty() {
            return Err(ConfigError::Validation(format!(
                "industry '{name}' must list at least one trend"
            )));
        }

        if profile.trends.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "industry '{name}' has a blank trend"
            )));
        }

        if profile.hashtags.is_empty() {
            return Err(ConfigError::Validation(format!(
                "industry '{name}' must list at least one hashtag"
            )));
        }

        if let Some(bad) = profile.hashtags.iter().find(|h| !is_hashtag(h)) {
            return Err(ConfigError::Validation(format!(
                "industry '{name}' has invalid hashtag '{bad}'; must start with '#'"
            )));
        }

        let (low, high) = profile.growth_range;
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(ConfigError::Validation(format!(
                "industry '{name}' has invalid growth range [{low}, {high}]"
            )));
        }
    }

    let missing: Vec<&str> = Industry::ALL
        .iter()
        .filter(|i| !seen.contains(*i))
        .map(|i| i.as_str())
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::Validation(format!(
            "catalog is missing industries: {}",
            missing.join(", ")
        )));
    }

    Ok(())
}

fn is_hashtag(tag: &str) -> bool {
    tag.len() > 1 && tag.starts_with('#') && !tag.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_yaml() -> String {
        serde_yaml::to_string(&IndustryCatalog::builtin()).unwrap()
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(catalog.industries.len(), Industry::ALL.len());
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn builtin_catalog_growth_ranges_match_industry() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(
            catalog.profile(Industry::Entertainment).unwrap().growth_range,
            (10.0, 35.0)
        );
        assert_eq!(
            catalog.profile(Industry::Education).unwrap().growth_range,
            (2.0, 12.0)
        );
    }

    #[test]
    fn industry_of_trend_finds_owner() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(
            catalog.industry_of_trend("AI Ethics"),
            Some(Industry::Technology)
        );
        assert_eq!(catalog.industry_of_trend("Bread Baking"), None);
    }

    #[test]
    fn parse_catalog_accepts_serialized_builtin() {
        let parsed = parse_catalog(&builtin_yaml()).unwrap();
        assert_eq!(parsed, IndustryCatalog::builtin());
    }

    #[test]
    fn parse_catalog_rejects_missing_industry() {
        let mut catalog = IndustryCatalog::builtin();
        catalog.industries.retain(|p| p.industry != Industry::Food);
        let yaml = serde_yaml::to_string(&catalog).unwrap();
        let err = parse_catalog(&yaml).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.contains("Food")),
            "expected missing Food, got: {err:?}"
        );
    }

    #[test]
    fn parse_catalog_rejects_duplicate_industry() {
        let mut catalog = IndustryCatalog::builtin();
        let dup = catalog.industries[0].clone();
        catalog.industries.push(dup);
        let yaml = serde_yaml::to_string(&catalog).unwrap();
        let err = parse_catalog(&yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate")));
    }

    #[test]
    fn parse_catalog_rejects_inverted_growth_range() {
        let mut catalog = IndustryCatalog::builtin();
        catalog.industries[1].growth_range = (30.0, 8.0);
        let yaml = serde_yaml::to_string(&catalog).unwrap();
        let err = parse_catalog(&yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("growth range")));
    }

    #[test]
    fn parse_catalog_rejects_bare_hashtag() {
        let mut catalog = IndustryCatalog::builtin();
        catalog.industries[2].hashtags.push("NoHash".to_string());
        let yaml = serde_yaml::to_string(&catalog).unwrap();
        let err = parse_catalog(&yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("NoHash")));
    }

    #[test]
    fn parse_catalog_rejects_empty_trends() {
        let mut catalog = IndustryCatalog::builtin();
        catalog.industries[3].trends.clear();
        let yaml = serde_yaml::to_string(&catalog).unwrap();
        let err = parse_catalog(&yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("trend")));
    }

    #[test]
    fn parse_catalog_rejects_blank_trend_among_real_ones() {
        let mut catalog = IndustryCatalog::builtin();
        catalog.industries[4].trends.push("   ".to_string());
        let yaml = serde_yaml::to_string(&catalog).unwrap();
        let err = parse_catalog(&yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("blank trend")));
    }

    #[test]
    fn parse_catalog_reports_yaml_errors() {
        let err = parse_catalog("industries: [ {industry: Nope} ]").unwrap_err();
        assert!(matches!(err, ConfigError::CatalogFileParse(_)));
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::CatalogFileIo { .. }));
    }
}
