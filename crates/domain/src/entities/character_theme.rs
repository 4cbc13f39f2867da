//! CharacterTheme entity - bespoke visual styling for a narrative location
//!
//! A theme bundles the palette, gradients, and ambient effects the wiki uses
//! when rendering pages that belong to a location. Effect strengths are
//! normalized floats; the authored values are kept as written and clamped on
//! read, so a content typo degrades to the nearest valid value instead of a
//! broken render.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Lower bound for particle intensity and speed.
pub const MIN_EFFECT_STRENGTH: f32 = 0.05;
/// Upper bound for particle intensity and speed.
pub const MAX_EFFECT_STRENGTH: f32 = 2.0;

fn clamp_normalized(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

fn check_range(field: &str, value: f32, min: f32, max: f32) -> Result<(), DomainError> {
    if value.is_nan() || value < min || value > max {
        return Err(DomainError::validation(format!(
            "{} must be within [{}, {}], got {}",
            field, min, max, value
        )));
    }
    Ok(())
}

fn check_color(field: &str, value: &str) -> Result<(), DomainError> {
    let hex = value.strip_prefix('#').unwrap_or("");
    let valid_len = matches!(hex.len(), 3 | 6 | 8);
    if !valid_len || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DomainError::validation(format!(
            "{} is not a hex color: {:?}",
            field, value
        )));
    }
    Ok(())
}

/// The six named colors of a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
}

impl ColorPalette {
    /// Named colors in declaration order
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("surface", &self.surface),
            ("text", &self.text),
        ]
    }
}

/// The three named CSS gradients of a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientSet {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// Ambient particle effect drawn behind location pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParticleType {
    Flow,
    Sparkle,
    Wave,
    Orb,
    Radio,
    Speed,
    Clock,
    Lightning,
    #[default]
    None,
}

impl ParticleType {
    pub const ALL: [ParticleType; 9] = [
        Self::Flow,
        Self::Sparkle,
        Self::Wave,
        Self::Orb,
        Self::Radio,
        Self::Speed,
        Self::Clock,
        Self::Lightning,
        Self::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::Sparkle => "sparkle",
            Self::Wave => "wave",
            Self::Orb => "orb",
            Self::Radio => "radio",
            Self::Speed => "speed",
            Self::Clock => "clock",
            Self::Lightning => "lightning",
            Self::None => "none",
        }
    }
}

impl fmt::Display for ParticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ParticleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| DomainError::parse(format!("Unknown particle type: {}", s)))
    }
}

/// Background pattern overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Geometric,
    Organic,
    Energy,
    #[default]
    None,
}

impl PatternType {
    pub const ALL: [PatternType; 4] = [Self::Geometric, Self::Organic, Self::Energy, Self::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Geometric => "geometric",
            Self::Organic => "organic",
            Self::Energy => "energy",
            Self::None => "none",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PatternType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| DomainError::parse(format!("Unknown pattern type: {}", s)))
    }
}

/// Particle effect settings as authored.
///
/// Read through the accessors, which clamp to the documented ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleConfig {
    #[serde(rename = "type")]
    kind: ParticleType,
    color: String,
    intensity: f32,
    speed: f32,
    count: u32,
}

impl ParticleConfig {
    pub fn new(
        kind: ParticleType,
        color: impl Into<String>,
        intensity: f32,
        speed: f32,
        count: u32,
    ) -> Self {
        Self {
            kind,
            color: color.into(),
            intensity,
            speed,
            count,
        }
    }

    /// No particles.
    pub fn none() -> Self {
        Self::new(ParticleType::None, "#000000", MIN_EFFECT_STRENGTH, MIN_EFFECT_STRENGTH, 0)
    }

    pub fn kind(&self) -> ParticleType {
        self.kind
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Intensity clamped to [`MIN_EFFECT_STRENGTH`], [`MAX_EFFECT_STRENGTH`].
    pub fn intensity(&self) -> f32 {
        clamp_normalized(self.intensity, MIN_EFFECT_STRENGTH, MAX_EFFECT_STRENGTH)
    }

    /// Speed clamped to [`MIN_EFFECT_STRENGTH`], [`MAX_EFFECT_STRENGTH`].
    pub fn speed(&self) -> f32 {
        clamp_normalized(self.speed, MIN_EFFECT_STRENGTH, MAX_EFFECT_STRENGTH)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Check the authored (unclamped) values.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_color("particles.color", &self.color)?;
        check_range(
            "particles.intensity",
            self.intensity,
            MIN_EFFECT_STRENGTH,
            MAX_EFFECT_STRENGTH,
        )?;
        check_range(
            "particles.speed",
            self.speed,
            MIN_EFFECT_STRENGTH,
            MAX_EFFECT_STRENGTH,
        )
    }
}

/// Pattern overlay settings as authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternConfig {
    #[serde(rename = "type")]
    kind: PatternType,
    opacity: f32,
}

impl PatternConfig {
    pub fn new(kind: PatternType, opacity: f32) -> Self {
        Self { kind, opacity }
    }

    pub fn none() -> Self {
        Self::new(PatternType::None, 0.0)
    }

    pub fn kind(&self) -> PatternType {
        self.kind
    }

    /// Opacity clamped to [0, 1].
    pub fn opacity(&self) -> f32 {
        clamp_normalized(self.opacity, 0.0, 1.0)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        check_range("patterns.opacity", self.opacity, 0.0, 1.0)
    }
}

/// Visual theme for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterTheme {
    /// Location slug the theme is registered under (e.g. "the-bloxiverse")
    pub location_id: String,
    /// Human-readable location name
    pub name: String,
    pub colors: ColorPalette,
    pub gradients: GradientSet,
    pub particles: ParticleConfig,
    pub patterns: PatternConfig,
}

impl CharacterTheme {
    pub fn new(
        location_id: impl Into<String>,
        name: impl Into<String>,
        colors: ColorPalette,
        gradients: GradientSet,
    ) -> Self {
        Self {
            location_id: location_id.into(),
            name: name.into(),
            colors,
            gradients,
            particles: ParticleConfig::none(),
            patterns: PatternConfig::none(),
        }
    }

    pub fn with_particles(mut self, particles: ParticleConfig) -> Self {
        self.particles = particles;
        self
    }

    pub fn with_patterns(mut self, patterns: PatternConfig) -> Self {
        self.patterns = patterns;
        self
    }

    /// Check authored values against their documented ranges.
    ///
    /// Out-of-range values are content bugs; readers are already protected by
    /// clamping, so this is for tooling and tests.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.location_id.trim().is_empty() {
            return Err(DomainError::validation("theme location id cannot be empty"));
        }
        for (field, color) in self.colors.entries() {
            check_color(&format!("colors.{}", field), color)?;
        }
        self.particles.validate()?;
        self.patterns.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> ColorPalette {
        ColorPalette {
            primary: "#112233".into(),
            secondary: "#445566".into(),
            accent: "#778899".into(),
            background: "#000000".into(),
            surface: "#101010".into(),
            text: "#ffffff".into(),
        }
    }

    fn gradients() -> GradientSet {
        GradientSet {
            primary: "linear-gradient(135deg, #112233 0%, #445566 100%)".into(),
            secondary: "linear-gradient(180deg, #000000 0%, #101010 100%)".into(),
            accent: "radial-gradient(circle, #778899 0%, transparent 70%)".into(),
        }
    }

    #[test]
    fn test_particle_accessors_clamp() {
        let particles = ParticleConfig::new(ParticleType::Orb, "#ffffff", 5.0, -1.0, 40);
        assert_eq!(particles.intensity(), MAX_EFFECT_STRENGTH);
        assert_eq!(particles.speed(), MIN_EFFECT_STRENGTH);
        assert!(particles.validate().is_err());
    }

    #[test]
    fn test_nan_reads_as_minimum() {
        let particles = ParticleConfig::new(ParticleType::Wave, "#ffffff", f32::NAN, 1.0, 10);
        assert_eq!(particles.intensity(), MIN_EFFECT_STRENGTH);
        let pattern = PatternConfig::new(PatternType::Energy, f32::NAN);
        assert_eq!(pattern.opacity(), 0.0);
        assert!(pattern.validate().is_err());
    }

    #[test]
    fn test_pattern_opacity_clamps_to_unit_interval() {
        assert_eq!(PatternConfig::new(PatternType::Organic, 1.4).opacity(), 1.0);
        assert_eq!(PatternConfig::new(PatternType::Organic, -0.2).opacity(), 0.0);
        assert_eq!(PatternConfig::new(PatternType::Organic, 0.3).opacity(), 0.3);
    }

    #[test]
    fn test_theme_validate() {
        let theme = CharacterTheme::new("somewhere", "Somewhere", palette(), gradients())
            .with_particles(ParticleConfig::new(ParticleType::Flow, "#aabbcc", 1.0, 0.5, 30))
            .with_patterns(PatternConfig::new(PatternType::Geometric, 0.2));
        assert!(theme.validate().is_ok());

        let mut bad = theme.clone();
        bad.colors.accent = "teal".into();
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("colors.accent"));
    }

    #[test]
    fn test_type_names_round_trip_through_serde() {
        let particles = ParticleConfig::new(ParticleType::Lightning, "#fff", 1.0, 1.0, 5);
        let json = serde_json::to_value(&particles).unwrap();
        assert_eq!(json["type"], "lightning");

        let parsed: PatternConfig =
            serde_json::from_str(r#"{"type":"organic","opacity":0.4}"#).unwrap();
        assert_eq!(parsed.kind(), PatternType::Organic);

        let plaid = serde_json::from_str::<PatternConfig>(r#"{"type":"plaid","opacity":0.4}"#);
        assert!(plaid.is_err());
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("RADIO".parse::<ParticleType>(), Ok(ParticleType::Radio));
        assert_eq!("none".parse::<PatternType>(), Ok(PatternType::None));
        assert!("confetti".parse::<ParticleType>().is_err());
    }
}
