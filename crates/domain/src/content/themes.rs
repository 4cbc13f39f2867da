//! Authored location themes, in registration order.

use crate::entities::{
    CharacterTheme, ColorPalette, GradientSet, ParticleConfig, ParticleType, PatternConfig,
    PatternType,
};

fn palette(colors: [&str; 6]) -> ColorPalette {
    let [primary, secondary, accent, background, surface, text] = colors;
    ColorPalette {
        primary: primary.into(),
        secondary: secondary.into(),
        accent: accent.into(),
        background: background.into(),
        surface: surface.into(),
        text: text.into(),
    }
}

fn gradients(primary: &str, secondary: &str, accent: &str) -> GradientSet {
    GradientSet {
        primary: primary.into(),
        secondary: secondary.into(),
        accent: accent.into(),
    }
}

fn particles(
    kind: ParticleType,
    color: &str,
    intensity: f32,
    speed: f32,
    count: u32,
) -> ParticleConfig {
    ParticleConfig::new(kind, color, intensity, speed, count)
}

pub(crate) fn builtin_themes() -> Vec<CharacterTheme> {
    vec![
        CharacterTheme::new(
            "the-bloxiverse",
            "The Bloxiverse",
            palette([
                "#3b82f6", "#8b5cf6", "#22d3ee", "#0b1020", "#141b34", "#e2e8f0",
            ]),
            gradients(
                "linear-gradient(135deg, #3b82f6 0%, #8b5cf6 100%)",
                "linear-gradient(180deg, #0b1020 0%, #141b34 100%)",
                "radial-gradient(circle at 50% 0%, #22d3ee 0%, transparent 65%)",
            ),
        )
        .with_particles(particles(ParticleType::Flow, "#22d3ee", 0.8, 0.6, 60))
        .with_patterns(PatternConfig::new(PatternType::Geometric, 0.15)),
        CharacterTheme::new(
            "the-crimson-wastes",
            "The Crimson Wastes",
            palette([
                "#dc2626", "#f97316", "#fbbf24", "#1a0a0a", "#2a1111", "#fde68a",
            ]),
            gradients(
                "linear-gradient(135deg, #dc2626 0%, #f97316 100%)",
                "linear-gradient(180deg, #1a0a0a 0%, #2a1111 100%)",
                "radial-gradient(circle at 50% 100%, #fbbf24 0%, transparent 60%)",
            ),
        )
        .with_particles(particles(ParticleType::Sparkle, "#fbbf24", 1.2, 1.0, 80))
        .with_patterns(PatternConfig::new(PatternType::Organic, 0.1)),
        CharacterTheme::new(
            "the-tidal-archive",
            "The Tidal Archive",
            palette([
                "#0ea5e9", "#14b8a6", "#a5f3fc", "#041421", "#0a2233", "#e0f2fe",
            ]),
            gradients(
                "linear-gradient(135deg, #0ea5e9 0%, #14b8a6 100%)",
                "linear-gradient(180deg, #041421 0%, #0a2233 100%)",
                "radial-gradient(ellipse at 50% 100%, #a5f3fc 0%, transparent 70%)",
            ),
        )
        .with_particles(particles(ParticleType::Wave, "#a5f3fc", 0.6, 0.4, 40))
        .with_patterns(PatternConfig::new(PatternType::Organic, 0.2)),
        CharacterTheme::new(
            "the-lantern-spire",
            "The Lantern Spire",
            palette([
                "#eab308", "#f59e0b", "#fef08a", "#17130a", "#231c0d", "#fefce8",
            ]),
            gradients(
                "linear-gradient(135deg, #eab308 0%, #f59e0b 100%)",
                "linear-gradient(180deg, #17130a 0%, #231c0d 100%)",
                "radial-gradient(circle at 50% 30%, #fef08a 0%, transparent 55%)",
            ),
        )
        .with_particles(particles(ParticleType::Orb, "#fef08a", 1.0, 0.3, 25))
        .with_patterns(PatternConfig::new(PatternType::Energy, 0.12)),
        CharacterTheme::new(
            "the-static-belt",
            "The Static Belt",
            palette([
                "#10b981", "#84cc16", "#d9f99d", "#07140e", "#0f2018", "#ecfdf5",
            ]),
            gradients(
                "linear-gradient(135deg, #10b981 0%, #84cc16 100%)",
                "linear-gradient(180deg, #07140e 0%, #0f2018 100%)",
                "repeating-linear-gradient(90deg, #d9f99d 0px, transparent 4px)",
            ),
        )
        .with_particles(particles(ParticleType::Radio, "#d9f99d", 0.9, 1.4, 30))
        .with_patterns(PatternConfig::new(PatternType::Geometric, 0.25)),
        CharacterTheme::new(
            "the-velocity-circuit",
            "The Velocity Circuit",
            palette([
                "#f43f5e", "#6366f1", "#f9a8d4", "#10091a", "#1c1230", "#fdf2f8",
            ]),
            gradients(
                "linear-gradient(90deg, #f43f5e 0%, #6366f1 100%)",
                "linear-gradient(180deg, #10091a 0%, #1c1230 100%)",
                "linear-gradient(90deg, transparent 0%, #f9a8d4 50%, transparent 100%)",
            ),
        )
        .with_particles(particles(ParticleType::Speed, "#f9a8d4", 1.5, 2.0, 90))
        .with_patterns(PatternConfig::new(PatternType::Energy, 0.18)),
        CharacterTheme::new(
            "the-clockwork-hollow",
            "The Clockwork Hollow",
            palette([
                "#b45309", "#78716c", "#fcd34d", "#120f0b", "#1f1a14", "#f5f5f4",
            ]),
            gradients(
                "linear-gradient(135deg, #b45309 0%, #78716c 100%)",
                "linear-gradient(180deg, #120f0b 0%, #1f1a14 100%)",
                "conic-gradient(from 0deg, #fcd34d, transparent, #fcd34d)",
            ),
        )
        .with_particles(particles(ParticleType::Clock, "#fcd34d", 0.7, 0.5, 12))
        .with_patterns(PatternConfig::new(PatternType::Geometric, 0.3)),
        CharacterTheme::new(
            "the-stormfront",
            "The Stormfront",
            palette([
                "#6366f1", "#0f172a", "#c4b5fd", "#05060f", "#0d1024", "#eef2ff",
            ]),
            gradients(
                "linear-gradient(135deg, #6366f1 0%, #0f172a 100%)",
                "linear-gradient(180deg, #05060f 0%, #0d1024 100%)",
                "radial-gradient(circle at 70% 20%, #c4b5fd 0%, transparent 50%)",
            ),
        )
        .with_particles(particles(ParticleType::Lightning, "#c4b5fd", 1.8, 1.2, 8))
        .with_patterns(PatternConfig::new(PatternType::Energy, 0.22)),
        CharacterTheme::new(
            "the-quiet-district",
            "The Quiet District",
            palette([
                "#64748b", "#94a3b8", "#cbd5e1", "#0f1115", "#181b21", "#f1f5f9",
            ]),
            gradients(
                "linear-gradient(135deg, #64748b 0%, #94a3b8 100%)",
                "linear-gradient(180deg, #0f1115 0%, #181b21 100%)",
                "linear-gradient(180deg, #cbd5e1 0%, transparent 100%)",
            ),
        ),
    ]
}
