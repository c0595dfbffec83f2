//! The design-token table.
//!
//! This is the canonical vocabulary for the whole application's visual
//! language: five color families of four shades each, five named
//! animations with their keyframe definitions, and two background-image
//! gradients. The table is static data - defined once, immutable for
//! the process lifetime - and is resolved into utility classes by the
//! stylesheet emitter (`theme::css`). Application code never reads it
//! at runtime.
//!
//! Shade names are globally unique across families, so a class like
//! `bg-shadow-crimson` is unambiguous. `theme::validate` enforces the
//! table's integrity invariants before every build.

/// A single named shade inside a color family.
#[derive(Debug, Clone, Copy)]
pub struct Shade {
    pub name: &'static str,
    /// 6-digit hex color.
    pub value: &'static str,
}

/// A semantic color family (4 shades each).
#[derive(Debug, Clone, Copy)]
pub struct ColorFamily {
    pub name: &'static str,
    pub shades: &'static [Shade],
}

/// A named animation bound to its CSS shorthand
/// (duration, timing function, iteration policy).
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    pub name: &'static str,
    pub shorthand: &'static str,
}

/// One step of a keyframe definition: a percentage offset selector
/// mapping to property changes.
#[derive(Debug, Clone, Copy)]
pub struct KeyframeStep {
    /// Offset selector, e.g. `0%` or `0%, 100%`.
    pub selector: &'static str,
    pub props: &'static [(&'static str, &'static str)],
}

/// A named keyframe definition. Every animation in [`ANIMATIONS`] has
/// exactly one definition of the same name here.
#[derive(Debug, Clone, Copy)]
pub struct Keyframes {
    pub name: &'static str,
    pub steps: &'static [KeyframeStep],
}

/// Shades required in every color family.
pub const SHADES_PER_FAMILY: usize = 4;

/// The five color families.
pub const COLOR_FAMILIES: [ColorFamily; 5] = [
    ColorFamily {
        name: "abyss",
        shades: &[
            Shade { name: "black", value: "#000000" },
            Shade { name: "void", value: "#0b0b10" },
            Shade { name: "gloom", value: "#14141d" },
            Shade { name: "veil", value: "#1e1e2a" },
        ],
    },
    ColorFamily {
        name: "warmth",
        shades: &[
            Shade { name: "ash", value: "#a89a8c" },
            Shade { name: "ember", value: "#c96f4a" },
            Shade { name: "glow", value: "#e3a368" },
            Shade { name: "flame", value: "#f0c987" },
        ],
    },
    ColorFamily {
        name: "shadow",
        shades: &[
            Shade { name: "dusk", value: "#2a0a14" },
            Shade { name: "umbra", value: "#43101e" },
            Shade { name: "bruise", value: "#5c1530" },
            Shade { name: "crimson", value: "#7a1f2e" },
        ],
    },
    ColorFamily {
        name: "light",
        shades: &[
            Shade { name: "dawn", value: "#f5ead6" },
            Shade { name: "bone", value: "#e8dcc8" },
            Shade { name: "mist", value: "#cfc4b4" },
            Shade { name: "pale", value: "#b3a898" },
        ],
    },
    ColorFamily {
        name: "depth",
        shades: &[
            Shade { name: "midnight", value: "#0d1b2a" },
            Shade { name: "trench", value: "#13263c" },
            Shade { name: "fathom", value: "#1b3350" },
            Shade { name: "ocean", value: "#24415f" },
        ],
    },
];

/// The five named animations.
pub const ANIMATIONS: [Animation; 5] = [
    Animation {
        name: "float",
        shorthand: "float 6s ease-in-out infinite",
    },
    Animation {
        name: "pulse-slow",
        shorthand: "pulse-slow 4s cubic-bezier(0.4, 0, 0.6, 1) infinite",
    },
    Animation {
        name: "shimmer",
        shorthand: "shimmer 2.5s linear infinite",
    },
    Animation {
        name: "descend",
        shorthand: "descend 0.8s ease-out 1",
    },
    Animation {
        name: "flicker",
        shorthand: "flicker 3s ease-in-out infinite",
    },
];

/// Keyframe definitions, one per animation.
pub const KEYFRAMES: [Keyframes; 5] = [
    Keyframes {
        name: "float",
        steps: &[
            KeyframeStep { selector: "0%", props: &[("transform", "translateY(0)")] },
            KeyframeStep { selector: "50%", props: &[("transform", "translateY(-12px)")] },
            KeyframeStep { selector: "100%", props: &[("transform", "translateY(0)")] },
        ],
    },
    Keyframes {
        name: "pulse-slow",
        steps: &[
            KeyframeStep { selector: "0%", props: &[("opacity", "1")] },
            KeyframeStep { selector: "50%", props: &[("opacity", "0.55")] },
            KeyframeStep { selector: "100%", props: &[("opacity", "1")] },
        ],
    },
    Keyframes {
        name: "shimmer",
        steps: &[
            KeyframeStep { selector: "0%", props: &[("transform", "translateX(-100%)")] },
            KeyframeStep { selector: "100%", props: &[("transform", "translateX(100%)")] },
        ],
    },
    Keyframes {
        name: "descend",
        steps: &[
            KeyframeStep {
                selector: "0%",
                props: &[("opacity", "0"), ("transform", "translateY(-16px)")],
            },
            KeyframeStep {
                selector: "100%",
                props: &[("opacity", "1"), ("transform", "translateY(0)")],
            },
        ],
    },
    Keyframes {
        name: "flicker",
        steps: &[
            KeyframeStep {
                selector: "0%",
                props: &[("box-shadow", "0 0 4px rgba(122, 31, 46, 0.4)")],
            },
            KeyframeStep {
                selector: "50%",
                props: &[("box-shadow", "0 0 18px rgba(122, 31, 46, 0.8)")],
            },
            KeyframeStep {
                selector: "100%",
                props: &[("box-shadow", "0 0 4px rgba(122, 31, 46, 0.4)")],
            },
        ],
    },
];

/// Background-image gradients: a radial passthrough and the shimmer
/// highlight band swept by the `shimmer` animation.
pub const BACKGROUND_IMAGES: [(&str, &str); 2] = [
    ("gradient-radial", "radial-gradient(var(--gradient-stops))"),
    (
        "shimmer",
        "linear-gradient(110deg, transparent 35%, rgba(245, 234, 214, 0.08) 50%, transparent 65%)",
    ),
];

/// Iterate every (family, shade) pair in declaration order.
pub fn all_shades() -> impl Iterator<Item = (&'static ColorFamily, &'static Shade)> {
    COLOR_FAMILIES
        .iter()
        .flat_map(|family| family.shades.iter().map(move |shade| (family, shade)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_count_and_names() {
        let names: Vec<_> = COLOR_FAMILIES.iter().map(|f| f.name).collect();
        assert_eq!(names, ["abyss", "warmth", "shadow", "light", "depth"]);
    }

    #[test]
    fn test_all_shades_yields_every_pair() {
        assert_eq!(all_shades().count(), COLOR_FAMILIES.len() * SHADES_PER_FAMILY);
    }

    #[test]
    fn test_vocabulary_examples_present() {
        // The shade vocabulary the styling layer relies on
        for (family, shade) in [
            ("abyss", "black"),
            ("warmth", "ash"),
            ("shadow", "crimson"),
            ("light", "dawn"),
            ("depth", "midnight"),
        ] {
            assert!(
                all_shades().any(|(f, s)| f.name == family && s.name == shade),
                "missing {family}-{shade}"
            );
        }
    }

    #[test]
    fn test_abyss_black_is_pure_black() {
        let (_, black) = all_shades()
            .find(|(f, s)| f.name == "abyss" && s.name == "black")
            .unwrap();
        assert_eq!(black.value, "#000000");
    }

    #[test]
    fn test_animation_shorthands_start_with_name() {
        for animation in &ANIMATIONS {
            assert!(
                animation.shorthand.starts_with(animation.name),
                "{} shorthand does not lead with its name",
                animation.name
            );
        }
    }

    #[test]
    fn test_descend_is_finite() {
        let descend = ANIMATIONS.iter().find(|a| a.name == "descend").unwrap();
        assert!(!descend.shorthand.contains("infinite"));
    }

    #[test]
    fn test_background_image_names() {
        let names: Vec<_> = BACKGROUND_IMAGES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["gradient-radial", "shimmer"]);
    }

    #[test]
    fn test_gradients_are_gradient_expressions() {
        let (_, radial) = BACKGROUND_IMAGES[0];
        let (_, shimmer) = BACKGROUND_IMAGES[1];
        assert!(radial.starts_with("radial-gradient("));
        assert!(shimmer.starts_with("linear-gradient("));
    }
}
