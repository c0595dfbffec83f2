//! Theme token integrity validation.
//!
//! A malformed token is an authoring defect, not a runtime condition:
//! `build` and `check` run [`validate`] before any stylesheet is
//! emitted and abort with a [`ThemeError`] naming the offending entry.
//!
//! Enforced invariants:
//! - every family has exactly [`SHADES_PER_FAMILY`] shades;
//! - every shade value is a 6-digit hex color;
//! - no two families share a shade name;
//! - every animation has a keyframe definition of the same name (and
//!   no keyframe definition is orphaned);
//! - keyframe offsets are non-decreasing and cover the 0-100% domain.

use super::tokens::{
    ANIMATIONS, Animation, COLOR_FAMILIES, ColorFamily, KEYFRAMES, Keyframes, SHADES_PER_FAMILY,
};
use regex::Regex;
use std::{collections::HashMap, sync::LazyLock};
use thiserror::Error;

/// 6-digit hex color pattern, case-insensitive.
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#[0-9a-f]{6}$").unwrap());

/// Theme token table integrity errors
#[derive(Debug, Error, PartialEq)]
pub enum ThemeError {
    #[error("color family `{family}` has {count} shades, expected {expected}")]
    FamilySize {
        family: &'static str,
        count: usize,
        expected: usize,
    },

    #[error("`{family}-{shade}` value `{value}` is not a 6-digit hex color")]
    InvalidHex {
        family: &'static str,
        shade: &'static str,
        value: &'static str,
    },

    #[error("shade name `{shade}` appears in both `{first}` and `{second}`")]
    DuplicateShade {
        shade: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("animation `{animation}` has no keyframe definition")]
    MissingKeyframes { animation: &'static str },

    #[error("keyframe definition `{keyframes}` is not used by any animation")]
    OrphanKeyframes { keyframes: &'static str },

    #[error("keyframe definition `{keyframes}` has no steps")]
    EmptySteps { keyframes: &'static str },

    #[error("keyframes `{keyframes}`: cannot parse offset selector `{selector}`")]
    InvalidOffset {
        keyframes: &'static str,
        selector: &'static str,
    },

    #[error("keyframes `{keyframes}`: offset `{selector}` breaks non-decreasing order")]
    OffsetOrder {
        keyframes: &'static str,
        selector: &'static str,
    },

    #[error("keyframes `{keyframes}` does not reach the {bound} boundary")]
    OffsetDomain {
        keyframes: &'static str,
        bound: &'static str,
    },
}

/// Validate the whole static token table.
pub fn validate() -> Result<(), ThemeError> {
    check_color_families(&COLOR_FAMILIES)?;
    check_animation_references(&ANIMATIONS, &KEYFRAMES)?;
    check_keyframe_offsets(&KEYFRAMES)?;
    Ok(())
}

/// Family size, hex syntax and cross-family shade uniqueness.
fn check_color_families(families: &[ColorFamily]) -> Result<(), ThemeError> {
    let mut seen: HashMap<&'static str, &'static str> = HashMap::new();

    for family in families {
        if family.shades.len() != SHADES_PER_FAMILY {
            return Err(ThemeError::FamilySize {
                family: family.name,
                count: family.shades.len(),
                expected: SHADES_PER_FAMILY,
            });
        }

        for shade in family.shades {
            if !HEX_COLOR.is_match(shade.value) {
                return Err(ThemeError::InvalidHex {
                    family: family.name,
                    shade: shade.name,
                    value: shade.value,
                });
            }

            if let Some(first) = seen.insert(shade.name, family.name) {
                return Err(ThemeError::DuplicateShade {
                    shade: shade.name,
                    first,
                    second: family.name,
                });
            }
        }
    }

    Ok(())
}

/// Animation -> keyframes referential integrity, both directions.
fn check_animation_references(
    animations: &[Animation],
    keyframes: &[Keyframes],
) -> Result<(), ThemeError> {
    for animation in animations {
        if !keyframes.iter().any(|k| k.name == animation.name) {
            return Err(ThemeError::MissingKeyframes {
                animation: animation.name,
            });
        }
    }

    for keyframe in keyframes {
        if !animations.iter().any(|a| a.name == keyframe.name) {
            return Err(ThemeError::OrphanKeyframes {
                keyframes: keyframe.name,
            });
        }
    }

    Ok(())
}

/// Offset selectors parse, are non-decreasing, and span 0-100%.
fn check_keyframe_offsets(keyframes: &[Keyframes]) -> Result<(), ThemeError> {
    for keyframe in keyframes {
        if keyframe.steps.is_empty() {
            return Err(ThemeError::EmptySteps {
                keyframes: keyframe.name,
            });
        }

        let mut previous = f32::NEG_INFINITY;
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;

        for step in keyframe.steps {
            let offsets = parse_offsets(step.selector).ok_or(ThemeError::InvalidOffset {
                keyframes: keyframe.name,
                selector: step.selector,
            })?;

            // A compound selector like `0%, 100%` is ordered by its
            // first offset.
            let first = offsets[0];
            if first < previous {
                return Err(ThemeError::OffsetOrder {
                    keyframes: keyframe.name,
                    selector: step.selector,
                });
            }
            previous = first;

            for offset in offsets {
                min = min.min(offset);
                max = max.max(offset);
            }
        }

        if min != 0.0 {
            return Err(ThemeError::OffsetDomain {
                keyframes: keyframe.name,
                bound: "0%",
            });
        }
        if max != 100.0 {
            return Err(ThemeError::OffsetDomain {
                keyframes: keyframe.name,
                bound: "100%",
            });
        }
    }

    Ok(())
}

/// Parse an offset selector like `0%` or `0%, 100%` into percentages.
///
/// Returns `None` for empty selectors, missing `%` suffixes, values
/// outside 0-100, or unparseable numbers.
fn parse_offsets(selector: &str) -> Option<Vec<f32>> {
    let offsets: Option<Vec<f32>> = selector
        .split(',')
        .map(|part| {
            let value: f32 = part.trim().strip_suffix('%')?.parse().ok()?;
            (0.0..=100.0).contains(&value).then_some(value)
        })
        .collect();

    offsets.filter(|o| !o.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::tokens::{KeyframeStep, Shade, all_shades};
    use super::*;

    // ------------------------------------------------------------------------
    // The shipped table
    // ------------------------------------------------------------------------

    #[test]
    fn test_shipped_table_is_valid() {
        validate().unwrap();
    }

    #[test]
    fn test_all_shade_values_are_hex() {
        for (family, shade) in all_shades() {
            assert!(
                HEX_COLOR.is_match(shade.value),
                "{}-{} = {}",
                family.name,
                shade.name,
                shade.value
            );
        }
    }

    #[test]
    fn test_shade_names_unique_across_families() {
        let mut names: Vec<_> = all_shades().map(|(_, shade)| shade.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_every_animation_has_keyframes() {
        for animation in &ANIMATIONS {
            assert!(
                KEYFRAMES.iter().any(|k| k.name == animation.name),
                "no keyframes for {}",
                animation.name
            );
        }
    }

    // ------------------------------------------------------------------------
    // parse_offsets
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_single_offset() {
        assert_eq!(parse_offsets("50%"), Some(vec![50.0]));
    }

    #[test]
    fn test_parse_compound_offset() {
        assert_eq!(parse_offsets("0%, 100%"), Some(vec![0.0, 100.0]));
    }

    #[test]
    fn test_parse_offset_missing_percent() {
        assert_eq!(parse_offsets("50"), None);
    }

    #[test]
    fn test_parse_offset_out_of_domain() {
        assert_eq!(parse_offsets("120%"), None);
    }

    // ------------------------------------------------------------------------
    // Negative cases
    // ------------------------------------------------------------------------

    #[test]
    fn test_rejects_short_family() {
        let families = [ColorFamily {
            name: "lonely",
            shades: &[Shade { name: "only", value: "#000000" }],
        }];
        assert_eq!(
            check_color_families(&families),
            Err(ThemeError::FamilySize {
                family: "lonely",
                count: 1,
                expected: SHADES_PER_FAMILY,
            })
        );
    }

    #[test]
    fn test_rejects_bad_hex() {
        let families = [ColorFamily {
            name: "broken",
            shades: &[
                Shade { name: "a", value: "#fff" },
                Shade { name: "b", value: "#000000" },
                Shade { name: "c", value: "#000000" },
                Shade { name: "d", value: "#000000" },
            ],
        }];
        assert_eq!(
            check_color_families(&families),
            Err(ThemeError::InvalidHex {
                family: "broken",
                shade: "a",
                value: "#fff",
            })
        );
    }

    #[test]
    fn test_rejects_duplicate_shade_across_families() {
        let shades: &[Shade] = &[
            Shade { name: "one", value: "#111111" },
            Shade { name: "two", value: "#222222" },
            Shade { name: "three", value: "#333333" },
            Shade { name: "dup", value: "#444444" },
        ];
        let shades_b: &[Shade] = &[
            Shade { name: "four", value: "#111111" },
            Shade { name: "five", value: "#222222" },
            Shade { name: "six", value: "#333333" },
            Shade { name: "dup", value: "#444444" },
        ];
        let families = [
            ColorFamily { name: "first", shades },
            ColorFamily { name: "second", shades: shades_b },
        ];
        assert_eq!(
            check_color_families(&families),
            Err(ThemeError::DuplicateShade {
                shade: "dup",
                first: "first",
                second: "second",
            })
        );
    }

    #[test]
    fn test_rejects_missing_keyframes() {
        let animations = [Animation {
            name: "ghost",
            shorthand: "ghost 1s linear infinite",
        }];
        assert_eq!(
            check_animation_references(&animations, &[]),
            Err(ThemeError::MissingKeyframes { animation: "ghost" })
        );
    }

    #[test]
    fn test_rejects_orphan_keyframes() {
        let keyframes = [Keyframes {
            name: "unused",
            steps: &[KeyframeStep { selector: "0%", props: &[("opacity", "1")] }],
        }];
        assert_eq!(
            check_animation_references(&[], &keyframes),
            Err(ThemeError::OrphanKeyframes { keyframes: "unused" })
        );
    }

    #[test]
    fn test_rejects_decreasing_offsets() {
        let keyframes = [Keyframes {
            name: "backwards",
            steps: &[
                KeyframeStep { selector: "100%", props: &[("opacity", "1")] },
                KeyframeStep { selector: "0%", props: &[("opacity", "0")] },
            ],
        }];
        assert_eq!(
            check_keyframe_offsets(&keyframes),
            Err(ThemeError::OffsetOrder {
                keyframes: "backwards",
                selector: "0%",
            })
        );
    }

    #[test]
    fn test_rejects_incomplete_domain() {
        let keyframes = [Keyframes {
            name: "halfway",
            steps: &[
                KeyframeStep { selector: "0%", props: &[("opacity", "0")] },
                KeyframeStep { selector: "50%", props: &[("opacity", "1")] },
            ],
        }];
        assert_eq!(
            check_keyframe_offsets(&keyframes),
            Err(ThemeError::OffsetDomain {
                keyframes: "halfway",
                bound: "100%",
            })
        );
    }

    #[test]
    fn test_accepts_compound_boundary_selector() {
        let keyframes = [Keyframes {
            name: "pulse",
            steps: &[
                KeyframeStep { selector: "0%, 100%", props: &[("opacity", "1")] },
                KeyframeStep { selector: "50%", props: &[("opacity", "0.5")] },
            ],
        }];
        check_keyframe_offsets(&keyframes).unwrap();
    }
}
