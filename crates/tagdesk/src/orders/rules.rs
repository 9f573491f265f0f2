//! Shape-first configuration rules: the selected shape constrains which
//! materials and sizes are legal, and selections are auto-corrected to the
//! first legal value when a shape change invalidates them.

use super::domain::{TagMaterial, TagSize, TagSpec};

/// Materials that can be ordered for the given shape. Unrecognized shapes
/// fall back to brass.
pub fn legal_materials(shape: &str) -> &'static [TagMaterial] {
    match shape {
        "Round" => &[TagMaterial::Brass, TagMaterial::Stainless],
        "Bone" => &[TagMaterial::Stainless],
        "Heart" => &[TagMaterial::PinkSilver],
        _ => &[TagMaterial::Brass],
    }
}

/// Sizes that can be ordered for the given shape. Heart tags only come in
/// large.
pub fn legal_sizes(shape: &str) -> &'static [TagSize] {
    match shape {
        "Heart" => &[TagSize::Large],
        _ => &[TagSize::Small, TagSize::Large],
    }
}

/// The custom image add-on is only engraved on round tags. The rule layer
/// never changes the shape itself; the form surfaces a warning instead.
pub fn image_allowed(shape: &str) -> bool {
    shape == "Round"
}

/// Correct `material` and `size` against the tag's shape. Idempotent:
/// already-legal selections are left untouched.
pub fn apply_shape_rules(tag: &mut TagSpec) {
    let materials = legal_materials(&tag.shape);
    if !materials.contains(&tag.material) {
        tag.material = materials[0];
    }

    let sizes = legal_sizes(&tag.shape);
    if !sizes.contains(&tag.size) {
        tag.size = sizes[0];
    }
}
