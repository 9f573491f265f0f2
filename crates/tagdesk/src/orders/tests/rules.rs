use super::common::tag;
use crate::orders::domain::{TagMaterial, TagSize, TAG_SHAPES};
use crate::orders::rules::{apply_shape_rules, image_allowed, legal_materials, legal_sizes};

#[test]
fn material_sets_follow_the_shape() {
    assert_eq!(
        legal_materials("Round"),
        &[TagMaterial::Brass, TagMaterial::Stainless]
    );
    assert_eq!(legal_materials("Bone"), &[TagMaterial::Stainless]);
    assert_eq!(legal_materials("Heart"), &[TagMaterial::PinkSilver]);
    assert_eq!(legal_materials("Rectangle"), &[TagMaterial::Brass]);
    assert_eq!(legal_materials("not-a-shape"), &[TagMaterial::Brass]);
}

#[test]
fn heart_tags_only_come_in_large() {
    assert_eq!(legal_sizes("Heart"), &[TagSize::Large]);
    assert_eq!(legal_sizes("Round"), &[TagSize::Small, TagSize::Large]);
    assert_eq!(legal_sizes("Custom"), &[TagSize::Small, TagSize::Large]);
}

#[test]
fn every_shape_transition_lands_on_a_legal_pair() {
    let materials = [
        TagMaterial::Brass,
        TagMaterial::Stainless,
        TagMaterial::PinkSilver,
    ];
    let sizes = [TagSize::Small, TagSize::Large];

    for shape in TAG_SHAPES {
        for material in materials {
            for size in sizes {
                let mut candidate = tag();
                candidate.shape = shape.to_string();
                candidate.material = material;
                candidate.size = size;

                apply_shape_rules(&mut candidate);
                assert!(
                    legal_materials(shape).contains(&candidate.material),
                    "{shape}: {:?} not legal",
                    candidate.material
                );
                assert!(
                    legal_sizes(shape).contains(&candidate.size),
                    "{shape}: {:?} not legal",
                    candidate.size
                );

                let corrected = candidate.clone();
                apply_shape_rules(&mut candidate);
                assert_eq!(candidate, corrected, "{shape}: correction not idempotent");
            }
        }
    }
}

#[test]
fn legal_selection_is_left_untouched() {
    let mut candidate = tag();
    candidate.shape = "Round".to_string();
    candidate.material = TagMaterial::Stainless;
    candidate.size = TagSize::Large;

    apply_shape_rules(&mut candidate);
    assert_eq!(candidate.material, TagMaterial::Stainless);
    assert_eq!(candidate.size, TagSize::Large);
}

#[test]
fn switching_to_heart_forces_large_pink_silver() {
    let mut candidate = tag();
    assert_eq!(candidate.size, TagSize::Small);

    candidate.shape = "Heart".to_string();
    apply_shape_rules(&mut candidate);
    assert_eq!(candidate.material, TagMaterial::PinkSilver);
    assert_eq!(candidate.size, TagSize::Large);
}

#[test]
fn custom_images_are_round_only() {
    assert!(image_allowed("Round"));
    for shape in TAG_SHAPES.iter().filter(|shape| **shape != "Round") {
        assert!(!image_allowed(shape), "{shape} should not allow images");
    }
}
