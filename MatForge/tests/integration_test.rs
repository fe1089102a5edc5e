use matforge::prelude::*;
use matforge::formats::nud::layout::flag;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn le32(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Hand-built bytes of a preset holding only the default material
fn default_preset_bytes() -> Vec<u8> {
    let mut bytes: Vec<u8> = Vec::new();

    // Offset header
    bytes.extend(le32(384));
    bytes.extend(le32(20));
    bytes.extend([0u8; 12]);

    // Material header
    bytes.extend(le32(0x94010161));
    bytes.extend(le32(0));
    bytes.extend(0u16.to_le_bytes()); // src factor
    bytes.extend(2u16.to_le_bytes()); // texture count
    bytes.extend(0u16.to_le_bytes()); // dst factor
    bytes.extend([0, 0]); // alpha test, alpha function
    bytes.extend(0u16.to_le_bytes()); // ref alpha
    bytes.extend(0x0405u16.to_le_bytes()); // cull mode
    bytes.extend(le32(0));
    bytes.extend(le32(0));
    bytes.extend(le32(0)); // z buffer offset

    // Textures
    for hash in [0x10000000u32, 0x10080000] {
        bytes.extend(le32(hash));
        bytes.extend(le32(0));
        bytes.extend(0u16.to_le_bytes());
        bytes.extend(0u16.to_le_bytes()); // map mode
        bytes.extend([1, 1, 3, 2, 6, 0]);
        bytes.extend(le32(0));
        bytes.extend(0u16.to_le_bytes());
    }

    // Properties
    let properties: [(&str, [f32; 4]); 8] = [
        ("NU_colorSamplerUV", [1.0, 1.0, 0.0, 0.0]),
        ("NU_fresnelColor", [1.0; 4]),
        ("NU_blinkColor", [0.0; 4]),
        ("NU_aoMinGain", [0.0; 4]),
        ("NU_lightMapColorOffset", [0.0; 4]),
        ("NU_fresnelParams", [1.0, 0.0, 0.0, 0.0]),
        ("NU_alphaBlendParams", [0.0; 4]),
        ("NU_materialHash", [f32::from_bits(0x4E38220C), 0.0, 0.0, 0.0]),
    ];
    let mut strings: Vec<u8> = Vec::new();
    for (i, (name, values)) in properties.iter().enumerate() {
        bytes.extend(le32(if i == properties.len() - 1 { 0 } else { 32 }));
        bytes.extend(le32(strings.len() as u32));
        bytes.extend(le32(0));
        bytes.extend(le32(4));
        for value in values {
            bytes.extend(value.to_le_bytes());
        }

        strings.extend(name.as_bytes());
        strings.push(0);
        while strings.len() % 16 != 0 {
            strings.push(0);
        }
    }

    // Alignment, then names
    while bytes.len() % 32 != 0 {
        bytes.push(0xFF);
    }
    bytes.extend(strings);
    bytes
}

#[test]
fn test_default_material_encodes_to_fixed_bytes() {
    let bytes = encode_materials(&[Material::default()], &CodecOptions::default()).unwrap();
    assert_eq!(bytes, default_preset_bytes());
}

#[test]
fn test_canonical_bytes_round_trip() {
    let original = default_preset_bytes();
    let decoded = decode_materials(&original, 0, &CodecOptions::default()).unwrap();
    assert!(decoded.warnings.is_empty());

    let encoded = encode_materials(&decoded.materials, &CodecOptions::default()).unwrap();
    assert_eq!(encoded, original);
}

#[test]
fn test_edited_materials_round_trip() {
    let mut first = Material::default();
    first.set_flags(flag::DIFFUSE | flag::SPHERE_MAP | flag::NORMAL_MAP);
    first.add_texture();
    first.textures[2].hash = 0x40123456;
    first.add_property("NU_specularParams");
    first.set_property_value("NU_specularParams", 1, 40.0);
    first.remove_property("NU_blinkColor");
    first.z_buffer_offset = -12;
    first.set_alpha_test_enabled(true);

    let mut materials = vec![first];
    add_default_material(&mut materials);

    let options = CodecOptions::default();
    let bytes = encode_materials(&materials, &options).unwrap();
    let decoded = decode_materials(&bytes, 0, &options).unwrap();
    assert_eq!(decoded.materials, materials);
    assert!(decoded.warnings.is_empty());
    assert_eq!(encode_materials(&decoded.materials, &options).unwrap(), bytes);
}

#[test]
fn test_zero_slot_offset_means_absent() {
    let bytes = default_preset_bytes();
    assert_eq!(&bytes[8..20], &[0u8; 12]);

    let decoded = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap();
    assert_eq!(decoded.materials.len(), 1);
}

#[test]
fn test_repeated_slot_offset_means_absent() {
    let mut bytes = default_preset_bytes();
    // Second slot repeats the first offset instead of using 0
    bytes[8..12].copy_from_slice(&le32(20));

    let decoded = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap();
    assert_eq!(decoded.materials.len(), 1);

    // Re-encoding normalizes the header to the 0 convention
    let encoded = encode_materials(&decoded.materials, &CodecOptions::default()).unwrap();
    assert_eq!(encoded, default_preset_bytes());
}

#[test]
fn test_diffuse_normal_slot_order() {
    let mut material = Material::with_flags(flag::DIFFUSE | flag::NORMAL_MAP);
    material.textures = vec![MatTexture::new(0x100), MatTexture::new(0x200)];

    assert_eq!(material.expected_slots(0).len(), 2);
    let slots: Vec<_> = material
        .texture_slots(0)
        .into_iter()
        .map(|(slot, texture)| (slot, texture.hash))
        .collect();
    assert_eq!(
        slots,
        vec![
            (Some(TextureSlot::Diffuse), 0x100),
            (Some(TextureSlot::NormalMap), 0x200),
        ]
    );
}

#[test]
fn test_unknown_wrap_mode_survives() {
    let mut material = Material::default();
    material.textures[0].wrap_mode_s = 0x7;

    let options = CodecOptions::default();
    let bytes = encode_materials(&[material], &options).unwrap();
    let decoded = decode_materials(&bytes, 0, &options).unwrap();
    assert_eq!(decoded.materials[0].textures[0].wrap_mode_s, 0x7);
    assert!(decoded.warnings.iter().all(|w| !w.is_structural()));

    assert_eq!(encode_materials(&decoded.materials, &options).unwrap(), bytes);
}

#[test]
fn test_texture_bounds() {
    let mut material = Material::default();
    while material.add_texture() {}
    assert_eq!(material.textures.len(), 4);
    assert!(!material.add_texture());

    while material.remove_texture(0) {}
    assert_eq!(material.textures.len(), 1);
    assert!(!material.remove_texture(0));
}

#[test]
fn test_material_hash_bits() {
    let mut material = Material::default();
    material.set_material_hash(0x89ABCDEF);

    let options = CodecOptions::default();
    let bytes = encode_materials(&[material], &options).unwrap();
    let decoded = decode_materials(&bytes, 0, &options).unwrap();
    assert_eq!(decoded.materials[0].material_hash(), Some(0x89ABCDEF));
}

#[test]
fn test_big_endian_preset() {
    let options = CodecOptions::new().with_endian(Endian::Big);
    let bytes = encode_materials(&[Material::default()], &options).unwrap();
    assert_eq!(&bytes[0..4], &384u32.to_be_bytes());
    assert_eq!(&bytes[4..8], &20u32.to_be_bytes());

    let decoded = decode_materials(&bytes, 0, &options).unwrap();
    assert_eq!(decoded.materials, vec![Material::default()]);
}

#[test]
fn test_short_buffer_is_fatal() {
    let err = decode_materials(&[0u8; 10], 0, &CodecOptions::default()).unwrap_err();
    assert!(matches!(err, Error::HeaderTooShort { .. }));
}

#[test]
fn test_preset_files_and_apply() {
    let dir = tempdir().unwrap();
    let library = PresetLibrary::new(dir.path());

    let mut shiny = Material::default();
    shiny.set_cull_mode_by_label("Cull None");
    shiny.add_property("NU_reflectionColor");
    library.save("shiny", &[shiny]).unwrap();

    let mut model = Material::default();
    model.textures[0].hash = 0x40ABCDEF;
    let model_path = dir.path().join("model.nmt");
    save_preset(&model_path, &[model]).unwrap();

    let mut target = load_preset(&model_path).unwrap();
    let kept = apply_preset(&mut target, library.load("shiny").unwrap()).unwrap();

    assert_eq!(kept, 2);
    assert_eq!(target[0].cull_mode, 0);
    assert!(target[0].property("NU_reflectionColor").is_some());
    assert_eq!(target[0].textures[0].hash, 0x40ABCDEF);
    assert_eq!(
        library.list().unwrap(),
        vec![dir.path().join("model.nmt"), dir.path().join("shiny.nmt")]
    );
}

#[test]
fn test_catalog_guards_property_names() {
    let catalog = ParamCatalog::builtin();
    let mut material = Material::default();

    assert!(catalog.add_known_property(&mut material, "NU_specularColor").unwrap());
    assert!(matches!(
        catalog.add_known_property(&mut material, "NU_notAThing"),
        Err(Error::UnknownParameter(_))
    ));
}
