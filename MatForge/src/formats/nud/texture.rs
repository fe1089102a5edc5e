//! Texture hash resolution
//!
//! Materials refer to textures by hash. Reserved hashes name built-in dummy
//! textures; every other hash must be looked up in the texture containers
//! loaded alongside the model.

use std::collections::HashMap;
use std::hash::BuildHasher;

use super::enums::DummyTexture;

/// A container that maps texture hashes to loaded textures
pub trait TextureSource {
    type Texture;

    fn texture(&self, hash: u32) -> Option<&Self::Texture>;
}

impl<T, S: BuildHasher> TextureSource for HashMap<u32, T, S> {
    type Texture = T;

    fn texture(&self, hash: u32) -> Option<&T> {
        self.get(&hash)
    }
}

/// Outcome of looking up a texture hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTexture<'a, T> {
    /// A reserved hash standing for a built-in texture
    Dummy(DummyTexture),
    /// Found in one of the containers
    Loaded(&'a T),
    /// Not found anywhere
    Missing(u32),
}

/// Resolve a hash against the dummy table, then each source in order.
///
/// The first source holding the hash wins.
pub fn resolve_texture<S: TextureSource>(
    sources: &[S],
    hash: u32,
) -> ResolvedTexture<'_, S::Texture> {
    if let Some(dummy) = DummyTexture::from_hash(hash) {
        return ResolvedTexture::Dummy(dummy);
    }

    sources
        .iter()
        .find_map(|source| source.texture(hash))
        .map_or(ResolvedTexture::Missing(hash), ResolvedTexture::Loaded)
}
