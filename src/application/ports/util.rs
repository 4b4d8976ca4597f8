// src/application/ports/util.rs

/// Turns free text into a lowercase, hyphen-delimited, URL-safe identifier.
/// Implementations must be deterministic and must not consult storage.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
