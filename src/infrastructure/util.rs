use crate::application::ports::util::SlugGenerator;

/// Lowercases, turns every run of non ASCII-alphanumeric characters into a
/// single hyphen and trims hyphens from both ends. No transliteration is
/// applied, so `"Café"` becomes `"caf"`.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut slug = String::with_capacity(input.len());
        for ch in input.to_lowercase().chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch);
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slugify(input: &str) -> String {
        DefaultSlugGenerator.slugify(input)
    }

    #[test]
    fn punctuation_collapses_to_single_hyphens() {
        assert_eq!(slugify("Summer Casual Vibes!!"), "summer-casual-vibes");
        assert_eq!(slugify("  --Street   Style--  "), "street-style");
        assert_eq!(slugify("A&B / C_D"), "a-b-c-d");
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(slugify("Café Noir"), "caf-noir");
        assert_eq!(slugify("Été"), "t");
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(slugify("Denim Days 2024"), slugify("Denim Days 2024"));
        assert_eq!(slugify("Denim Days 2024"), "denim-days-2024");
    }

    #[test]
    fn symbol_only_input_yields_empty_slug() {
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(slugify(""), "");
    }
}
