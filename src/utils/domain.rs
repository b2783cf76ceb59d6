//! Domain name helpers for provider bindings.

/// Return progressively less-specific guesses for the zone owning `domain`,
/// most specific first.
///
/// One of these is usually the zone name the DNS provider account manages,
/// which is not always the challenge domain itself. Bindings probe the
/// guesses in order until the provider recognizes one.
///
/// ```
/// use acme_dns01::utils::domain::base_domain_guesses;
///
/// assert_eq!(
///     base_domain_guesses("foo.bar.baz.example.com"),
///     [
///         "foo.bar.baz.example.com",
///         "bar.baz.example.com",
///         "baz.example.com",
///         "example.com",
///         "com",
///     ]
/// );
/// ```
#[must_use]
pub fn base_domain_guesses(domain: &str) -> Vec<String> {
    let fragments: Vec<&str> = domain.split('.').collect();
    (0..fragments.len())
        .map(|i| fragments[i..].join("."))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_are_right_aligned_suffixes() {
        assert_eq!(
            base_domain_guesses("foo.bar.baz.example.com"),
            [
                "foo.bar.baz.example.com",
                "bar.baz.example.com",
                "baz.example.com",
                "example.com",
                "com",
            ]
        );
    }

    #[test]
    fn length_tracks_dot_count() {
        for domain in ["example.com", "a.b.c.d.e", "localhost", "x.y"] {
            let guesses = base_domain_guesses(domain);
            assert_eq!(guesses.len(), domain.matches('.').count() + 1);
            assert_eq!(guesses[0], domain);
            assert_eq!(
                guesses.last().map(String::as_str),
                domain.rsplit('.').next()
            );
        }
    }

    #[test]
    fn dotless_domain_yields_itself() {
        assert_eq!(base_domain_guesses("localhost"), ["localhost"]);
    }

    #[test]
    fn empty_input_yields_single_empty_guess() {
        assert_eq!(base_domain_guesses(""), [""]);
    }
}
