// * Registrable domain resolution against the public suffix list

use url::Url;

/// A site's registrable name split into its owner label and public suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrableDomain {
    pub domain: String,
    pub suffix: String,
}

impl RegistrableDomain {
    // * Returns None for IP hosts, bare suffixes, unlisted TLDs and unparsable URLs.
    pub fn from_url(url: &str) -> Option<Self> {
        let parsed = Url::parse(url).ok()?;
        let host = parsed.domain()?.trim_end_matches('.');

        let suffix = icann_suffix(host)?;
        let rest = host.strip_suffix(suffix)?.strip_suffix('.')?;
        let domain = rest.rsplit('.').next()?;

        if domain.is_empty() {
            return None;
        }

        Some(Self {
            domain: domain.to_string(),
            suffix: suffix.to_string(),
        })
    }

    // * The literal prefix a same-site link must start with.
    pub fn www_prefix(&self) -> String {
        format!("https://www.{}.{}", self.domain, self.suffix)
    }
}

// * Longest ICANN suffix of `host`; private entries (myshopify.com, github.io) fall back
// * to the ICANN suffix enclosing them.
fn icann_suffix(host: &str) -> Option<&str> {
    let mut candidate = host;

    loop {
        let suffix = psl::suffix(candidate.as_bytes())?;
        let len = suffix.as_bytes().len();
        let found = &candidate[candidate.len() - len..];

        match suffix.typ() {
            Some(psl::Type::Icann) => return Some(found),
            Some(psl::Type::Private) => {
                // * Drop the leftmost label of the private entry and look again
                let (_, parent) = found.split_once('.')?;
                candidate = parent;
            }
            None => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_domain() {
        let domain = RegistrableDomain::from_url("https://www.example.com/living-room").unwrap();
        assert_eq!(domain.domain, "example");
        assert_eq!(domain.suffix, "com");
        assert_eq!(domain.www_prefix(), "https://www.example.com");
    }

    #[test]
    fn test_multi_label_suffix() {
        let domain = RegistrableDomain::from_url("https://shop.furniture.co.uk/").unwrap();
        assert_eq!(domain.domain, "furniture");
        assert_eq!(domain.suffix, "co.uk");
        assert_eq!(domain.www_prefix(), "https://www.furniture.co.uk");
    }

    #[test]
    fn test_private_suffix_resolves_to_icann() {
        let domain = RegistrableDomain::from_url("https://www.store.myshopify.com/").unwrap();
        assert_eq!(
            (domain.domain.as_str(), domain.suffix.as_str()),
            ("myshopify", "com")
        );
        assert_eq!(domain.www_prefix(), "https://www.myshopify.com");

        let domain = RegistrableDomain::from_url("https://mobila.blogspot.co.uk/post").unwrap();
        assert_eq!((domain.domain.as_str(), domain.suffix.as_str()), ("blogspot", "co.uk"));

        let domain = RegistrableDomain::from_url("https://furnish.github.io/").unwrap();
        assert_eq!((domain.domain.as_str(), domain.suffix.as_str()), ("github", "io"));
    }

    #[test]
    fn test_no_registrable_domain() {
        assert_eq!(RegistrableDomain::from_url("http://127.0.0.1:8080/"), None);
        assert_eq!(RegistrableDomain::from_url("not a url"), None);
    }
}
