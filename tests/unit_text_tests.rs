//! # Locale and Text Table Unit Tests

use bowl_collection::text::{t, I18nKey};
use bowl_collection::Locale;

#[cfg(test)]
mod locale_tests {
    use super::*;

    #[test]
    fn test_default_locale_is_spanish() {
        assert_eq!(Locale::default(), Locale::Es);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for locale in Locale::ALL {
            assert_ne!(locale.toggle(), locale);
            assert_eq!(locale.toggle().toggle(), locale);
        }
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("es".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(Locale::from_tag("es_ES.UTF-8"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("fr-FR"), None);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
        assert_eq!(Locale::Es.to_string(), "es");
    }
}

#[cfg(test)]
mod text_table_tests {
    use super::*;

    #[test]
    fn test_every_key_resolves_to_non_empty_text() {
        for locale in Locale::ALL {
            for key in I18nKey::ALL {
                assert!(
                    !t(locale, *key).trim().is_empty(),
                    "{} is empty in {}",
                    key.as_str(),
                    locale
                );
            }
        }
    }

    #[test]
    fn test_known_translations() {
        assert_eq!(t(Locale::Es, I18nKey::NavProducts), "Productos");
        assert_eq!(t(Locale::En, I18nKey::NavProducts), "Products");
        assert_eq!(t(Locale::Es, I18nKey::FilterClassic), "Clásicos");
        assert_eq!(t(Locale::En, I18nKey::NotFoundMessage), "Oops! Page not found");
        assert_eq!(t(Locale::Es, I18nKey::NotFoundMessage), "¡Vaya! Página no encontrada");
    }

    #[test]
    fn test_key_names_round_trip_to_snake_case() {
        assert_eq!(I18nKey::NavLanguageToggle.as_str(), "nav_language_toggle");
        assert_eq!(I18nKey::HomeFeature1.as_str(), "home_feature_1");
    }

    #[test]
    fn test_most_text_differs_between_locales() {
        let differing = I18nKey::ALL
            .iter()
            .filter(|key| t(Locale::Es, **key) != t(Locale::En, **key))
            .count();
        assert!(differing > I18nKey::ALL.len() / 2);
    }
}
