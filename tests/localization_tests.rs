#[cfg(test)]
mod tests {
    use artstudio::app::localization::{labels_for, supported_languages, Language, EN, TC};

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_supported_languages() {
        assert_eq!(supported_languages(), [Language::En, Language::Tc]);
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::En.to_string(), "EN");
        assert_eq!(Language::Tc.to_string(), "TC");
    }

    #[test]
    fn test_labels_for_mapping() {
        assert_eq!(labels_for(Language::En), &EN);
        assert_eq!(labels_for(Language::Tc), &TC);
    }

    #[test]
    fn test_every_label_is_non_empty_in_every_language() {
        for language in supported_languages() {
            for (key, value) in labels_for(language).entries() {
                assert!(!value.is_empty(), "{:?} label '{}' is empty", language, key);
            }
        }
    }

    #[test]
    fn test_both_tables_cover_the_same_keys() {
        let en_keys: Vec<_> = EN.entries().into_iter().map(|(k, _)| k).collect();
        let tc_keys: Vec<_> = TC.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(en_keys, tc_keys);
        assert_eq!(en_keys.len(), 35);
    }

    #[test]
    fn test_tables_are_actually_translated() {
        assert_eq!(EN.dashboard, "Dashboard");
        assert_eq!(TC.dashboard, "儀表板");
        assert_ne!(EN.settings, TC.settings);
        assert_ne!(EN.jackpot, TC.jackpot);
    }

    #[test]
    fn test_language_round_trips_through_serde() {
        let json = serde_json::to_string(&Language::Tc).unwrap();
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Language::Tc);
    }
}
