use super::*;

mod numeric_entity_tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_entities() {
        assert_eq!(count_numeric_entities(""), 0);
        assert_eq!(count_numeric_entities("no numbers here"), 0);
    }

    #[test]
    fn test_grouped_amount_is_one_entity() {
        assert_eq!(count_numeric_entities("1,000,000"), 1);
        assert_eq!(count_numeric_entities("amount: 1,000,000 total"), 1);
    }

    #[test]
    fn test_decimal_amount_is_one_entity() {
        assert_eq!(count_numeric_entities("2500.75"), 1);
        assert_eq!(count_numeric_entities("price 2,500.75"), 1);
    }

    #[test]
    fn test_only_one_decimal_part_is_consumed() {
        // Maximal munch takes "1.2", then "3" starts a fresh match.
        assert_eq!(count_numeric_entities("1.2.3"), 2);
    }

    #[test]
    fn test_bare_commas_are_not_entities() {
        assert_eq!(count_numeric_entities(",,,"), 0);
        assert_eq!(count_numeric_entities("a, b, c"), 0);
    }

    #[test]
    fn test_trailing_dot_without_digit_is_not_decimal() {
        // "100." ends the match at the run; the dot is punctuation.
        assert_eq!(count_numeric_entities("100."), 1);
        assert_eq!(count_numeric_entities("100. 200"), 2);
    }

    #[test]
    fn test_multiple_entities_are_counted_separately() {
        assert_eq!(count_numeric_entities("id 42, amount 1,000 and 3.5%"), 3);
    }

    #[test]
    fn test_non_ascii_text_is_handled() {
        assert_eq!(count_numeric_entities("montant 1 000,50 €"), 2);
    }
}

mod date_token_tests {
    use super::*;

    #[test]
    fn test_plain_years_match() {
        assert!(has_date_like_token("signed in 2021"));
        assert!(has_date_like_token("1999"));
        assert!(has_date_like_token("2000-01-01"));
    }

    #[test]
    fn test_non_year_four_digit_runs_do_not_match() {
        assert!(!has_date_like_token("2103"));
        assert!(!has_date_like_token("1899"));
        assert!(!has_date_like_token("0019"));
    }

    #[test]
    fn test_letter_bounded_year_matches() {
        // Not word-boundary semantics: any digit run of exactly four counts.
        assert!(has_date_like_token("a2021b"));
        assert!(has_date_like_token("INV2020X"));
    }

    #[test]
    fn test_longer_digit_runs_do_not_match() {
        assert!(!has_date_like_token("12021"));
        assert!(!has_date_like_token("20210101"));
    }

    #[test]
    fn test_comma_breaks_the_digit_run() {
        // "1,000,000" contains no four-digit run at all.
        assert!(!has_date_like_token("1,000,000"));
        // ...but grouping can create one.
        assert!(has_date_like_token("5,2021"));
    }

    #[test]
    fn test_empty_and_short_runs() {
        assert!(!has_date_like_token(""));
        assert!(!has_date_like_token("202"));
        assert!(!has_date_like_token("19"));
    }
}

mod signature_marker_tests {
    use super::*;

    #[test]
    fn test_signature_and_signed_match_case_insensitively() {
        assert!(has_signature_marker("Signature present"));
        assert!(has_signature_marker("SIGNED by the owner"));
        assert!(has_signature_marker("countersigned"));
    }

    #[test]
    fn test_unrelated_text_does_not_match() {
        assert!(!has_signature_marker(""));
        assert!(!has_signature_marker("sign here"));
        assert!(!has_signature_marker("design document"));
    }
}

mod keyword_tests {
    use super::*;

    #[test]
    fn test_table_has_fourteen_entries() {
        assert_eq!(KEYWORD_TABLE.len(), 14);
        assert_eq!(KEYWORD_TABLE[0], ("deed", 10));
        assert_eq!(KEYWORD_TABLE[13], ("agreement", 6));
    }

    #[test]
    fn test_hits_enumerate_every_entry_in_table_order() {
        let (_, hits) = score_by_presence("nothing relevant");
        let keys: Vec<&str> = hits.iter().map(|(k, _)| k).collect();
        let expected: Vec<&str> = KEYWORD_TABLE.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, expected);
        assert_eq!(hits.hit_count(), 0);
    }

    #[test]
    fn test_weights_sum_for_present_keywords() {
        let (weight, hits) = score_by_presence("This deed has a signature");
        assert_eq!(weight, 16);
        assert_eq!(hits.get("deed"), Some(1));
        assert_eq!(hits.get("signature"), Some(1));
        assert_eq!(hits.get("invoice"), Some(0));
        assert_eq!(hits.hit_count(), 2);
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let (weight, hits) = score_by_presence("PROPERTY VALUATION");
        assert_eq!(hits.get("property"), Some(1));
        assert_eq!(hits.get("valuation"), Some(1));
        assert_eq!(weight, 16);
    }

    #[test]
    fn test_short_keywords_fire_inside_words() {
        // "id" is contained in "paid"; "tax" in "taxi".
        let (_, hits) = score_by_presence("paid by taxi");
        assert_eq!(hits.get("id"), Some(1));
        assert_eq!(hits.get("tax"), Some(1));
    }

    #[test]
    fn test_hits_serialize_as_ordered_json_map() {
        let (_, hits) = score_by_presence("deed agreement");
        let json = serde_json::to_string(&hits).unwrap();
        // "deed" is first in the table, "agreement" last.
        assert!(json.starts_with("{\"deed\":1"));
        assert!(json.ends_with("\"agreement\":1}"));
    }

    #[test]
    fn test_unknown_keyword_lookup_is_none() {
        let (_, hits) = score_by_presence("deed");
        assert_eq!(hits.get("mortgage"), None);
    }
}

mod feature_vector_tests {
    use super::*;

    #[test]
    fn test_extract_bundles_all_detectors() {
        let fv = FeatureVector::extract("Deed signed 2021 for 1,000,000 and 50.5");
        // 2021, 1,000,000 and 50.5 — the year token is also a numeric entity.
        assert_eq!(fv.numeric_entity_count, 3);
        assert!(fv.has_date);
        assert!(fv.has_signature);
        assert_eq!(fv.keyword_hits.get("deed"), Some(1));
        assert!(fv.keyword_weight >= 10);
    }

    #[test]
    fn test_extract_on_empty_text() {
        let fv = FeatureVector::extract("");
        assert_eq!(fv.numeric_entity_count, 0);
        assert!(!fv.has_date);
        assert!(!fv.has_signature);
        assert_eq!(fv.keyword_weight, 0);
        assert_eq!(fv.keyword_hits.len(), KEYWORD_TABLE.len());
    }
}
