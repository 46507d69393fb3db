use builtwith_client::model::requests::{Country, KeywordsRequest, TechListRequest};

fn params_of(request: &TechListRequest) -> Vec<(&'static str, String)> {
    request.to_params("test-key").unwrap()
}

#[test]
fn tech_list_request_builders() {
    let req = TechListRequest::new("Shopify")
        .with_meta(true)
        .with_country(vec!["US", "CA"])
        .with_offset("oQEw")
        .with_since("2024-01-01");

    assert_eq!(req.technology, "Shopify");
    assert!(req.include_meta);
    assert_eq!(
        req.country,
        Some(Country::List(vec!["US".to_string(), "CA".to_string()]))
    );
    assert_eq!(req.offset.as_deref(), Some("oQEw"));
    assert_eq!(req.since.as_deref(), Some("2024-01-01"));
    assert!(!req.include_all);
}

#[test]
fn shopify_us_query() {
    let params = params_of(&TechListRequest::new("Shopify").with_country("US"));
    assert_eq!(
        params,
        vec![
            ("KEY", "test-key".to_string()),
            ("TECH", "Shopify".to_string()),
            ("COUNTRY", "US".to_string()),
        ]
    );
}

#[test]
fn technology_with_spaces_is_hyphenated() {
    let params = params_of(&TechListRequest::new("Shopify App"));
    assert_eq!(params[1], ("TECH", "Shopify-App".to_string()));
}

#[test]
fn country_conversions() {
    assert_eq!(Country::from("US").to_param().as_deref(), Some("US"));
    assert_eq!(
        Country::from(&["US", "GB", "AU"][..]).to_param().as_deref(),
        Some("US,GB,AU")
    );
    assert_eq!(Country::from(String::new()).to_param(), None);
}

#[test]
fn country_serializes_untagged() {
    let single = serde_json::to_value(Country::from("US")).unwrap();
    assert_eq!(single, serde_json::json!("US"));

    let list: Country = serde_json::from_value(serde_json::json!(["US", "CA"])).unwrap();
    assert_eq!(list.to_param().as_deref(), Some("US,CA"));
}

#[test]
fn include_all_alone_is_accepted() {
    let params = params_of(&TechListRequest::new("Magento").with_include_all(true));
    assert!(params.contains(&("ALL", "yes".to_string())));
}

#[test]
fn since_and_include_all_fail_for_any_values() {
    for since in ["2024-01-01", "30 Days Ago", "x"] {
        let err = TechListRequest::new("Shopify")
            .with_since(since)
            .with_include_all(true)
            .to_params("test-key")
            .unwrap_err();
        assert!(err.is_validation());
    }
}

#[test]
fn keywords_single_domain() {
    let req = KeywordsRequest::new("wayfair.com");
    assert_eq!(req.len(), 1);
    assert_eq!(
        req.to_params("test-key").unwrap(),
        vec![
            ("KEY", "test-key".to_string()),
            ("LOOKUP", "wayfair.com".to_string()),
        ]
    );
}

#[test]
fn keywords_rejects_any_list_over_16() {
    for len in [17, 20, 64] {
        let domains: Vec<String> = (0..len).map(|i| format!("d{i}.com")).collect();
        let err = KeywordsRequest::for_domains(domains)
            .to_params("test-key")
            .unwrap_err();
        assert!(err.is_validation(), "len {len}");
    }
}
