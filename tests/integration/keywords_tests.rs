use crate::common::{TEST_KEY, keywords_client};
use assert_json_diff::assert_json_eq;
use builtwith_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

fn lookup(domains: &[String]) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("KEY".into(), TEST_KEY.into()),
        Matcher::UrlEncoded("LOOKUP".into(), domains.join(",")),
    ])
}

#[tokio::test]
async fn get_keywords_single_domain() {
    let body = json!({"Domain": "wayfair.com", "Keywords": ["furniture", "rugs"]});
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/kw2/api.json")
        .match_query(Matcher::Exact(format!("KEY={TEST_KEY}&LOOKUP=wayfair.com")))
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;

    let result = keywords_client(&server)
        .get_keywords(&KeywordsRequest::new("wayfair.com"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_json_eq!(result, body);
}

#[tokio::test]
async fn get_keywords_xml_is_raw() {
    let xml = "<Keywords><Domain>wayfair.com</Domain></Keywords>";
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/kw2/api.xml")
        .match_query(Matcher::Any)
        .with_body(xml)
        .create_async()
        .await;

    let response = keywords_client(&server)
        .get_keywords_as(&KeywordsRequest::new("wayfair.com"), KeywordsFormat::Xml)
        .await
        .unwrap();

    assert_eq!(response.into_raw().as_deref(), Some(xml));
}

#[tokio::test]
async fn batches_cover_all_domains_in_order() {
    let domains: Vec<String> = (0..20).map(|i| format!("site{i:02}.com")).collect();
    let mut server = Server::new_async().await;

    let mut mocks = Vec::new();
    for (i, chunk) in domains.chunks(8).enumerate() {
        let mock = server
            .mock("GET", "/kw2/api.json")
            .match_query(lookup(chunk))
            .with_body(json!({"Batch": i, "Domains": chunk}).to_string())
            .expect(1)
            .create_async()
            .await;
        mocks.push(mock);
    }
    assert_eq!(mocks.len(), 3);

    let result = keywords_client(&server)
        .get_keywords_batch(&domains, 8)
        .await
        .unwrap();

    for mock in &mocks {
        mock.assert_async().await;
    }
    assert_eq!(result.batches, 3);
    assert_eq!(result.skipped, 0);

    let returned: Vec<String> = result
        .results
        .iter()
        .flat_map(|r| r["Domains"].as_array().cloned().unwrap_or_default())
        .filter_map(|d| d.as_str().map(String::from))
        .collect();
    assert_eq!(returned, domains);
    assert_eq!(result.results[2]["Batch"], 2);
}

#[tokio::test]
async fn non_object_batches_are_counted_as_skipped() {
    let domains: Vec<String> = ["a.com", "b.com", "c.com"].map(String::from).to_vec();
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/kw2/api.json")
        .match_query(lookup(&domains[..2]))
        .with_body(r#"{"Domain": "a.com"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/kw2/api.json")
        .match_query(lookup(&domains[2..]))
        .with_body(r#"["unexpected", "shape"]"#)
        .create_async()
        .await;

    let result = keywords_client(&server)
        .get_keywords_batch(&domains, 2)
        .await
        .unwrap();

    assert_eq!(result.batches, 2);
    assert_eq!(result.results.len(), 1);
    assert_eq!(result.skipped, 1);
    assert!(!result.is_complete());
}

#[tokio::test]
async fn failing_batch_aborts_the_loop() {
    let domains: Vec<String> = (0..5).map(|i| format!("d{i}.com")).collect();
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/kw2/api.json")
        .match_query(lookup(&domains[..2]))
        .with_body(r#"{"Errors": "invalid key"}"#)
        .expect(1)
        .create_async()
        .await;
    let rest = server
        .mock("GET", "/kw2/api.json")
        .match_query(Matcher::UrlEncoded("LOOKUP".into(), "d2.com,d3.com".into()))
        .expect(0)
        .create_async()
        .await;

    let err = keywords_client(&server)
        .get_keywords_batch(&domains, 2)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("invalid key"));
    first.assert_async().await;
    rest.assert_async().await;
}
