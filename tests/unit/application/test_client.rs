use builtwith_client::application::config::Config;
use builtwith_client::prelude::*;
use tokio_test::block_on;

// Nothing listens on this address; none of these calls reach the network.
fn unreachable_config() -> Config {
    Config::with_api_key("k").with_base_url("http://127.0.0.1:9")
}

#[tokio::test]
async fn since_with_include_all_is_rejected_locally() {
    let client = ListsClient::new(unreachable_config()).unwrap();
    let request = TechListRequest::new("Shopify")
        .with_since("2024-01-01")
        .with_include_all(true);

    let err = client.get_tech_list(&request).await.unwrap_err();
    assert!(err.is_validation(), "unexpected error: {err:?}");

    let err = client
        .get_tech_list_as(&request, ListFormat::Csv)
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn more_than_16_domains_is_rejected_locally() {
    let client = KeywordsClient::new(unreachable_config()).unwrap();
    let domains: Vec<String> = (0..17).map(|i| format!("site{i}.com")).collect();

    let err = client
        .get_keywords(&KeywordsRequest::for_domains(domains))
        .await
        .unwrap_err();
    match err {
        AppError::Validation(msg) => assert!(msg.contains("maximum 16 domains")),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn batch_size_out_of_range_is_rejected() {
    let client = KeywordsClient::new(unreachable_config()).unwrap();
    let domains = vec!["a.com".to_string()];

    for batch_size in [0, 17, 100] {
        let err = client
            .get_keywords_batch(&domains, batch_size)
            .await
            .unwrap_err();
        assert!(err.is_validation(), "batch size {batch_size}: {err:?}");
    }
}

#[test]
fn empty_batch_issues_no_request() {
    let client = KeywordsClient::new(unreachable_config()).unwrap();
    let result = block_on(client.get_keywords_batch(&[], 16)).unwrap();
    assert_eq!(result.batches, 0);
    assert!(result.results.is_empty());
    assert!(result.is_complete());
}
