use super::*;

#[test]
fn upload_endpoint_targets_the_ingestion_route() {
    assert_eq!(upload_endpoint(), "/api/v1/ingestion/upload");
}

#[test]
fn documents_endpoint_targets_the_ingestion_listing() {
    assert_eq!(documents_endpoint(), "/api/v1/ingestion/");
}

#[test]
fn search_endpoint_url_encodes_the_query() {
    assert_eq!(
        search_endpoint("Tāla evolution"),
        "/api/v1/analysis/search?query=T%C4%81la%20evolution"
    );
}

#[test]
fn synthesis_endpoint_url_encodes_the_term() {
    assert_eq!(
        synthesis_endpoint("Desi music"),
        "/api/v1/analysis/synthesis?term=Desi%20music"
    );
}

#[test]
fn join_api_base_strips_a_trailing_slash() {
    assert_eq!(
        join_api_base("http://localhost:8000/", "/api/v1/ingestion/upload"),
        "http://localhost:8000/api/v1/ingestion/upload"
    );
}

#[test]
fn join_api_base_with_an_empty_base_keeps_the_relative_path() {
    assert_eq!(join_api_base("", "/api/v1/analysis/search"), "/api/v1/analysis/search");
}

#[test]
fn status_fallback_detail_formats_the_status() {
    assert_eq!(status_fallback_detail(502), "request failed with status 502");
}
