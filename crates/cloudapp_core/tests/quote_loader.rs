use async_trait::async_trait;
use cloudapp_core::{
    HttpQuoteSource, Quote, QuoteFetchError, QuoteLoader, QuoteOutcome, QuotePhase, QuoteSource,
    QuoteTargets, RecordingSurface,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FALLBACK_TEXT: &str =
    "\"Kesuksesan adalah hasil dari persiapan, kerja keras, dan belajar dari kegagalan.\"";
const FALLBACK_AUTHOR: &str = "- Colin Powell";

async fn server_responding(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/random"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn loader_for(server: &MockServer) -> QuoteLoader<HttpQuoteSource> {
    QuoteLoader::new(HttpQuoteSource::new(format!("{}/random", server.uri())).unwrap())
}

#[tokio::test]
async fn successful_fetch_renders_quoted_content_and_author() {
    let server = server_responding(
        ResponseTemplate::new(200).set_body_string(r#"{"content":"X","author":"Y"}"#),
    )
    .await;
    let loader = loader_for(&server);
    let mut surface = RecordingSurface::new();

    let outcome = loader.load(&mut surface).await;

    assert!(outcome.is_success());
    assert_eq!(surface.quote_text, "\"X\"");
    assert_eq!(surface.quote_author, "- Y");
    assert_eq!(
        surface.quote_history.first().unwrap(),
        &("Memuat quote...".to_string(), "- Loading...".to_string())
    );
    assert_eq!(loader.phase(), QuotePhase::Idle);
}

#[tokio::test]
async fn server_error_renders_fallback_pair() {
    let server = server_responding(ResponseTemplate::new(500)).await;
    let loader = loader_for(&server);
    let mut surface = RecordingSurface::new();

    let outcome = loader.load(&mut surface).await;

    assert!(matches!(
        outcome,
        QuoteOutcome::Failure(QuoteFetchError::Status(500))
    ));
    assert_eq!(surface.quote_text, FALLBACK_TEXT);
    assert_eq!(surface.quote_author, FALLBACK_AUTHOR);
}

#[tokio::test]
async fn malformed_body_renders_fallback_pair() {
    let server = server_responding(
        ResponseTemplate::new(200).set_body_string(r#"{"quote":"missing fields"}"#),
    )
    .await;
    let loader = loader_for(&server);
    let mut surface = RecordingSurface::new();

    let outcome = loader.load(&mut surface).await;

    assert!(matches!(
        outcome,
        QuoteOutcome::Failure(QuoteFetchError::Parse(_))
    ));
    assert_eq!(surface.quote_text, FALLBACK_TEXT);
    assert_eq!(surface.quote_author, FALLBACK_AUTHOR);
}

#[tokio::test]
async fn unreachable_endpoint_renders_fallback_pair() {
    let loader = QuoteLoader::new(HttpQuoteSource::new("http://127.0.0.1:1/random").unwrap());
    let mut surface = RecordingSurface::new();

    let outcome = loader.load(&mut surface).await;

    assert!(matches!(
        outcome,
        QuoteOutcome::Failure(QuoteFetchError::Network(_))
    ));
    assert_eq!(surface.quote_author, FALLBACK_AUTHOR);
}

struct StaticSource;

#[async_trait(?Send)]
impl QuoteSource for StaticSource {
    async fn fetch_quote(&self) -> Result<Quote, QuoteFetchError> {
        Ok(Quote {
            content: "never shown".to_string(),
            author: "nobody".to_string(),
        })
    }
}

#[derive(Default)]
struct HeadlessSurface {
    writes: usize,
}

impl QuoteTargets for HeadlessSurface {
    fn has_quote_targets(&self) -> bool {
        false
    }

    fn set_quote_text(&mut self, _text: &str) {
        self.writes += 1;
    }

    fn set_quote_author(&mut self, _author: &str) {
        self.writes += 1;
    }
}

#[tokio::test]
async fn surface_without_quote_targets_is_skipped() {
    let loader = QuoteLoader::new(StaticSource);
    let mut surface = HeadlessSurface::default();

    let outcome = loader.load(&mut surface).await;

    assert!(matches!(outcome, QuoteOutcome::Skipped));
    assert_eq!(surface.writes, 0);
}
