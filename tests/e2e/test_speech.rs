use crate::helpers::{MockProvider, TestContext};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use stillpoint_backend::domain::speech::DEGRADED_SERVICE_MESSAGE;

#[tokio::test]
async fn it_should_return_audio_from_the_first_tier() {
    let ctx = TestContext::all_healthy().await;

    let response = ctx
        .client
        .post(
            "/api/speech/synthesize",
            &json!({ "text": "Breathe in. Breathe out." }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("audio/mpeg"));
    assert_eq!(response.header("x-voice-provider"), Some("gemini-generative"));
    assert_eq!(&response.body[..], b"generative-audio");

    // Short-circuit: nothing below the first tier is ever invoked
    assert_eq!(ctx.generative.calls(), 1);
    assert_eq!(ctx.studio.calls(), 0);
    assert_eq!(ctx.neural.calls(), 0);
    assert_eq!(ctx.override_provider.calls(), 0);
}

#[tokio::test]
async fn it_should_reject_empty_text_without_touching_any_provider() {
    let ctx = TestContext::all_healthy().await;

    let response = ctx
        .client
        .post("/api/speech/synthesize", &json!({ "text": "" }))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json().unwrap();
    assert_eq!(body["message"], "Invalid input: Text cannot be empty");

    assert_eq!(ctx.generative.calls(), 0);
    assert_eq!(ctx.studio.calls(), 0);
    assert_eq!(ctx.neural.calls(), 0);
    assert_eq!(ctx.override_provider.calls(), 0);
}

#[tokio::test]
async fn it_should_reject_oversized_text() {
    let ctx = TestContext::all_healthy().await;

    let response = ctx
        .client
        .post(
            "/api/speech/synthesize",
            &json!({ "text": "a".repeat(10_001) }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ctx.generative.calls(), 0);
}

#[tokio::test]
async fn it_should_fall_back_to_the_next_tier_on_failure() {
    let ctx = TestContext::new(
        MockProvider::failing(),
        MockProvider::succeeding(b"studio-audio"),
        MockProvider::succeeding(b"neural-audio"),
        MockProvider::succeeding(b"override-audio"),
    )
    .await;

    let response = ctx
        .client
        .post(
            "/api/speech/synthesize",
            &json!({ "text": "Rest your shoulders. Soften your jaw." }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("audio/mpeg"));
    assert_eq!(response.header("x-voice-provider"), Some("cloud-tts-studio"));
    assert_eq!(&response.body[..], b"studio-audio");

    assert_eq!(ctx.generative.calls(), 1);
    assert_eq!(ctx.studio.calls(), 1);
    assert_eq!(ctx.neural.calls(), 0);
}

#[tokio::test]
async fn it_should_return_the_degraded_message_when_every_tier_fails() {
    let ctx = TestContext::new(
        MockProvider::failing(),
        MockProvider::unconfigured(),
        MockProvider::without_audio(),
        MockProvider::succeeding(b"override-audio"),
    )
    .await;

    let response = ctx
        .client
        .post("/api/speech/synthesize", &json!({ "text": "Hello." }))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json().unwrap();
    assert_eq!(body["message"], DEGRADED_SERVICE_MESSAGE);

    // No provider detail leaks to the caller
    let text = response.text();
    assert!(!text.contains("credential"));
    assert!(!text.contains("audio data"));
    assert!(!text.contains("inline"));

    assert_eq!(ctx.generative.calls(), 1);
    assert_eq!(ctx.studio.calls(), 1);
    assert_eq!(ctx.neural.calls(), 1);
    assert_eq!(ctx.override_provider.calls(), 0);
}

#[tokio::test]
async fn it_should_serve_wav_from_the_override_provider() {
    let ctx = TestContext::all_healthy().await;

    let response = ctx
        .client
        .post(
            "/api/speech/synthesize",
            &json!({ "text": "Hello.", "useOverrideProvider": true }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("audio/wav"));
    assert_eq!(response.header("x-voice-provider"), Some("openai-audio"));
    assert_eq!(&response.body[..], b"override-audio");

    assert_eq!(ctx.override_provider.calls(), 1);
    assert_eq!(ctx.generative.calls(), 0);
}

#[tokio::test]
async fn it_should_fall_through_to_the_ladder_when_the_override_fails() {
    let ctx = TestContext::new(
        MockProvider::failing(),
        MockProvider::succeeding(b"studio-audio"),
        MockProvider::succeeding(b"neural-audio"),
        MockProvider::without_audio(),
    )
    .await;

    let response = ctx
        .client
        .post(
            "/api/speech/synthesize",
            &json!({ "text": "Hello.", "useOverrideProvider": true }),
        )
        .await
        .unwrap();

    // Two failures were swallowed (override, first tier), the request
    // still succeeds off the second tier.
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("audio/mpeg"));
    assert_eq!(&response.body[..], b"studio-audio");

    assert_eq!(ctx.override_provider.calls(), 1);
    assert_eq!(ctx.generative.calls(), 1);
    assert_eq!(ctx.studio.calls(), 1);
    assert_eq!(ctx.neural.calls(), 0);
}

#[tokio::test]
async fn it_should_accept_a_male_voice_request() {
    let ctx = TestContext::all_healthy().await;

    let response = ctx
        .client
        .post(
            "/api/speech/synthesize",
            &json!({ "text": "Good evening.", "gender": "MALE" }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("x-character-count"), Some("13"));
}
