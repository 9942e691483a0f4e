//! End-to-end tests for the analyze endpoint.
//!
//! Runs the full router against a bound socket with the mock vision backend,
//! covering method rejection, field validation, reply pass-through, failure
//! collapsing, prompt content, and idempotence.

use std::sync::Arc;

use jasmim_api::{app, AppState, MSG_INTERNAL_FAILURE, MSG_REQUIRED_FIELDS};
use jasmim_inference::MockVisionBackend;

const ANALYZE_PATH: &str = "/api/v1/plants/analyze";

/// Bind the app on an ephemeral port and return its base URL.
async fn spawn_app(backend: MockVisionBackend) -> String {
    let state = AppState {
        backend: Arc::new(backend),
    };
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A schema-conformant healthy-plant verdict.
fn valid_reply() -> serde_json::Value {
    serde_json::json!({
        "identificacao": {
            "nome_popular": "Costela-de-adão",
            "nome_cientifico": "Monstera deliciosa",
            "descricao": "Folhagem grande e recortada, típica de climas úmidos."
        },
        "saude": {
            "status": "Saudável",
            "observacao": "Folhas vigorosas e sem manchas."
        },
        "plano_de_acao": {
            "titulo": "Plano de Cuidados",
            "passos": [
                {"titulo": "Rega", "instrucao": "Regue duas vezes por semana no calor."},
                {"titulo": "Luminosidade", "instrucao": "Luz indireta brilhante."},
                {"titulo": "Adubação", "instrucao": "Adubo orgânico a cada 30 dias."}
            ]
        },
        "disclaimer": "Lembre-se que esta é uma análise por IA. Para casos graves, sempre consulte um agrônomo ou especialista local."
    })
}

fn valid_request() -> serde_json::Value {
    serde_json::json!({
        "image": "data:image/jpeg;base64,QUJDRA==",
        "analysis_type": "identificacao"
    })
}

#[tokio::test]
async fn test_wrong_method_is_rejected_before_anything_else() {
    let backend = MockVisionBackend::new().with_reply(valid_reply().to_string());
    let base = spawn_app(backend.clone()).await;
    let client = reqwest::Client::new();

    for request in [
        client.get(format!("{}{}", base, ANALYZE_PATH)),
        client.put(format!("{}{}", base, ANALYZE_PATH)),
        client.delete(format!("{}{}", base, ANALYZE_PATH)),
    ] {
        let response = request.send().await.unwrap();
        assert_eq!(response.status(), 405);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({"error": "Method Not Allowed"}));
    }

    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_missing_fields_answer_400_without_model_call() {
    let backend = MockVisionBackend::new().with_reply(valid_reply().to_string());
    let base = spawn_app(backend.clone()).await;
    let client = reqwest::Client::new();

    let bodies = [
        serde_json::json!({"analysis_type": "diagnostico"}),
        serde_json::json!({"image": "data:image/png;base64,AA"}),
        serde_json::json!({}),
        serde_json::json!({"image": "", "analysis_type": "diagnostico"}),
    ];

    for body in bodies {
        let response = client
            .post(format!("{}{}", base, ANALYZE_PATH))
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400, "body: {}", body);
        let reply: serde_json::Value = response.json().await.unwrap();
        assert_eq!(reply, serde_json::json!({"error": MSG_REQUIRED_FIELDS}));
    }

    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_valid_reply_is_passed_through_unmodified() {
    let backend = MockVisionBackend::new().with_reply(valid_reply().to_string());
    let base = spawn_app(backend.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{}{}", base, ANALYZE_PATH))
        .json(&valid_request())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, valid_reply());

    // Exactly one model call, carrying the image reference untouched
    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].image_url, "data:image/jpeg;base64,QUJDRA==");
}

#[tokio::test]
async fn test_diagnosis_reply_keeps_conditional_key() {
    let mut reply = valid_reply();
    reply["saude"]["status"] = serde_json::json!("Com Problemas");
    reply["diagnostico"] = serde_json::json!({
        "problema": "Ferrugem",
        "causa_provavel": "Umidade alta com pouca circulação de ar",
        "sintomas_visiveis": "Pontos alaranjados no verso das folhas"
    });

    let backend = MockVisionBackend::new().with_reply(reply.to_string());
    let base = spawn_app(backend).await;

    let response = reqwest::Client::new()
        .post(format!("{}{}", base, ANALYZE_PATH))
        .json(&serde_json::json!({
            "image": "https://example.com/doente.jpg",
            "analysis_type": "diagnostico"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, reply);
}

#[tokio::test]
async fn test_unparseable_reply_collapses_to_generic_500() {
    let backend = MockVisionBackend::new().with_reply("Claro! Aqui está a análise: {");
    let base = spawn_app(backend).await;

    let response = reqwest::Client::new()
        .post(format!("{}{}", base, ANALYZE_PATH))
        .json(&valid_request())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"error": MSG_INTERNAL_FAILURE}));
}

#[tokio::test]
async fn test_reply_missing_required_keys_collapses_to_generic_500() {
    let mut reply = valid_reply();
    reply.as_object_mut().unwrap().remove("identificacao");

    let backend = MockVisionBackend::new().with_reply(reply.to_string());
    let base = spawn_app(backend).await;

    let response = reqwest::Client::new()
        .post(format!("{}{}", base, ANALYZE_PATH))
        .json(&valid_request())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"error": MSG_INTERNAL_FAILURE}));
}

#[tokio::test]
async fn test_backend_failure_is_logged_not_leaked() {
    let backend = MockVisionBackend::new().with_failure("provider credentials rejected");
    let base = spawn_app(backend.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{}{}", base, ANALYZE_PATH))
        .json(&valid_request())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let text = response.text().await.unwrap();
    assert!(!text.contains("provider credentials rejected"));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&text).unwrap(),
        serde_json::json!({"error": MSG_INTERNAL_FAILURE})
    );
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_prompt_carries_mode_label_and_schema() {
    let backend = MockVisionBackend::new().with_reply(valid_reply().to_string());
    let base = spawn_app(backend.clone()).await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}{}", base, ANALYZE_PATH))
        .json(&serde_json::json!({
            "image": "https://example.com/a.jpg",
            "analysis_type": "diagnostico"
        }))
        .send()
        .await
        .unwrap();
    client
        .post(format!("{}{}", base, ANALYZE_PATH))
        .json(&serde_json::json!({
            "image": "https://example.com/b.jpg",
            "analysis_type": "identificacao"
        }))
        .send()
        .await
        .unwrap();

    let calls = backend.calls();
    assert_eq!(calls.len(), 2);

    assert!(calls[0].prompt.contains("\"Diagnóstico de Problema\""));
    assert!(calls[1].prompt.contains("\"Identificação e Cuidados\""));

    // Both modes embed the full target-schema description
    for call in &calls {
        assert!(call.prompt.contains("\"identificacao\""));
        assert!(call.prompt.contains("\"plano_de_acao\""));
        assert!(call.prompt.contains("\"disclaimer\""));
    }
}

#[tokio::test]
async fn test_identical_requests_yield_byte_identical_responses() {
    let backend = MockVisionBackend::new().with_reply(valid_reply().to_string());
    let base = spawn_app(backend).await;
    let client = reqwest::Client::new();

    let mut responses = Vec::new();
    for _ in 0..2 {
        let response = client
            .post(format!("{}{}", base, ANALYZE_PATH))
            .json(&valid_request())
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        responses.push(response.bytes().await.unwrap());
    }

    assert_eq!(responses[0], responses[1]);
}

#[tokio::test]
async fn test_health_reports_backend_state() {
    let base = spawn_app(MockVisionBackend::new()).await;
    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], "mock-vision");

    let base = spawn_app(MockVisionBackend::new().with_health(false)).await;
    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "degraded");
}
