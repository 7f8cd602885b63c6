use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use product_catalog::{router, AppState, Product, ProductFields};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(state: &AppState, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn parse<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn test_create_and_get_product() {
    let state = AppState::default();

    let (status, body) = send(
        &state,
        "POST",
        "/products",
        Some(json!({"name": "键盘", "description": "机械键盘", "price": 299.5, "category": "外设"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Product = parse(&body);
    assert_eq!(created.name, "键盘");
    assert_eq!(created.price.as_f64(), Some(299.5));

    let (status, body) = send(&state, "GET", &format!("/products/{}", created.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse::<Product>(&body), created);
}

#[tokio::test]
async fn test_product_json_shape() {
    let state = AppState::default();

    let (_, body) = send(&state, "POST", "/products", Some(json!({"name": "鼠标"}))).await;
    let value: Value = parse(&body);
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, ["category", "description", "id", "name", "price"]);
    assert_eq!(value["description"], "");
    assert_eq!(value["price"], 0);
    assert_eq!(value["category"], "General");
}

#[tokio::test]
async fn test_price_keeps_submitted_number_form() {
    let state = AppState::default();

    let (_, body) = send(&state, "POST", "/products", Some(json!({"name": "A", "price": 5}))).await;
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains(r#""price":5"#));
    assert!(!text.contains(r#""price":5.0"#));

    let (_, body) = send(&state, "POST", "/products", Some(json!({"name": "B"}))).await;
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains(r#""price":0"#));
    assert!(!text.contains(r#""price":0.0"#));

    let (_, body) = send(&state, "POST", "/products", Some(json!({"name": "C", "price": 19.99}))).await;
    let product: Product = parse(&body);
    assert_eq!(product.price.as_f64(), Some(19.99));
}

#[tokio::test]
async fn test_name_round_trips_unchanged() {
    let state = AppState::default();

    let (status, body) = send(
        &state,
        "POST",
        "/products",
        Some(json!({"name": "  Keyboard Pro  "})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Product = parse(&body);
    assert_eq!(created.name, "  Keyboard Pro  ");

    let (_, body) = send(&state, "GET", &format!("/products/{}", created.id), None).await;
    assert_eq!(parse::<Product>(&body).name, "  Keyboard Pro  ");

    let (status, _) = send(&state, "POST", "/products", Some(json!({"name": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_requires_name() {
    let state = AppState::default();

    for body in [json!({}), json!({"name": ""}), json!({"name": null, "price": 3})] {
        let (status, _) = send(&state, "POST", "/products", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (status, body) = send(&state, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(parse::<Vec<Product>>(&body).is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let state = AppState::default();

    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = router(state.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, _) = send(&state, "POST", "/products", Some(json!("name"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&state, "POST", "/products", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&state, "POST", "/products", Some(json!({"name": "a", "price": "free"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_product_is_not_found() {
    let state = AppState::default();

    let (status, body) = send(&state, "GET", "/products/does-not-exist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: Value = parse(&body);
    assert_eq!(error["error"], "NOT_FOUND");
    assert_eq!(error["code"], 404);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let state = AppState::default();
    let existing = state
        .product_store
        .create(
            ProductFields::named("耳机")
                .with_description("降噪")
                .with_price(899)
                .with_category("音频"),
        )
        .unwrap();

    let (status, body) = send(
        &state,
        "PUT",
        &format!("/products/{}", existing.id),
        Some(json!({"name": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let updated: Product = parse(&body);
    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.name, "X");
    assert_eq!(updated.description, "");
    assert_eq!(updated.price, serde_json::Number::from(0));
    assert_eq!(updated.category, "General");
}

#[tokio::test]
async fn test_update_errors() {
    let state = AppState::default();

    let (status, _) = send(&state, "PUT", "/products/unknown", Some(json!({"name": "X"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&state, "PUT", "/products/unknown", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&state, "PUT", "/products/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let existing = state.product_store.create(ProductFields::named("A")).unwrap();
    let (status, _) = send(
        &state,
        "PUT",
        &format!("/products/{}", existing.id),
        Some(json!({"description": "no name"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(state.product_store.get(&existing.id).unwrap(), existing);
}

#[tokio::test]
async fn test_delete_product() {
    let state = AppState::default();
    let existing = state.product_store.create(ProductFields::named("A")).unwrap();
    let uri = format!("/products/{}", existing.id);

    let (status, body) = send(&state, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = send(&state, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&state, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_products() {
    let state = AppState::default();

    let (_, a) = send(&state, "POST", "/products", Some(json!({"name": "A"}))).await;
    let (_, b) = send(&state, "POST", "/products", Some(json!({"name": "B", "price": 2}))).await;
    let a: Product = parse(&a);
    let b: Product = parse(&b);

    let (status, body) = send(&state, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);

    let listed: Vec<Product> = parse(&body);
    assert_eq!(listed.len(), 2);
    assert!(listed.contains(&a));
    assert!(listed.contains(&b));
}

#[tokio::test]
async fn test_feedback() {
    let state = AppState::default();

    let (status, body) = send(
        &state,
        "POST",
        "/feedback",
        Some(json!({"name": "张三", "email": "user@example.com", "message": "很好用"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let feedback: Value = parse(&body);
    assert_eq!(feedback["email"], "user@example.com");
    assert_eq!(feedback["message"], "很好用");

    let (status, _) = send(
        &state,
        "POST",
        "/feedback",
        Some(json!({"email": "username@domain..com", "message": "hi"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&state, "POST", "/feedback", Some(json!({"email": "user@example.com"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_check() {
    let state = AppState::default();
    state.product_store.create(ProductFields::named("A")).unwrap();

    let (status, body) = send(&state, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);

    let health: Value = parse(&body);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["store"]["products_count"], 1);
}
