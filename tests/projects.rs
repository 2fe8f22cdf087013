mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::{bearer, init_app, send, sign_up, test_state};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

#[test_log::test(actix_rt::test)]
async fn test_project_ownership_flow() {
    let app = init_app(test_state()).await;
    let alice = sign_up(&app, "Alice Smith", "alice@example.com").await;
    let bob = sign_up(&app, "Bobby Jones", "bob@example.com").await;

    // 1. Alice creates a project
    let req = test::TestRequest::post()
        .uri("/api/v1/projects/create-project")
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "title": "  Roadmap  ", "description": "Q3 plans" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED, "Body: {}", body);
    let created = body["data"].clone();
    assert_eq!(created["title"], "Roadmap");
    assert_eq!(created["user"], alice.id.as_str());
    let id = created["_id"].as_str().unwrap().to_string();

    // 2. Bob may not update it, and nothing changes
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/projects/update-project/{}", id))
        .insert_header(bearer(&bob.token))
        .set_json(json!({ "title": "Hijacked" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "User not authorised to update the project.");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/projects/get-project/{}", id))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], created);

    // 3. Alice updates the title only
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/projects/update-project/{}", id))
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "title": "New title" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "New title");
    assert_eq!(body["data"]["description"], created["description"]);
    assert_eq!(body["data"]["user"], created["user"]);
    assert_eq!(body["data"]["createdAt"], created["createdAt"]);

    // 4. Bob may not delete it either
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/projects/delete-project/{}", id))
        .insert_header(bearer(&bob.token))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "User not authorised to delete the project.");

    // 5. Alice deletes it and gets the removed project back
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/projects/delete-project/{}", id))
        .insert_header(bearer(&alice.token))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["_id"], id.as_str());
    assert_eq!(body["data"]["title"], "New title");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/projects/get-project/{}", id))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Project not found");
}

#[actix_rt::test]
async fn test_list_is_scoped_and_may_be_empty() {
    let app = init_app(test_state()).await;
    let alice = sign_up(&app, "Alice Smith", "alice@example.com").await;
    let bob = sign_up(&app, "Bobby Jones", "bob@example.com").await;

    for title in ["First", "Second"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/projects/create-project")
            .insert_header(bearer(&alice.token))
            .set_json(json!({ "title": title, "description": "d" }))
            .to_request();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/projects/get-projects")
        .insert_header(bearer(&bob.token))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!([]));

    let req = test::TestRequest::get()
        .uri("/api/v1/projects/get-projects")
        .insert_header(bearer(&alice.token))
        .to_request();
    let (_, body) = send(&app, req).await;
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[actix_rt::test]
async fn test_protected_routes_need_a_token() {
    let app = init_app(test_state()).await;
    let id = Uuid::new_v4();

    let requests = vec![
        test::TestRequest::post()
            .uri("/api/v1/projects/create-project")
            .set_json(json!({ "title": "t", "description": "d" }))
            .to_request(),
        test::TestRequest::get()
            .uri("/api/v1/projects/get-projects")
            .to_request(),
        test::TestRequest::put()
            .uri(&format!("/api/v1/projects/update-project/{}", id))
            .set_json(json!({ "title": "t" }))
            .to_request(),
        test::TestRequest::delete()
            .uri(&format!("/api/v1/projects/delete-project/{}", id))
            .to_request(),
    ];

    for req in requests {
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Not authorized, no token");
    }
}

#[actix_rt::test]
async fn test_create_validation_and_owner_injection() {
    let app = init_app(test_state()).await;
    let alice = sign_up(&app, "Alice Smith", "alice@example.com").await;
    let bob = sign_up(&app, "Bobby Jones", "bob@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/projects/create-project")
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "title": "   " }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("title") && error.contains("description"), "{}", error);

    // A `user` key in the payload never decides ownership.
    let req = test::TestRequest::post()
        .uri("/api/v1/projects/create-project")
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "title": "Mine", "description": "d", "user": bob.id.as_str() }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user"], alice.id.as_str());
    let id = body["data"]["_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/projects/update-project/{}", id))
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "user": bob.id.as_str() }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"], alice.id.as_str());
}

#[actix_rt::test]
async fn test_unknown_ids() {
    let app = init_app(test_state()).await;
    let alice = sign_up(&app, "Alice Smith", "alice@example.com").await;

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/projects/get-project/{}", id))
            .to_request();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/projects/update-project/{}", id))
            .insert_header(bearer(&alice.token))
            .set_json(json!({ "title": "t" }))
            .to_request();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[actix_rt::test]
async fn test_update_cannot_blank_required_fields() {
    let app = init_app(test_state()).await;
    let alice = sign_up(&app, "Alice Smith", "alice@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/projects/create-project")
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "title": "Roadmap", "description": "Q3 plans" }))
        .to_request();
    let (_, body) = send(&app, req).await;
    let created = body["data"].clone();
    let id = created["_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/projects/update-project/{}", id))
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "title": "   ", "description": "" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid or missing fields: description, title");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/projects/get-project/{}", id))
        .to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(body["data"], created);

    // A padded title is trimmed rather than rejected.
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/projects/update-project/{}", id))
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "title": "  Roadmap v2 " }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Roadmap v2");
}
