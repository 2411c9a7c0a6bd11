use crate::router::{handle, serve};
use crate::tests::utils::{body_json, request, test_state};
use serde_json::json;

#[test]
fn created_user_has_no_password_field() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();

    let resp = handle(
        request(
            "POST",
            "/api/users",
            Some(json!({ "username": "maria", "password": "correct horse" })),
        ),
        &state,
    )?;
    assert_eq!(resp.status(), 201);

    let user = body_json(resp);
    assert_eq!(user["username"], "maria");
    assert!(user.get("password").is_none());
    Ok(())
}

#[test]
fn duplicate_and_short_credentials_are_rejected() {
    let state = test_state();
    let body = json!({ "username": "maria", "password": "correct horse" });

    assert_eq!(serve(request("POST", "/api/users", Some(body.clone())), &state).status(), 201);

    let resp = serve(request("POST", "/api/users", Some(body)), &state);
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["message"], "Bad Request: Username already taken");

    let resp = serve(
        request("POST", "/api/users", Some(json!({ "username": "al", "password": "short" }))),
        &state,
    );
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["errors"].as_array().map(Vec::len), Some(2));
}

#[test]
fn empty_body_is_bad_request() {
    let state = test_state();
    let resp = serve(request("POST", "/api/users", None), &state);
    assert_eq!(resp.status(), 400);
}
