use super::*;

#[test]
fn post_deserializes_camel_case() {
    let json = r#"{
        "id": 12,
        "title": "Hello",
        "content": "<p>Hi</p>",
        "authorId": 3,
        "createdAt": "2025-06-01T09:00:00",
        "updatedAt": "2025-06-02T10:30:00"
    }"#;
    let post: Post = serde_json::from_str(json).expect("post");
    assert_eq!(post.id, 12);
    assert_eq!(post.author_id, 3);
    assert_eq!(post.created_at, "2025-06-01T09:00:00");
    assert_eq!(post.updated_at, "2025-06-02T10:30:00");
}

#[test]
fn comment_deserializes_camel_case() {
    let json = r#"{
        "id": 5,
        "postId": 12,
        "userId": 3,
        "content": "Nice post",
        "createdAt": "2025-06-03T08:00:00"
    }"#;
    let comment: Comment = serde_json::from_str(json).expect("comment");
    assert_eq!(comment.post_id, 12);
    assert_eq!(comment.user_id, 3);
}

#[test]
fn auth_response_reads_access_token() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"accessToken":"h.p.s"}"#).expect("auth response");
    assert_eq!(resp.access_token, "h.p.s");
}

#[test]
fn user_defaults_missing_id_and_roles() {
    let user: User = serde_json::from_str(r#"{"username":"bob"}"#).expect("user");
    assert_eq!(user.id, None);
    assert!(user.roles.is_empty());
}

#[test]
fn create_comment_request_serializes_camel_case() {
    let body = CreateCommentRequest {
        post_id: 12,
        content: "Nice post".to_owned(),
    };
    let json = serde_json::to_value(&body).expect("json");
    assert_eq!(json["postId"], 12);
    assert_eq!(json["content"], "Nice post");
}
