use crate::api::SessionId;

#[test]
fn test_session_id_unique() {
    assert_ne!(SessionId::new(), SessionId::new());
}

#[test]
fn test_session_id_round_trips_through_display() {
    let id = SessionId::new();
    let parsed: SessionId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn test_session_id_rejects_garbage() {
    assert!("not-a-uuid".parse::<SessionId>().is_err());
}

#[test]
fn test_session_id_serializes_as_uuid_string() {
    let id = SessionId::new();
    let json = serde_json::to_value(id).unwrap();
    assert_eq!(json, serde_json::Value::String(id.to_string()));
}
