use serde_json::{json, Value};

use crate::services::client::AnswerClient;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload<'a>(req: &'a Value) -> &'a Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

pub fn handle(client: &AnswerClient, input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    match cmd_str {
        "ping" => ok(id, json!({ "message": "kotoba-core alive" })),

        "refresh" => match client.refresh() {
            Ok(()) => ok(id, json!({ "ready": client.is_ready() })),
            Err(e) => err(id, e.to_string()),
        },

        "get_answer" => {
            let utterance = payload
                .get("utterance")
                .and_then(|v| v.as_str())
                .unwrap_or("");

            match client.get_answer(utterance) {
                Ok(answer) => ok(id, json!({ "answer": answer })),
                Err(e) => err(id, e.to_string()),
            }
        }

        _ => err(id, "unknown command"),
    }
}
