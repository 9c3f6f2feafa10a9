use std::io;

use harvest_client::{ClientError, SuccessEnvelope};
use serde::Serialize;
use serde_json::json;

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let payload = json!({
        "ok": true,
        "command": success.command,
        "version": success.version,
        "data": success.data,
    });
    serialize_json_pretty(&payload)
}

pub fn render_error_json(error: &ClientError) -> io::Result<String> {
    let payload = json!({
        "ok": false,
        "error": {
            "code": error.code,
            "message": error.message,
            "recovery_steps": error.recovery_steps,
        },
    });
    serialize_json_pretty(&payload)
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use harvest_client::ClientError;
    use harvest_client::contracts::envelope::success;
    use serde_json::{Value, json};

    use super::{render_error_json, render_success_json};

    #[test]
    fn success_json_round_trips() {
        let envelope = success("export", json!({ "year": 2023 }));
        assert!(envelope.is_ok());
        if let Ok(envelope) = envelope {
            let rendered = render_success_json(&envelope);
            assert!(rendered.is_ok());
            if let Ok(body) = rendered {
                let parsed = serde_json::from_str::<Value>(&body);
                assert!(parsed.is_ok());
                if let Ok(value) = parsed {
                    assert_eq!(value["ok"], true);
                    assert_eq!(value["command"], "export");
                    assert_eq!(value["data"]["year"], 2023);
                }
            }
        }
    }

    #[test]
    fn error_json_carries_code_and_steps() {
        let error = ClientError::new(
            "date_parse_failed",
            "bad date",
            vec!["Capture a fresh HAR.".to_string()],
        );
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(body) = rendered {
            let parsed = serde_json::from_str::<Value>(&body);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], false);
                assert_eq!(value["error"]["code"], "date_parse_failed");
                assert_eq!(value["error"]["recovery_steps"][0], "Capture a fresh HAR.");
            }
        }
    }
}
