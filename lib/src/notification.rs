use crate::error::AppError;
use serde::Deserialize;
use serde_json::Value;

/// One SNS notification to forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    pub message_id: String,
    pub message: String,
}

/// Validated, non-empty batch of records in the order they were received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationBatch {
    pub records: Vec<NotificationRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    Delivered { status: u16 },
    Failed { status: Option<u16>, detail: String },
}

impl PostOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, PostOutcome::Delivered { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationResult {
    pub sent: Vec<NotificationRecord>,
    pub failed: Vec<NotificationRecord>,
}

impl NotificationResult {
    pub fn attempted(&self) -> usize {
        self.sent.len() + self.failed.len()
    }
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "Records")]
    records: Option<Vec<Value>>,
}

#[derive(Deserialize)]
struct RawRecord {
    #[serde(rename = "Sns")]
    sns: Option<RawSns>,
}

#[derive(Deserialize)]
struct RawSns {
    #[serde(rename = "MessageId")]
    message_id: Option<Value>,
    #[serde(rename = "Message")]
    message: Option<Value>,
}

impl NotificationBatch {
    pub fn validate(event: &Value) -> Result<Self, AppError> {
        let raw_event = RawEvent::deserialize(event).map_err(|error| AppError::input(&format!("Malformed event: {error}")))?;

        let raw_records = raw_event.records.ok_or_else(|| AppError::input("No 'Records' field in the received event"))?;

        if raw_records.is_empty() {
            return Err(AppError::input("Empty 'Records' field in the received event"));
        }

        let mut records = Vec::with_capacity(raw_records.len());
        for (index, raw_record) in raw_records.into_iter().enumerate() {
            let raw_record = RawRecord::deserialize(&raw_record).map_err(|error| AppError::input(&format!("Record {index} is malformed: {error}")))?;

            let sns = raw_record.sns.ok_or_else(|| AppError::input(&format!("Record {index} has no 'Sns' field")))?;

            let message_id = string_field(index, "Sns.MessageId", sns.message_id)?;
            let message = string_field(index, "Sns.Message", sns.message)?;

            records.push(NotificationRecord { message_id, message });
        }

        Ok(Self { records })
    }
}

fn string_field(
    index: usize,
    name: &str,
    value: Option<Value>,
) -> Result<String, AppError> {
    match value {
        None | Some(Value::Null) => Err(AppError::input(&format!("Record {index} has no '{name}' field"))),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(AppError::input(&format!("Record {index} has '{name}' that is not a string"))),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_keep_records_in_received_order() {
        let event = json!({
            "Records": [
                {"EventSource": "aws:sns", "Sns": {"MessageId": "m1", "Message": "build passed", "Subject": null}},
                {"EventSource": "aws:sns", "Sns": {"MessageId": "m2", "Message": "deploy failed"}}
            ]
        });

        let batch = NotificationBatch::validate(&event).unwrap();

        assert_eq!(
            vec![
                NotificationRecord {
                    message_id: "m1".to_string(),
                    message: "build passed".to_string()
                },
                NotificationRecord {
                    message_id: "m2".to_string(),
                    message: "deploy failed".to_string()
                },
            ],
            batch.records
        );
    }

    #[test]
    fn should_reject_event_without_records() {
        let error = NotificationBatch::validate(&json!({"detail": "nothing"})).unwrap_err();

        assert!(error.is_input());
        assert!(error.cause.contains("'Records'"));
    }

    #[test]
    fn should_reject_empty_records() {
        let error = NotificationBatch::validate(&json!({"Records": []})).unwrap_err();

        assert!(error.is_input());
    }

    #[test]
    fn should_reject_non_object_event() {
        let error = NotificationBatch::validate(&json!("Records")).unwrap_err();

        assert!(error.is_input());
    }

    #[test]
    fn should_reject_whole_batch_when_one_record_has_no_message() {
        let event = json!({
            "Records": [
                {"Sns": {"MessageId": "m1", "Message": "build passed"}},
                {"Sns": {"MessageId": "m2"}}
            ]
        });

        let error = NotificationBatch::validate(&event).unwrap_err();

        assert!(error.is_input());
        assert!(error.cause.contains("Record 1"));
        assert!(error.cause.contains("'Sns.Message'"));
    }

    #[test]
    fn should_reject_record_without_message_id() {
        let event = json!({"Records": [{"Sns": {"Message": "build passed"}}]});

        let error = NotificationBatch::validate(&event).unwrap_err();

        assert!(error.is_input());
        assert!(error.cause.contains("'Sns.MessageId'"));
    }

    #[test]
    fn should_name_record_and_field_when_message_is_not_a_string() {
        let event = json!({
            "Records": [
                {"Sns": {"MessageId": "m1", "Message": "ok"}},
                {"Sns": {"MessageId": "m2", "Message": {"nested": true}}}
            ]
        });

        let error = NotificationBatch::validate(&event).unwrap_err();

        assert!(error.is_input());
        assert_eq!("Record 1 has 'Sns.Message' that is not a string", error.cause);
    }

    #[test]
    fn should_name_record_and_field_when_message_id_is_not_a_string() {
        let event = json!({"Records": [{"Sns": {"MessageId": 42, "Message": "build passed"}}]});

        let error = NotificationBatch::validate(&event).unwrap_err();

        assert!(error.is_input());
        assert_eq!("Record 0 has 'Sns.MessageId' that is not a string", error.cause);
    }

    #[test]
    fn should_name_record_when_record_is_not_an_object() {
        let event = json!({"Records": [{"Sns": {"MessageId": "m1", "Message": "ok"}}, "m2"]});

        let error = NotificationBatch::validate(&event).unwrap_err();

        assert!(error.is_input());
        assert!(error.cause.starts_with("Record 1 is malformed"));
    }

    #[test]
    fn should_reject_record_that_is_not_sns() {
        let event = json!({"Records": [{"eventSource": "aws:sqs", "body": "hello"}]});

        let error = NotificationBatch::validate(&event).unwrap_err();

        assert!(error.is_input());
        assert!(error.cause.contains("'Sns'"));
    }
}
