//! Recipients typed by hand instead of uploaded.

use crate::model::message::{OutboundMessage, SendRequest};

use super::error::CsvError;

/// Splits free text on commas, semicolons, and line breaks.
pub fn parse_manual_recipients(input: &str) -> Vec<String> {
    input
        .split([',', ';', '\n', '\r'])
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

/// Uniform-content request for manually entered numbers.
pub fn build_manual_payload(
    numbers: &[String],
    message: &str,
    exchange_id: &str,
) -> Result<SendRequest, CsvError> {
    if exchange_id.trim().is_empty() {
        return Err(CsvError::MissingExchange);
    }
    if message.trim().is_empty() {
        return Err(CsvError::MissingMessage);
    }
    if numbers.is_empty() {
        return Err(CsvError::NoRecipients);
    }

    Ok(SendRequest {
        messages: numbers
            .iter()
            .map(|phone| OutboundMessage {
                phone_number: phone.clone(),
                content: message.to_string(),
                exchange_id: exchange_id.trim().to_string(),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_every_separator() {
        let numbers = parse_manual_recipients("+237111, +237222;\n+237333\r\n\n , ");
        assert_eq!(numbers, ["+237111", "+237222", "+237333"]);
    }

    #[test]
    fn builds_one_message_per_number() {
        let numbers = parse_manual_recipients("+237111\n+237222");
        let request = build_manual_payload(&numbers, "Hello", "ex1").unwrap();
        assert_eq!(request.len(), 2);
        assert_eq!(request.messages[0].exchange_id, "ex1");
        assert_eq!(request.messages[1].content, "Hello");
    }

    #[test]
    fn refuses_incomplete_forms() {
        let numbers = vec!["+237111".to_string()];
        assert_eq!(build_manual_payload(&[], "Hi", "ex1"), Err(CsvError::NoRecipients));
        assert_eq!(build_manual_payload(&numbers, "", "ex1"), Err(CsvError::MissingMessage));
        assert_eq!(build_manual_payload(&numbers, "Hi", " "), Err(CsvError::MissingExchange));
    }
}
