use super::{DateTime, PaymentId, TicketId};

/// Card details submitted with a payment.
///
/// Only the issuer and the last four digits of the number are ever
/// persisted; the rest of the card data is dropped once the payment is
/// recorded.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CardData {
    /// Card issuer (e.g. "VISA")
    pub issuer: String,
    /// The full card number, as digits
    ///
    /// Clients may send either a string of digits or a JSON integer.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "digits::deserialize"))]
    #[cfg_attr(feature = "schemars", schemars(with = "String"))]
    pub number: String,
    /// Name printed on the card
    pub name: String,
    /// Expiration date as printed on the card
    pub expiration_date: String,
    /// Security code
    #[cfg_attr(feature = "serde", serde(deserialize_with = "digits::deserialize"))]
    #[cfg_attr(feature = "schemars", schemars(with = "String"))]
    pub cvv: String,
}

#[cfg(feature = "serde")]
mod digits {
    use serde::{Deserialize, Deserializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    /// A non-empty run of ASCII digits, given as a string or an integer.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let text = match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text.trim().to_owned(),
            Raw::Number(number) => number.to_string(),
        };
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            Ok(text)
        } else {
            Err(D::Error::custom("expected a string of digits"))
        }
    }
}

// Hand-written so the card number and security code never reach a log line.
impl std::fmt::Debug for CardData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardData")
            .field("issuer", &self.issuer)
            .field("number", &format_args!("****{}", self.last_digits()))
            .finish_non_exhaustive()
    }
}

impl CardData {
    /// The last four characters of the card number (or the whole number if shorter).
    pub fn last_digits(&self) -> &str {
        let number = self.number.trim();
        let start = number
            .char_indices()
            .rev()
            .nth(3)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &number[start..]
    }
}

/// A recorded payment for a ticket.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Payment {
    /// Unique identifier for the payment
    pub id: PaymentId,
    /// The ticket paid for
    pub ticket_id: TicketId,
    /// Amount charged
    pub value: i64,
    /// Card issuer
    pub card_issuer: String,
    /// Last four digits of the card number
    pub card_last_digits: String,
    /// When the payment was recorded
    pub created_at: DateTime,
    /// When the payment was last modified
    pub updated_at: DateTime,
}

/// The data written when a payment is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    /// The ticket paid for
    pub ticket_id: TicketId,
    /// Amount charged
    pub value: i64,
    /// Card issuer
    pub card_issuer: String,
    /// Last four digits of the card number
    pub card_last_digits: String,
}

impl NewPayment {
    /// Derive the persisted payment data from the submitted card.
    pub fn from_card(ticket_id: TicketId, value: i64, card: &CardData) -> Self {
        Self {
            ticket_id,
            value,
            card_issuer: card.issuer.clone(),
            card_last_digits: card.last_digits().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: &str) -> CardData {
        CardData {
            issuer: "MASTERCARD".to_owned(),
            number: number.to_owned(),
            name: "Jane Doe".to_owned(),
            expiration_date: "12/30".to_owned(),
            cvv: "123".to_owned(),
        }
    }

    #[test]
    fn keeps_only_last_four_digits() {
        let payment = NewPayment::from_card(TicketId(7), 500, &card("4111111111111234"));
        assert_eq!(payment.card_last_digits, "1234");
        assert_eq!(payment.card_issuer, "MASTERCARD");
    }

    #[test]
    fn short_numbers_are_kept_whole() {
        assert_eq!(card("42").last_digits(), "42");
    }

    #[test]
    fn numbers_may_be_sent_as_integers() {
        let card: CardData = serde_json::from_str(
            r#"{"issuer":"VISA","number":4111111111111234,"name":"Jane Doe","expirationDate":"12/30","cvv":123}"#,
        )
        .unwrap();
        assert_eq!(card.number, "4111111111111234");
        assert_eq!(card.cvv, "123");
        assert_eq!(card.last_digits(), "1234");
    }

    #[test]
    fn non_digit_numbers_are_rejected() {
        for number in [r#""abcd""#, r#""""#, r#""4111-1111""#, "-42", "12.5", "null"] {
            let json = format!(
                r#"{{"issuer":"VISA","number":{number},"name":"Jane Doe","expirationDate":"12/30","cvv":"123"}}"#
            );
            assert!(serde_json::from_str::<CardData>(&json).is_err(), "{number}");
        }
    }

    #[test]
    fn debug_output_masks_the_card() {
        let rendered = format!("{:?}", card("4111111111111234"));
        assert!(!rendered.contains("4111111111111234"));
        assert!(!rendered.contains("Jane Doe"));
        assert!(rendered.contains("****1234"));
    }
}
