use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const ENDS_FORMAT: &str = "%b %d, %Y";

/// Usage banner shown above the program table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummary {
    pub name: String,
    pub ends_on: NaiveDate,
    pub available: u64,
    pub consumed: u64,
    pub total_balance: u64,
    pub currency: String,
}

impl Default for SubscriptionSummary {
    fn default() -> Self {
        Self {
            name: "Subscription 01".into(),
            ends_on: NaiveDate::from_ymd_opt(2023, 8, 23).unwrap_or_default(),
            available: 8_000,
            consumed: 400,
            total_balance: 1_200,
            currency: "SAR".into(),
        }
    }
}

impl SubscriptionSummary {
    pub fn ends_label(&self) -> String {
        format!("Ends {}", self.ends_on.format(ENDS_FORMAT))
    }

    pub fn format_amount(&self, amount: u64) -> String {
        format!("{} {}", group_thousands(amount), self.currency)
    }

    /// Label/value pairs in banner order.
    pub fn figures(&self) -> [(&'static str, String); 3] {
        [
            ("Available", self.format_amount(self.available)),
            ("Consumed", self.format_amount(self.consumed)),
            ("Total Balance", self.format_amount(self.total_balance)),
        ]
    }
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
