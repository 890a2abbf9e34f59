use serde::{Deserialize, Serialize};

/// Имя, которое получает продавец без заполненных имени и фамилии
pub const UNKNOWN_SELLER_NAME: &str = "Unknown";

/// Продавец
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Seller {
    pub fn new(
        id: impl Into<String>,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
        }
    }

    /// Отображаемое имя: "Имя Фамилия" без крайних пробелов, либо "Unknown"
    pub fn display_name(&self) -> String {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let trimmed = full.trim();
        if trimmed.is_empty() {
            UNKNOWN_SELLER_NAME.to_string()
        } else {
            trimmed.to_string()
        }
    }
}
