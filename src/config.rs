use crate::usecase::services::edit_service::FieldRules;

pub const APP_TITLE: &str = "Sheet Grid";

/// Largest number of characters a single spreadsheet cell may hold.
pub const EXCEL_MAX_CELL_CHARS: usize = 32_767;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

pub const ACCEPTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods", "csv"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub window_title: String,
    pub accepted_extensions: Vec<String>,
    pub max_upload_bytes: usize,
    pub max_cell_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: APP_TITLE.to_string(),
            accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_cell_chars: EXCEL_MAX_CELL_CHARS,
        }
    }
}

impl AppConfig {
    pub fn field_rules(&self) -> FieldRules {
        FieldRules {
            max_cell_chars: self.max_cell_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_accepts_workbooks_and_csv() {
        let config = AppConfig::default();

        for ext in ["xlsx", "xls", "ods", "csv"] {
            assert!(
                config.accepted_extensions.iter().any(|e| e == ext),
                "{ext} should be accepted"
            );
        }
    }

    #[test]
    fn field_rules_follow_cell_limit() {
        let config = AppConfig {
            max_cell_chars: 10,
            ..AppConfig::default()
        };

        assert_eq!(config.field_rules(), FieldRules { max_cell_chars: 10 });
    }
}
