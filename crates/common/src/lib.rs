pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::new(true);
        assert_eq!(h.status, "ok");
        assert_eq!(h.database, "up");
    }

    #[test]
    fn health_reports_database_down() {
        let h = types::Health::new(false);
        assert_eq!(h.status, "ok");
        assert_eq!(h.database, "down");
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["database"], "down");
    }

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!(utils::logging::LogFormat::parse("JSON"), utils::logging::LogFormat::Json);
        assert_eq!(utils::logging::LogFormat::parse("compact"), utils::logging::LogFormat::Compact);
        assert_eq!(utils::logging::LogFormat::parse("whatever"), utils::logging::LogFormat::Compact);
    }
}
