//! Rendering of operation results for the command line.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::netbios::{AdapterEntry, SetResponse};

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// One line per adapter.
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Result of one command, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Output of `get`.
    Adapters(Vec<AdapterEntry>),
    /// Output of `set`.
    Set(SetResponse),
    /// Output of `interfaces`.
    Interfaces(Vec<String>),
}

impl Report {
    /// Renders the report in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => Ok(self.to_text()),
        }
    }

    fn to_text(&self) -> String {
        let lines: Vec<String> = match self {
            Self::Adapters(entries) => entries
                .iter()
                .map(|e| format!("{} [{}]: {}", e.description, e.details.index, e.details.netbios))
                .collect(),
            Self::Set(SetResponse::Rejected) => vec!["false".to_string()],
            Self::Set(SetResponse::Applied(entries)) => entries
                .iter()
                .map(|e| format!("{} [{}]: {}", e.description, e.details.index, e.details.result))
                .collect(),
            Self::Interfaces(names) => names.clone(),
        };
        lines.join("\n")
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Adapters(entries) => entries.serialize(serializer),
            Self::Set(response) => response.serialize(serializer),
            Self::Interfaces(names) => names.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netbios::{NetbiosDetails, NetbiosMode, SetDetails, SetEntry};

    fn adapters() -> Report {
        Report::Adapters(vec![AdapterEntry::new(
            "Intel Ethernet",
            NetbiosDetails {
                index: 1,
                netbios: NetbiosMode::Enabled,
            },
        )])
    }

    #[test]
    fn json_adapters_is_list_of_maps() {
        let text = adapters().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            value,
            serde_json::json!([{"Intel Ethernet": {"Index": 1, "NetBIOS": "enabled"}}])
        );
    }

    #[test]
    fn text_adapters_one_line_each() {
        assert_eq!(
            adapters().render(OutputFormat::Text).unwrap(),
            "Intel Ethernet [1]: enabled"
        );
    }

    #[test]
    fn rejected_set_renders_false_in_both_formats() {
        let report = Report::Set(SetResponse::Rejected);
        assert_eq!(report.render(OutputFormat::Json).unwrap(), "false");
        assert_eq!(report.render(OutputFormat::Text).unwrap(), "false");
    }

    #[test]
    fn text_set_shows_result_message() {
        let report = Report::Set(SetResponse::Applied(vec![SetEntry::new(
            "Wi-Fi",
            SetDetails {
                index: 3,
                result: "DHCP not enabled. Cannot set to default.".to_string(),
            },
        )]));

        assert_eq!(
            report.render(OutputFormat::Text).unwrap(),
            "Wi-Fi [3]: DHCP not enabled. Cannot set to default."
        );
    }

    #[test]
    fn text_interfaces_one_per_line() {
        let report = Report::Interfaces(vec!["Ethernet0".to_string(), "Wi-Fi".to_string()]);
        assert_eq!(report.render(OutputFormat::Text).unwrap(), "Ethernet0\nWi-Fi");
    }

    #[test]
    fn empty_text_report_is_empty() {
        assert_eq!(Report::Adapters(vec![]).render(OutputFormat::Text).unwrap(), "");
    }

    #[test]
    fn format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }
}
