use serde::Deserialize;

/// Top-level firewx configuration file.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FirewxConfig {
    /// Reporting range settings.
    #[serde(default)]
    pub range: RangeToml,

    /// Rolling statistics settings.
    #[serde(default)]
    pub rolling: RollingToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

/// `[range]`: how the reporting range is chosen.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    /// First day, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Last day, `YYYY-MM-DD`.
    pub to: Option<String>,
    /// Named season label.
    pub season: Option<String>,
    /// Season table for seasonal output.
    pub scheme: Option<String>,
    /// Use the entire extent of the data.
    #[serde(default)]
    pub all: bool,
}

/// `[rolling]`
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RollingToml {
    /// Rolling period in days.
    pub period: Option<u32>,
}

/// `[output]`
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Summary mode name.
    pub mode: Option<String>,
    /// Append a trailing duplicate row to monthly and seasonal tables.
    #[serde(default)]
    pub step_padding: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg: FirewxConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, FirewxConfig::default());
    }

    #[test]
    fn full_file() {
        let cfg: FirewxConfig = toml::from_str(
            r#"
            [range]
            from = "2020-06-01"
            to = "2020-08-31"
            season = "JJA"
            scheme = "solar"
            all = true

            [rolling]
            period = 14

            [output]
            mode = "rolling"
            step_padding = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.range.from.as_deref(), Some("2020-06-01"));
        assert_eq!(cfg.range.season.as_deref(), Some("JJA"));
        assert!(cfg.range.all);
        assert_eq!(cfg.rolling.period, Some(14));
        assert_eq!(cfg.output.mode.as_deref(), Some("rolling"));
        assert!(cfg.output.step_padding);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<FirewxConfig, _> = toml::from_str("[range]\nstart = \"2020-01-01\"\n");
        assert!(result.is_err());
    }
}
